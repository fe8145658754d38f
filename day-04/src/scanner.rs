use rayon::prelude::*;
use tracing::{debug, trace};

use crate::{
    grid::{Grid, Position},
    pattern::{Diagonal, Direction, WordSet},
};

/// Read the three cells of `direction`'s diagonal through `center`.
///
/// Returns `None` when the diagonal would leave the grid.
pub fn diagonal(grid: &Grid, center: Position, direction: Direction) -> Option<Diagonal> {
    let (drow, dcol) = direction.step();
    let first = center.offset(-drow, -dcol)?;
    let last = center.offset(drow, dcol)?;
    Some(Diagonal([grid.get(first)?, grid.get(center)?, grid.get(last)?]))
}

/// Counts X shaped crossings of two accepted words around a shared pivot cell
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    words: WordSet,
}

impl Scanner {
    pub fn new(words: WordSet) -> Self {
        Self { words }
    }

    /// Both diagonals through `center` read as accepted words and the center is the pivot
    pub fn is_x_pattern(&self, grid: &Grid, center: Position) -> bool {
        if grid.get(center) != Some(self.words.pivot()) {
            return false;
        }

        Direction::ALL.iter().all(|&direction| {
            diagonal(grid, center, direction).is_some_and(|diag| self.words.accepts(diag))
        })
    }

    /// Qualifying centers in row-major order
    pub fn centers<'a>(&'a self, grid: &'a Grid) -> impl Iterator<Item = Position> + 'a {
        grid.interior()
            .filter(move |&center| self.is_x_pattern(grid, center))
    }

    #[tracing::instrument(skip_all, fields(rows = grid.rows(), cols = grid.cols()))]
    pub fn count(&self, grid: &Grid) -> usize {
        let total = self
            .centers(grid)
            .inspect(|center| trace!(?center, "found x pattern"))
            .count();

        debug!("Found {} x patterns", total);
        total
    }

    /// Same result as [`Scanner::count`], with rows partitioned across the rayon pool
    #[tracing::instrument(skip_all, fields(rows = grid.rows(), cols = grid.cols()))]
    pub fn count_par(&self, grid: &Grid) -> usize {
        let last_col = grid.cols().saturating_sub(1);

        let total = (1..grid.rows().saturating_sub(1))
            .into_par_iter()
            .map(|row| {
                (1..last_col)
                    .filter(|&col| self.is_x_pattern(grid, Position::new(row, col)))
                    .count()
            })
            .sum::<usize>();

        debug!("Found {} x patterns", total);
        total
    }
}
