use std::fmt::{self, Display, Formatter};

use crate::{grid::Grid, scanner::Scanner};

/// Outcome of scanning one grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    /// No non-blank lines were loaded, so nothing was scanned
    Empty,
    Count(usize),
}

impl Report {
    pub fn from_grid(grid: &Grid, scanner: &Scanner) -> Self {
        Self::build(grid, |grid| scanner.count(grid))
    }

    pub fn from_grid_par(grid: &Grid, scanner: &Scanner) -> Self {
        Self::build(grid, |grid| scanner.count_par(grid))
    }

    fn build(grid: &Grid, count: impl FnOnce(&Grid) -> usize) -> Self {
        if grid.is_empty() {
            return Self::Empty;
        }
        Self::Count(count(grid))
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Report::Empty => write!(f, "The grid is empty."),
            Report::Count(count) => write!(f, "Number of X-MAS patterns: {}", count),
        }
    }
}
