use std::{
    fmt::{self, Display, Formatter},
    fs,
    path::Path,
    str::FromStr,
};

use itertools::iproduct;
use miette::NamedSource;
use tracing::debug;

use crate::error::{GridError, RaggedRowError};

/// Represents coordinates in the grid
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Shift by a signed row/column delta, `None` if either coordinate would go negative
    pub fn offset(self, drow: isize, dcol: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(drow)?,
            col: self.col.checked_add_signed(dcol)?,
        })
    }
}

/// Rectangular character grid, immutable once loaded
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    cells: Vec<Vec<char>>,
    cols: usize,
}

impl Grid {
    /// Read and parse the grid stored at `path`
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GridError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| GridError::Load {
            path: path.to_path_buf(),
            source,
        })?;

        // invalid UTF-8 becomes U+FFFD so every cell keeps its column
        Self::parse_named(path.display().to_string(), &String::from_utf8_lossy(&bytes))
    }

    pub fn parse(input: &str) -> Result<Self, GridError> {
        Self::parse_named("input", input)
    }

    /// Parse a grid, trimming each line and skipping blank ones.
    ///
    /// `name` only labels the source in diagnostics.
    pub fn parse_named(name: impl AsRef<str>, input: &str) -> Result<Self, GridError> {
        let mut cells: Vec<Vec<char>> = Vec::new();
        let mut offset = 0;

        for line in input.split_inclusive('\n') {
            let start = offset;
            offset += line.len();

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let row: Vec<char> = trimmed.chars().collect();
            if let Some(expected) = cells.first().map(Vec::len) {
                if row.len() != expected {
                    let leading = line.len() - line.trim_start().len();
                    return Err(RaggedRowError {
                        src: NamedSource::new(name, input.to_string()),
                        span: (start + leading, trimmed.len()).into(),
                        row: cells.len(),
                        expected,
                        found: row.len(),
                    }
                    .into());
                }
            }
            cells.push(row);
        }

        let cols = cells.first().map_or(0, Vec::len);
        debug!("Parsed grid with {} rows and {} columns", cells.len(), cols);

        Ok(Self { cells, cols })
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, position: Position) -> Option<char> {
        self.cells
            .get(position.row)
            .and_then(|row| row.get(position.col))
            .copied()
    }

    /// Cells with a full ring of neighbours, in row-major order
    pub fn interior(&self) -> impl Iterator<Item = Position> {
        iproduct!(
            1..self.rows().saturating_sub(1),
            1..self.cols.saturating_sub(1)
        )
        .map(|(row, col)| Position::new(row, col))
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::Scanner;
    use miette::IntoDiagnostic;
    use rstest::rstest;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_trims_and_skips_blank_lines() -> miette::Result<()> {
        let grid = Grid::parse("\n  M.S  \r\n\n.A.\r\nM.S\n\n")?;
        assert_eq!(3, grid.rows());
        assert_eq!(3, grid.cols());
        assert_eq!(Some('A'), grid.get(Position::new(1, 1)));
        assert_eq!("M.S\n.A.\nM.S\n", grid.to_string());
        Ok(())
    }

    #[rstest]
    #[case("")]
    #[case("\n\n")]
    #[case("   \n\t\n")]
    fn test_parse_empty(#[case] input: &str) -> miette::Result<()> {
        let grid = Grid::parse(input)?;
        assert!(grid.is_empty());
        assert_eq!(0, grid.cols());
        assert_eq!(0, grid.interior().count());
        Ok(())
    }

    #[test]
    fn test_parse_ragged() {
        let err = Grid::parse("MAS\nMA\nSAM").unwrap_err();
        match err {
            GridError::Ragged(ragged) => {
                assert_eq!(1, ragged.row);
                assert_eq!(3, ragged.expected);
                assert_eq!(2, ragged.found);
                assert_eq!(4, ragged.span.offset());
                assert_eq!(2, ragged.span.len());
            }
            other => panic!("expected ragged row error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let err = Grid::load("does/not/exist.txt").unwrap_err();
        assert!(matches!(err, GridError::Load { .. }));
    }

    #[test]
    fn test_load_invalid_utf8_cell() -> miette::Result<()> {
        let mut file = NamedTempFile::new().into_diagnostic()?;
        file.write_all(b"M\xe9S\n.A.\nM.S\n").into_diagnostic()?;

        let grid = Grid::load(file.path())?;
        assert_eq!(3, grid.rows());
        assert_eq!(3, grid.cols());
        assert_eq!(Some(char::REPLACEMENT_CHARACTER), grid.get(Position::new(0, 1)));
        assert_eq!(1, Scanner::default().count(&grid));
        Ok(())
    }

    #[rstest]
    #[case("MAS\nMAS", 0)]
    #[case("MA\nMA\nMA", 0)]
    #[case("MAS\nMAS\nMAS", 1)]
    #[case("MASM\nMASM\nMASM\nMASM", 4)]
    fn test_interior_count(#[case] input: &str, #[case] expected: usize) -> miette::Result<()> {
        let grid = Grid::parse(input)?;
        assert_eq!(expected, grid.interior().count());
        Ok(())
    }

    #[test]
    fn test_interior_row_major() -> miette::Result<()> {
        let grid = Grid::parse("MASM\nMASM\nMASM\nMASM")?;
        let positions: Vec<_> = grid.interior().collect();
        assert_eq!(
            vec![
                Position::new(1, 1),
                Position::new(1, 2),
                Position::new(2, 1),
                Position::new(2, 2),
            ],
            positions
        );
        Ok(())
    }

    #[test]
    fn test_position_offset() {
        let origin = Position::new(0, 0);
        assert_eq!(None, origin.offset(-1, 0));
        assert_eq!(Some(Position::new(1, 1)), origin.offset(1, 1));
    }
}
