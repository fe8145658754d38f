use std::{io, path::PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum GridError {
    #[error("Failed to read grid from {}", .path.display())]
    #[diagnostic(
        code(day_04::load),
        help("check that the input file exists and is readable")
    )]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Ragged(#[from] RaggedRowError),
}

/// A grid row whose length differs from the first row
#[derive(Debug, Error, Diagnostic)]
#[error("Row {row} has {found} columns, expected {expected}")]
#[diagnostic(
    code(day_04::ragged_row),
    help("every non-blank line of the grid must have the same length")
)]
pub struct RaggedRowError {
    #[source_code]
    pub src: NamedSource<String>,
    #[label("this row")]
    pub span: SourceSpan,
    pub row: usize,
    pub expected: usize,
    pub found: usize,
}

#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum PatternError {
    #[error("Accepted words must share a middle character, got {first:?} and {second:?}")]
    #[diagnostic(code(day_04::pivot_mismatch))]
    PivotMismatch { first: char, second: char },
}
