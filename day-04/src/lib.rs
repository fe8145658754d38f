pub mod error;
pub mod grid;
pub mod part2;
pub mod pattern;
pub mod report;
pub mod scanner;

pub use error::{GridError, PatternError};
pub use grid::{Grid, Position};
pub use report::Report;
pub use scanner::Scanner;
