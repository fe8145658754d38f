use miette::Context;

use crate::{grid::Grid, report::Report, scanner::Scanner};

/// Count the X-MAS crossings in `input` and render the report line
#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> miette::Result<String> {
    let grid = input
        .parse::<Grid>()
        .context("Failed to parse input grid")?;
    let report = Report::from_grid(&grid, &Scanner::default());
    Ok(report.to_string())
}
