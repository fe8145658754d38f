use std::path::PathBuf;

use clap::Parser;
use day_04::{Grid, Report, Scanner};
use miette::Context;
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

/// Count X-MAS crossings in a letter grid
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Grid file to scan
    #[arg(default_value = "input.txt")]
    input: PathBuf,

    /// Scan rows in parallel
    #[arg(short, long)]
    parallel: bool,
}

#[tracing::instrument]
fn main() -> miette::Result<()> {
    init();
    let args = Args::parse();

    let grid = Grid::load(&args.input).context("load part 2 input")?;
    let scanner = Scanner::default();
    let report = if args.parallel {
        Report::from_grid_par(&grid, &scanner)
    } else {
        Report::from_grid(&grid, &scanner)
    };

    println!("{}", report);
    Ok(())
}

fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("day_04=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::NONE)
        .with_writer(std::io::stderr)
        .try_init();
}
