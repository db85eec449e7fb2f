//! Kirchhoff - mesh equation solver
//!
//! Solves a system of complex KVL equations written as augmented rows.
//!
//! # Usage
//!
//! ```bash
//! printf '10-j5, j5, 12\nj5, 8-j3, 0\n' | kirchhoff --precision 4
//! kirchhoff circuit.kvl
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use kirchhoff_core::{
    build_report, input,
    solver::PIVOT_TOLERANCE,
    KirchhoffError, Precision, SolutionReport, SolveConfig, DEFAULT_PRECISION, MAX_PRECISION,
};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

/// Complex mesh (KVL) equation solver
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File with one augmented row per line (reads stdin when omitted)
    #[arg(value_name = "SYSTEM_FILE")]
    system_file: Option<PathBuf>,

    /// Number of fractional digits in the output
    #[arg(short, long, default_value_t = DEFAULT_PRECISION,
          value_parser = clap::value_parser!(u8).range(0..=MAX_PRECISION as i64))]
    precision: u8,

    /// Pivot modulus below which the system is reported as singular
    #[arg(long, default_value_t = PIVOT_TOLERANCE)]
    pivot_tolerance: f64,
}

fn run(args: &Args) -> Result<SolutionReport, KirchhoffError> {
    // Read the system
    let request = match &args.system_file {
        Some(path) => input::read_file(path)?,
        None => input::read_system(std::io::stdin().lock())?,
    };

    let config = SolveConfig::new()
        .with_precision(Precision::new(args.precision)?)
        .with_pivot_tolerance(args.pivot_tolerance);

    build_report(&request, &config)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(error = ?err, "solve failed");
            println!("Error [{}]: {}", err.kind(), err.detail());
            ExitCode::FAILURE
        }
    }
}
