// ABOUTME: Workout stats CLI - computes and prints summaries for workout sensor packages
// ABOUTME: Reads packages from a JSON file, command-line specs, or the built-in samples
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Process the built-in reference packages
//! workout-stats
//!
//! # Process packages given on the command line
//! workout-stats -p RUN:15000,1,75 -p SWM:720,1,80,25,40
//!
//! # Process a JSON file and emit JSON lines, rejecting degenerate input
//! workout-stats --input packages.json --format json --strict
//! ```

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use workout_stats::{
    config::TrackerConfig,
    driver::{resolve_packages, WorkoutProcessor},
    errors::AppResult,
    formatters::OutputFormat,
    logging::LoggingConfig,
};

#[derive(Parser)]
#[command(
    name = "workout-stats",
    about = "Workout statistics calculator",
    long_about = "Computes distance, mean speed, and calories for running, walking, and swimming sensor packages."
)]
struct Cli {
    /// JSON file containing an array of {"workout_type", "data"} packages
    #[arg(long, short = 'i')]
    input: Option<PathBuf>,

    /// Package as CODE:v1,v2,... (repeatable), e.g. RUN:15000,1,75
    #[arg(long = "package", short = 'p')]
    packages: Vec<String>,

    /// Output format: text or json
    #[arg(long, short = 'f')]
    format: Option<OutputFormat>,

    /// Reject zero or negative durations, weights, and heights
    #[arg(long)]
    strict: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let logging = if cli.verbose {
        LoggingConfig::from_env().verbose()
    } else {
        LoggingConfig::from_env()
    };
    if let Err(e) = logging.init() {
        eprintln!("{e}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = ?e.code, "{e}");
            eprintln!("Error: {e}");
            ExitCode::from(u8::try_from(e.code.exit_code()).unwrap_or(1))
        }
    }
}

fn run(cli: Cli) -> AppResult<()> {
    let config = TrackerConfig::from_env()?.with_overrides(cli.format, cli.strict, cli.input);

    let packages = resolve_packages(&config, &cli.packages)?;
    let processor = WorkoutProcessor::from_config(&config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    processor.run(&packages, &mut out)?;
    Ok(())
}
