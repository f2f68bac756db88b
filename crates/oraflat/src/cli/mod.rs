//! Command line surface.

pub mod logging;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
pub use logging::init_global_subscriber;

use crate::batch::{BatchOutcome, run_batch};
use crate::options::ProcessOptions;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory to scan for `.ora` archives
    ///
    /// Output folders and scratch workspaces are created inside this directory.
    /// Defaults to the current working directory.
    #[arg(short = 'C', value_name = "DIR", value_parser = validate_path)]
    pub working_directory: Option<PathBuf>,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Parser, Clone, Copy, Debug)]
#[command(next_help_heading = "Log Options")]
pub struct LogArgs {
    /// Set the level of verbosity
    ///
    /// 1. -v    for DEBUG level
    /// 2. -vv   for TRACE level
    ///
    /// `RUST_LOG` takes precedence over this flag.
    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase logging verbosity")]
    pub verbosity: u8,

    /// Suppress verbosity (*takes precedent*)
    ///
    /// 1. -q    for WARN level
    /// 2. -qq   for ERROR level
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub quiet: u8,
}

fn validate_path(path: &str) -> Result<PathBuf, std::io::Error> {
    std::fs::canonicalize(path)
}

/// Run the batch and print its result lines to stdout.
pub fn run(args: &Args) -> anyhow::Result<BatchOutcome> {
    let dir = args
        .working_directory
        .as_deref()
        .unwrap_or_else(|| Path::new("."));

    tracing::info!("Starting main processing...");
    let outcome = run_batch(dir, &ProcessOptions::default())
        .with_context(|| format!("could not process archives in '{}'", dir.display()))?;

    println!("{}", outcome.set_output_line());
    println!("{outcome}");
    Ok(outcome)
}
