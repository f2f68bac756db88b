//! The main entry point for the oraflat CLI.

use std::process::ExitCode;

use clap::Parser;
use oraflat::cli::{self, Args};

fn main() -> ExitCode {
    let args = Args::parse();
    cli::init_global_subscriber(args.log);

    match cli::run(&args) {
        Ok(outcome) if outcome.success => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            oraflat::fatal!(e);
            ExitCode::FAILURE
        }
    }
}
