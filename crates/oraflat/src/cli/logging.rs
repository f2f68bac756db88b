//! Handles logging for the CLI.

use std::io::IsTerminal;
use std::str::FromStr;

use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use super::LogArgs;

/// A macro to log a fatal error.
#[macro_export]
macro_rules! fatal {
    ($error:expr) => {{
        tracing::error!(fatal = true, "FATAL {:#}", $error);
    }};
}

/// Initializes the global tracing subscriber, writing to stderr.
pub fn init_global_subscriber(args: LogArgs) {
    let log_level = get_log_level(args);
    let env_filter = EnvFilter::from_default_env().add_directive(log_level.into());

    let fmt = fmt::layer()
        .without_time()
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .compact();

    tracing_subscriber::registry()
        .with(fmt)
        .with(env_filter)
        .init();
}

fn get_log_level(args: LogArgs) -> LevelFilter {
    match args.quiet {
        0 => (),
        1 => return LevelFilter::WARN,
        _ => return LevelFilter::ERROR,
    }

    if let Ok(rust_log) = std::env::var(EnvFilter::DEFAULT_ENV) {
        if let Ok(level) = LevelFilter::from_str(&rust_log) {
            return level;
        }
    }

    match args.verbosity {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}
