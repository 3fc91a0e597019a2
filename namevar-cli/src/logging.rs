//! Diagnostic logging for the namevar CLI (made by FontLab https://www.fontlab.com/)
//!
//! Logs go to stderr so stdout stays clean for verdicts and JSON.
//! `-v` raises the level one step at a time (warn, info, debug, trace);
//! `NAMEVAR_LOG` takes an `EnvFilter` directive and wins over `-v`.

use std::io;

use anyhow::{anyhow, Result};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive override.
pub const LOG_ENV: &str = "NAMEVAR_LOG";

/// Map a `-v` count to a log level.
pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Build the filter, preferring `NAMEVAR_LOG` when it parses.
pub fn build_env_filter(verbosity: u8) -> EnvFilter {
    let level = level_for(verbosity).as_str().to_lowercase();

    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        // third-party crates stay quiet below warn
        EnvFilter::new(format!(
            "warn,namevar_cli={level},namevar_core={level}"
        ))
    })
}

/// Install the global subscriber. Call once at startup.
pub fn init_logging(verbosity: u8) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(verbosity))
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|err| anyhow!("failed to initialize logging: {err}"))
}
