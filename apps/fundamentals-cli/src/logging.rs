//! `tracing` subscriber initialization.
//!
//! Logs go to stderr; stdout carries command results only.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

/// Filter directive for the given verbosity count, falling back to the configured level.
pub fn filter_directive(configured: &str, verbose: u8) -> &str {
    match verbose {
        0 => configured,
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over both `-v` and `logging.level`.
///
/// # Errors
/// Returns an error if the directive does not parse or a global subscriber is already set.
pub fn init_logging(cfg: &LoggingConfig, verbose: u8) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(filter_directive(&cfg.level, verbose))?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    match cfg.format {
        LogFormat::Text => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    }
    .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}
