// src/logging.rs

//! Logging setup for `ligysis-config` using `tracing` + `tracing-subscriber`.
//!
//! Filter selection:
//! 1. `--log-level` CLI flag (if provided)
//! 2. `LIGYSIS_LOG` environment variable, either a bare level ("debug") or
//!    full directives ("ligysis_config::config=trace,warn")
//! 3. default to `info`
//!
//! Logs go to STDERR so that stdout only carries the printed configuration.

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

use crate::cli::LogLevel;

pub const LOG_ENV_VAR: &str = "LIGYSIS_LOG";

/// Initialise global logging subscriber.
///
/// Fails if a subscriber is already installed.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let filter = match cli_level {
        Some(lvl) => EnvFilter::new(directive_for(lvl)),
        None => match std::env::var(LOG_ENV_VAR) {
            Ok(directives) if !directives.trim().is_empty() => EnvFilter::try_new(directives.trim())
                .with_context(|| format!("invalid {LOG_ENV_VAR} filter: {directives:?}"))?,
            _ => EnvFilter::new("info"),
        },
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!(e))?;

    Ok(())
}

fn directive_for(lvl: LogLevel) -> &'static str {
    match lvl {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    }
}
