// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `ligysis-config`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ligysis-config",
    version,
    about = "Validate and print a LIGYSIS configuration file.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (INI, or TOML if it ends in `.toml`).
    #[arg(long, value_name = "PATH", default_value = crate::config::loader::DEFAULT_CONFIG_FILE)]
    pub config: String,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `LIGYSIS_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// How to print the validated configuration.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print a single interpolated value, e.g. `paths.swissprot`.
    #[arg(long, value_name = "SECTION.KEY")]
    pub get: Option<String>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Toml,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
