// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod types;

use std::fmt::Write as _;

use anyhow::{Context, Result, anyhow};
use tracing::debug;

use crate::cli::{CliArgs, OutputFormat};
use crate::config::{ConfigDocument, DEFAULT_SECTION, load};

/// High-level entry point used by `main.rs`.
///
/// Loads and validates the config file, then prints either one value
/// (`--get`) or the whole document in the requested format.
pub fn run(args: CliArgs) -> Result<()> {
    let cfg = load(&args.config)?;

    if let Some(ref key_path) = args.get {
        let (section, key) = split_key_path(key_path)?;
        println!("{}", cfg.get_str(section, key)?);
        return Ok(());
    }

    match args.format {
        OutputFormat::Text => print!("{}", render_summary(&cfg)?),
        OutputFormat::Toml => {
            let text = cfg.to_toml().context("rendering configuration as TOML")?;
            print!("{text}");
        }
    }

    debug!("print complete");
    Ok(())
}

/// Split `section.key`; the key is whatever follows the last dot.
pub fn split_key_path(key_path: &str) -> Result<(&str, &str)> {
    match key_path.rsplit_once('.') {
        Some((section, key)) if !section.is_empty() && !key.is_empty() => Ok((section, key)),
        _ => Err(anyhow!("expected SECTION.KEY, got {key_path:?}")),
    }
}

/// Human-readable dump: required keys first, then every other section with
/// interpolated values.
pub fn render_summary(cfg: &ConfigDocument) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "ligysis configuration")?;

    writeln!(out, "[paths]")?;
    for (key, path) in cfg.paths().iter() {
        writeln!(out, "  {key} = {}", path.display())?;
    }

    writeln!(out, "[other]")?;
    writeln!(out, "  max_retry = {}", cfg.max_retry())?;
    writeln!(out, "  sleep_time = {}", cfg.sleep_time())?;

    let raw = cfg.raw();
    if !raw.defaults().is_empty() {
        writeln!(out, "[{DEFAULT_SECTION}]")?;
        for key in raw.defaults().keys() {
            writeln!(out, "  {key} = {}", cfg.get_str(DEFAULT_SECTION, key)?)?;
        }
    }

    for section in raw.sections() {
        if section == config::model::PATHS_SECTION || section == config::model::OTHER_SECTION {
            continue;
        }
        writeln!(out, "[{section}]")?;
        for key in raw.section(section).into_iter().flat_map(|s| s.keys()) {
            writeln!(out, "  {key} = {}", cfg.get_str(section, key)?)?;
        }
    }

    Ok(out)
}
