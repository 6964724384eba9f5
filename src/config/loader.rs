// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::ini::{DEFAULT_SECTION, IniDocument};
use crate::config::model::ConfigDocument;
use crate::errors::{ConfigError, Result};

/// File name the LIGYSIS pipeline reads its configuration from.
pub const DEFAULT_CONFIG_FILE: &str = "ligysis_config.txt";

/// Read and parse a configuration file without checking required keys.
///
/// Files ending in `.toml` are read as TOML tables; everything else is
/// treated as INI text. A missing or unreadable file is always reported as
/// [`ConfigError::FileNotFound`], never as a parse error.
pub fn load_raw(path: impl AsRef<Path>) -> Result<IniDocument> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = contents.len(), "read config file");

    let is_toml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("toml"));

    let raw = if is_toml {
        parse_toml(&contents)?
    } else {
        IniDocument::parse(&contents)?
    };
    debug!(sections = raw.sections().count(), "parsed config sections");

    Ok(raw)
}

/// Load a configuration file and validate it into a [`ConfigDocument`].
///
/// This is the entry point for host programs:
///
/// - reads the file (INI, or TOML by extension)
/// - checks all required `[paths]` and `[other]` keys are present
/// - coerces `max_retry` / `sleep_time` and rejects negatives
///
/// Each call re-reads the file and returns an independent document.
pub fn load(path: impl AsRef<Path>) -> Result<ConfigDocument> {
    let path = path.as_ref();
    let raw = load_raw(path)?;
    let config = ConfigDocument::try_from(raw)?;
    info!(
        path = %path.display(),
        max_retry = config.max_retry(),
        sleep_time = config.sleep_time(),
        "configuration loaded"
    );
    Ok(config)
}

/// Same validation as [`load`], on INI text already in memory.
pub fn load_from_str(text: &str) -> Result<ConfigDocument> {
    let raw = IniDocument::parse(text)?;
    ConfigDocument::try_from(raw)
}

/// `ligysis_config.txt` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from(DEFAULT_CONFIG_FILE)
}

/// Flatten TOML into INI-style `(section, key, value)` entries.
///
/// Top-level scalars land in `[DEFAULT]`; each top-level table becomes a
/// section. Arrays and nested tables have no INI equivalent and are rejected.
fn parse_toml(contents: &str) -> Result<IniDocument> {
    let root: toml::Table = toml::from_str(contents)?;
    let mut entries: Vec<(String, String, String)> = Vec::new();

    for (name, value) in root {
        match value {
            toml::Value::Table(table) => {
                for (key, value) in table {
                    let text = toml_scalar(&name, &key, value)?;
                    entries.push((name.clone(), key, text));
                }
            }
            scalar => {
                let text = toml_scalar(DEFAULT_SECTION, &name, scalar)?;
                entries.push((DEFAULT_SECTION.to_string(), name, text));
            }
        }
    }

    IniDocument::from_entries(entries)
}

fn toml_scalar(section: &str, key: &str, value: toml::Value) -> Result<String> {
    match value {
        toml::Value::String(s) => Ok(s),
        toml::Value::Integer(i) => Ok(i.to_string()),
        toml::Value::Float(f) => Ok(f.to_string()),
        toml::Value::Boolean(b) => Ok(b.to_string()),
        toml::Value::Datetime(d) => Ok(d.to_string()),
        toml::Value::Array(_) | toml::Value::Table(_) => Err(ConfigError::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            message: "arrays and nested tables are not supported".to_string(),
        }),
    }
}
