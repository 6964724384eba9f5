// src/config/validate.rs

use std::path::PathBuf;
use std::time::Duration;

use tracing::debug;

use crate::config::ini::IniDocument;
use crate::config::model::{
    ConfigDocument, MAX_RETRY_KEY, OTHER_SECTION, OtherSection, PATHS_SECTION, PathsSection,
    SLEEP_TIME_KEY,
};
use crate::errors::{ConfigError, Result};
use crate::types::ValueType;

impl TryFrom<IniDocument> for ConfigDocument {
    type Error = ConfigError;

    fn try_from(raw: IniDocument) -> std::result::Result<Self, Self::Error> {
        let paths = PathsSection::new(
            require_path(&raw, "arpeggio_python_bin")?,
            require_path(&raw, "arpeggio_bin")?,
            require_path(&raw, "ensembl_sqlite")?,
            require_path(&raw, "gnomad_vcf")?,
            require_path(&raw, "swissprot")?,
        );

        let max_retry = require(&raw, OTHER_SECTION, MAX_RETRY_KEY)?;
        let sleep_time = require(&raw, OTHER_SECTION, SLEEP_TIME_KEY)?;
        let other = OtherSection::new(
            coerce_retry_count(OTHER_SECTION, MAX_RETRY_KEY, &max_retry)?,
            coerce_seconds(OTHER_SECTION, SLEEP_TIME_KEY, &sleep_time)?,
        );

        let extra: Vec<&str> = raw
            .sections()
            .filter(|s| *s != PATHS_SECTION && *s != OTHER_SECTION)
            .collect();
        if !extra.is_empty() {
            debug!(?extra, "additional sections available through typed getters");
        }

        Ok(ConfigDocument::new_unchecked(paths, other, raw))
    }
}

fn require(raw: &IniDocument, section: &str, key: &str) -> Result<String> {
    raw.get(section, key)?
        .ok_or_else(|| ConfigError::missing(section, key))
}

fn require_path(raw: &IniDocument, key: &str) -> Result<PathBuf> {
    let value = require(raw, PATHS_SECTION, key)?;
    coerce_path(PATHS_SECTION, key, &value)
}

fn coercion_error(
    section: &str,
    key: &str,
    value: &str,
    expected: ValueType,
    reason: impl Into<String>,
) -> ConfigError {
    ConfigError::TypeCoercion {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        expected,
        reason: reason.into(),
    }
}

/// Any non-empty string is accepted; nothing is checked on disk.
pub fn coerce_path(section: &str, key: &str, value: &str) -> Result<PathBuf> {
    if value.trim().is_empty() {
        return Err(coercion_error(section, key, value, ValueType::Path, "path is empty"));
    }
    Ok(PathBuf::from(value))
}

pub fn coerce_int(section: &str, key: &str, value: &str) -> Result<i64> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|e| coercion_error(section, key, value, ValueType::Integer, e.to_string()))
}

/// Rejects NaN and infinities.
pub fn coerce_float(section: &str, key: &str, value: &str) -> Result<f64> {
    let parsed = value
        .trim()
        .parse::<f64>()
        .map_err(|e| coercion_error(section, key, value, ValueType::Float, e.to_string()))?;
    if !parsed.is_finite() {
        return Err(coercion_error(
            section,
            key,
            value,
            ValueType::Float,
            "value is not finite",
        ));
    }
    Ok(parsed)
}

pub fn coerce_bool(section: &str, key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "yes" | "true" | "on" => Ok(true),
        "0" | "no" | "false" | "off" => Ok(false),
        _ => Err(coercion_error(
            section,
            key,
            value,
            ValueType::Boolean,
            "expected one of 1/yes/true/on or 0/no/false/off",
        )),
    }
}

/// Non-negative integer that fits in a `u32`.
pub fn coerce_retry_count(section: &str, key: &str, value: &str) -> Result<u32> {
    let parsed = coerce_int(section, key, value)?;
    if parsed < 0 {
        return Err(coercion_error(
            section,
            key,
            value,
            ValueType::Integer,
            format!("must be >= 0 (got {parsed})"),
        ));
    }
    u32::try_from(parsed)
        .map_err(|e| coercion_error(section, key, value, ValueType::Integer, e.to_string()))
}

/// Non-negative number of seconds that fits in a `Duration`.
pub fn coerce_seconds(section: &str, key: &str, value: &str) -> Result<f64> {
    let parsed = coerce_float(section, key, value)?;
    if parsed < 0.0 {
        return Err(coercion_error(
            section,
            key,
            value,
            ValueType::Float,
            format!("must be >= 0 (got {parsed})"),
        ));
    }
    Duration::try_from_secs_f64(parsed)
        .map_err(|e| coercion_error(section, key, value, ValueType::Float, e.to_string()))?;
    Ok(parsed)
}
