// src/errors.rs

//! Crate-wide error type.
//!
//! Every failure is reported at load time through [`ConfigError`]. Callers
//! that only care about the broad category can match on [`ConfigError::kind`].

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::ValueType;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found or unreadable: {}: {source}", .path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("duplicate section [{section}] on line {line}")]
    DuplicateSection { line: usize, section: String },

    /// `line` is `None` for input without line information (TOML tables).
    #[error("duplicate key '{key}' in section [{section}]{}", line_suffix(.line))]
    DuplicateKey {
        line: Option<usize>,
        section: String,
        key: String,
    },

    #[error("bad interpolation in [{section}].{key}: {message}")]
    Interpolation {
        section: String,
        key: String,
        message: String,
    },

    #[error("unsupported value for [{section}].{key}: {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("missing required key '{key}' in section [{section}]")]
    MissingKey { section: String, key: String },

    #[error("cannot read [{section}].{key} = {value:?} as {expected}: {reason}")]
    TypeCoercion {
        section: String,
        key: String,
        value: String,
        expected: ValueType,
        reason: String,
    },
}

fn line_suffix(line: &Option<usize>) -> String {
    match line {
        Some(n) => format!(" on line {n}"),
        None => String::new(),
    }
}

/// Broad failure category of a [`ConfigError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    FileNotFound,
    Parse,
    MissingKey,
    TypeCoercion,
}

impl ConfigError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConfigError::FileNotFound { .. } => ErrorKind::FileNotFound,
            ConfigError::Parse { .. }
            | ConfigError::DuplicateSection { .. }
            | ConfigError::DuplicateKey { .. }
            | ConfigError::Interpolation { .. }
            | ConfigError::InvalidValue { .. }
            | ConfigError::Toml(_) => ErrorKind::Parse,
            ConfigError::MissingKey { .. } => ErrorKind::MissingKey,
            ConfigError::TypeCoercion { .. } => ErrorKind::TypeCoercion,
        }
    }

    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        ConfigError::Parse {
            line,
            message: message.into(),
        }
    }

    pub(crate) fn missing(section: &str, key: &str) -> Self {
        ConfigError::MissingKey {
            section: section.to_string(),
            key: key.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
