// src/config/interpolate.rs

//! `%(name)s` substitution for values read from an [`IniDocument`].
//!
//! References resolve against the same section, falling back to
//! `[DEFAULT]`. `%%` produces a literal `%`. Referenced values are themselves
//! interpolated, up to [`MAX_DEPTH`] levels.

use crate::config::ini::IniDocument;
use crate::errors::{ConfigError, Result};

pub const MAX_DEPTH: usize = 10;

/// Interpolate `raw`, the value stored under `[section].key`.
pub fn interpolate(doc: &IniDocument, section: &str, key: &str, raw: &str) -> Result<String> {
    let mut out = String::with_capacity(raw.len());
    expand(doc, section, key, raw, 1, &mut out)?;
    Ok(out)
}

fn expand(
    doc: &IniDocument,
    section: &str,
    key: &str,
    value: &str,
    depth: usize,
    out: &mut String,
) -> Result<()> {
    if depth > MAX_DEPTH {
        return Err(error(
            section,
            key,
            format!("recursion limit of {MAX_DEPTH} exceeded while expanding {value:?}"),
        ));
    }

    let mut rest = value;
    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos + 1..];

        if let Some(after) = tail.strip_prefix('%') {
            out.push('%');
            rest = after;
        } else if let Some(inner) = tail.strip_prefix('(') {
            let Some(close) = inner.find(")s") else {
                return Err(error(
                    section,
                    key,
                    format!("unterminated reference in {value:?}, expected `%(name)s`"),
                ));
            };
            let name = &inner[..close];
            let Some(referenced) = doc.get_raw(section, name) else {
                return Err(error(
                    section,
                    key,
                    format!("unknown reference %({name})s"),
                ));
            };
            if referenced.contains('%') {
                expand(doc, section, key, referenced, depth + 1, out)?;
            } else {
                out.push_str(referenced);
            }
            rest = &inner[close + 2..];
        } else {
            return Err(error(
                section,
                key,
                format!("'%' must be followed by '%' or '(' in {value:?}"),
            ));
        }
    }
    out.push_str(rest);

    Ok(())
}

fn error(section: &str, key: &str, message: String) -> ConfigError {
    ConfigError::Interpolation {
        section: section.to_string(),
        key: key.to_string(),
        message,
    }
}
