// src/config/ini.rs

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::config::interpolate::interpolate;
use crate::errors::{ConfigError, Result};

/// Name of the section whose keys act as fallbacks for every other section.
pub const DEFAULT_SECTION: &str = "DEFAULT";

/// `[name]`, anything up to the last closing bracket.
static SECTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[(?P<header>.*)\]$").expect("static regex"));

/// `key = value` or `key: value`; the first delimiter wins.
static OPTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<key>[^=:]*?)\s*[=:]\s*(?P<value>.*)$").expect("static regex")
});

/// Keys of one section, normalised to lowercase.
pub type SectionMap = BTreeMap<String, String>;

/// Raw result of parsing an INI-like file, before any type coercion.
///
/// Layout mirrors the file:
///
/// ```text
/// [DEFAULT]
/// root = /data
///
/// [paths]
/// swissprot = %(root)s/swissprot.fasta
/// ```
///
/// Section names are case-sensitive; keys are lowercased. Values are stored
/// verbatim and only interpolated when read through [`IniDocument::get`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IniDocument {
    defaults: SectionMap,
    sections: BTreeMap<String, SectionMap>,
}

impl IniDocument {
    /// Parse INI text.
    ///
    /// Rules:
    /// - lines whose first non-blank character is `#` or `;` are comments
    /// - blank lines are ignored, including inside a multi-line value
    /// - a line indented further than the key line above it continues that
    ///   key's value; a line at the same indentation starts a new key
    /// - a repeated section header or a repeated key within a section is an
    ///   error; `[DEFAULT]` may be reopened but its keys may not repeat
    pub fn parse(text: &str) -> Result<Self> {
        let mut doc = IniDocument::default();
        let mut seen_sections: BTreeSet<String> = BTreeSet::new();
        let mut current: Option<String> = None;
        // Key that continuation lines append to, with the indentation of its line.
        let mut last_key: Option<(String, usize)> = None;

        for (idx, raw_line) in text.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw_line.trim();

            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            let indent = raw_line.len() - raw_line.trim_start().len();
            if let (Some(section), Some((key, key_indent))) = (current.as_deref(), &last_key) {
                if indent > *key_indent {
                    if let Some(value) = doc.section_mut(section).get_mut(key) {
                        value.push('\n');
                        value.push_str(line);
                        continue;
                    }
                }
            }

            if let Some(caps) = SECTION_RE.captures(line) {
                let name = caps["header"].trim();
                if name.is_empty() {
                    return Err(ConfigError::parse(line_no, "empty section name"));
                }
                if name != DEFAULT_SECTION {
                    if !seen_sections.insert(name.to_string()) {
                        return Err(ConfigError::DuplicateSection {
                            line: line_no,
                            section: name.to_string(),
                        });
                    }
                    doc.sections.insert(name.to_string(), SectionMap::new());
                }
                trace!(line = line_no, section = name, "section header");
                current = Some(name.to_string());
                last_key = None;
                continue;
            }

            if line.starts_with('[') {
                return Err(ConfigError::parse(
                    line_no,
                    format!("malformed section header: {line}"),
                ));
            }

            let Some(section) = current.as_deref() else {
                return Err(ConfigError::parse(
                    line_no,
                    format!("key/value line before any section header: {line}"),
                ));
            };

            let Some(caps) = OPTION_RE.captures(line) else {
                return Err(ConfigError::parse(
                    line_no,
                    format!("expected `key = value`, found: {line}"),
                ));
            };

            let key = caps["key"].trim().to_lowercase();
            if key.is_empty() {
                return Err(ConfigError::parse(line_no, "empty key name"));
            }

            let entries = doc.section_mut(section);
            if entries.contains_key(&key) {
                return Err(ConfigError::DuplicateKey {
                    line: Some(line_no),
                    section: section.to_string(),
                    key,
                });
            }
            entries.insert(key.clone(), caps["value"].trim().to_string());
            last_key = Some((key, indent));
        }

        Ok(doc)
    }

    /// Build a document from `(section, key, value)` triples (used for
    /// `.toml` files).
    ///
    /// Entries for `DEFAULT` become the fallback section. Keys are lowercased
    /// like parsed keys, so two keys differing only in case collide.
    pub(crate) fn from_entries(
        entries: impl IntoIterator<Item = (String, String, String)>,
    ) -> Result<Self> {
        let mut doc = IniDocument::default();
        for (section, key, value) in entries {
            let key = key.to_lowercase();
            let target = doc.section_mut(&section);
            if target.contains_key(&key) {
                return Err(ConfigError::DuplicateKey {
                    line: None,
                    section,
                    key,
                });
            }
            target.insert(key, value);
        }
        Ok(doc)
    }

    /// Names of all non-default sections, sorted.
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    pub fn has_section(&self, section: &str) -> bool {
        section == DEFAULT_SECTION || self.sections.contains_key(section)
    }

    /// Keys defined directly in `section`, without `[DEFAULT]` fallbacks.
    pub fn section(&self, section: &str) -> Option<&SectionMap> {
        if section == DEFAULT_SECTION {
            Some(&self.defaults)
        } else {
            self.sections.get(section)
        }
    }

    /// Keys of `[DEFAULT]`.
    pub fn defaults(&self) -> &SectionMap {
        &self.defaults
    }

    /// Uninterpolated lookup with `[DEFAULT]` fallback.
    ///
    /// Returns `None` if `section` does not exist (unless it is `DEFAULT`)
    /// or the key is absent from both the section and `[DEFAULT]`.
    pub fn get_raw(&self, section: &str, key: &str) -> Option<&str> {
        let key = key.to_lowercase();
        if section == DEFAULT_SECTION {
            return self.defaults.get(&key).map(String::as_str);
        }
        let entries = self.sections.get(section)?;
        entries
            .get(&key)
            .or_else(|| self.defaults.get(&key))
            .map(String::as_str)
    }

    /// Interpolated lookup; `Ok(None)` when the key is absent.
    pub fn get(&self, section: &str, key: &str) -> Result<Option<String>> {
        match self.get_raw(section, key) {
            Some(raw) => interpolate(self, section, key, raw).map(Some),
            None => Ok(None),
        }
    }

    fn section_mut(&mut self, section: &str) -> &mut SectionMap {
        if section == DEFAULT_SECTION {
            &mut self.defaults
        } else {
            self.sections.entry(section.to_string()).or_default()
        }
    }
}
