// src/config/model.rs

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Serialize;

use crate::config::ini::IniDocument;
use crate::config::validate::{coerce_bool, coerce_float, coerce_int, coerce_path};
use crate::errors::{ConfigError, Result};

pub const PATHS_SECTION: &str = "paths";
pub const OTHER_SECTION: &str = "other";

/// Keys every `[paths]` section must define.
pub const PATH_KEYS: [&str; 5] = [
    "arpeggio_python_bin",
    "arpeggio_bin",
    "ensembl_sqlite",
    "gnomad_vcf",
    "swissprot",
];

pub const MAX_RETRY_KEY: &str = "max_retry";
pub const SLEEP_TIME_KEY: &str = "sleep_time";

/// Validated LIGYSIS configuration.
///
/// Built once through [`crate::config::load`] (or `TryFrom<IniDocument>`)
/// and never mutated afterwards. Mirrors a file like:
///
/// ```text
/// [paths]
/// arpeggio_python_bin = /opt/arpeggio/bin/python
/// arpeggio_bin = /opt/arpeggio/bin/pdbe-arpeggio
/// ensembl_sqlite = /db/ensembl_cache.sqlite
/// gnomad_vcf = /db/gnomad.exomes.r2.0.1.sites.vcf.gz
/// swissprot = /db/swissprot.fasta
///
/// [other]
/// max_retry = 3
/// sleep_time = 0.5
/// ```
///
/// Keys outside the required set stay reachable through the typed getters
/// (`get_str`, `get_int`, ...), which read the underlying [`IniDocument`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigDocument {
    paths: PathsSection,
    other: OtherSection,
    #[serde(skip)]
    raw: IniDocument,
}

/// `[paths]` section.
///
/// Paths are kept as written; whether they exist is the caller's business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathsSection {
    arpeggio_python_bin: PathBuf,
    arpeggio_bin: PathBuf,
    ensembl_sqlite: PathBuf,
    gnomad_vcf: PathBuf,
    swissprot: PathBuf,
}

/// `[other]` section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OtherSection {
    max_retry: u32,
    sleep_time: f64,
}

impl ConfigDocument {
    /// Assemble a document from already-coerced parts.
    ///
    /// Used by the `TryFrom<IniDocument>` conversion in `validate.rs`.
    pub(crate) fn new_unchecked(paths: PathsSection, other: OtherSection, raw: IniDocument) -> Self {
        Self { paths, other, raw }
    }

    pub fn paths(&self) -> &PathsSection {
        &self.paths
    }

    pub fn other(&self) -> &OtherSection {
        &self.other
    }

    /// The parsed file this document was validated from.
    pub fn raw(&self) -> &IniDocument {
        &self.raw
    }

    pub fn max_retry(&self) -> u32 {
        self.other.max_retry
    }

    pub fn sleep_time(&self) -> f64 {
        self.other.sleep_time
    }

    /// `sleep_time` as a `Duration`, for callers that sleep between retries.
    pub fn sleep_duration(&self) -> Duration {
        Duration::from_secs_f64(self.other.sleep_time)
    }

    /// Interpolated string value of any key in the file.
    pub fn get_str(&self, section: &str, key: &str) -> Result<String> {
        self.raw
            .get(section, key)?
            .ok_or_else(|| ConfigError::missing(section, key))
    }

    /// Non-empty path value of any key in the file.
    pub fn get_path(&self, section: &str, key: &str) -> Result<PathBuf> {
        let value = self.get_str(section, key)?;
        coerce_path(section, key, &value)
    }

    /// Integer value of any key in the file. Unlike `max_retry`, negative
    /// values are allowed here.
    pub fn get_int(&self, section: &str, key: &str) -> Result<i64> {
        let value = self.get_str(section, key)?;
        coerce_int(section, key, &value)
    }

    /// Finite float value of any key in the file.
    pub fn get_float(&self, section: &str, key: &str) -> Result<f64> {
        let value = self.get_str(section, key)?;
        coerce_float(section, key, &value)
    }

    pub fn get_bool(&self, section: &str, key: &str) -> Result<bool> {
        let value = self.get_str(section, key)?;
        coerce_bool(section, key, &value)
    }

    /// Render `[paths]` and `[other]` as TOML.
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string(self)
    }
}

impl PathsSection {
    pub(crate) fn new(
        arpeggio_python_bin: PathBuf,
        arpeggio_bin: PathBuf,
        ensembl_sqlite: PathBuf,
        gnomad_vcf: PathBuf,
        swissprot: PathBuf,
    ) -> Self {
        Self {
            arpeggio_python_bin,
            arpeggio_bin,
            ensembl_sqlite,
            gnomad_vcf,
            swissprot,
        }
    }

    /// Python interpreter used to run arpeggio.
    pub fn arpeggio_python_bin(&self) -> &Path {
        &self.arpeggio_python_bin
    }

    pub fn arpeggio_bin(&self) -> &Path {
        &self.arpeggio_bin
    }

    /// Local ENSEMBL UniProt-to-genome mapping cache (SQLite).
    pub fn ensembl_sqlite(&self) -> &Path {
        &self.ensembl_sqlite
    }

    pub fn gnomad_vcf(&self) -> &Path {
        &self.gnomad_vcf
    }

    pub fn swissprot(&self) -> &Path {
        &self.swissprot
    }

    /// `(key, path)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Path)> {
        PATH_KEYS.into_iter().zip([
            self.arpeggio_python_bin.as_path(),
            self.arpeggio_bin.as_path(),
            self.ensembl_sqlite.as_path(),
            self.gnomad_vcf.as_path(),
            self.swissprot.as_path(),
        ])
    }
}

impl OtherSection {
    pub(crate) fn new(max_retry: u32, sleep_time: f64) -> Self {
        Self {
            max_retry,
            sleep_time,
        }
    }

    /// Maximum attempts for a remote data request.
    pub fn max_retry(&self) -> u32 {
        self.max_retry
    }

    /// Seconds to wait between remote requests.
    pub fn sleep_time(&self) -> f64 {
        self.sleep_time
    }
}
