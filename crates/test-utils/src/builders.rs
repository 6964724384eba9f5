#![allow(dead_code)]

use ligysis_config::config::model::{MAX_RETRY_KEY, OTHER_SECTION, PATHS_SECTION, SLEEP_TIME_KEY};

/// Builder for INI config text to simplify test setup.
///
/// `ConfigTextBuilder::new()` starts from a complete, valid LIGYSIS config:
///
/// ```text
/// ### LIGYSIS CONFIG FILE ###
/// [paths]
/// arpeggio_python_bin = /opt/arpeggio/bin/python
/// ...
/// [other]
/// max_retry = 3
/// sleep_time = 0.5
/// ### END OF CONFIG FILE ###
/// ```
pub struct ConfigTextBuilder {
    banner: bool,
    sections: Vec<(String, Vec<(String, String)>)>,
}

pub const ARPEGGIO_PYTHON_BIN: &str = "/opt/arpeggio-env/bin/python";
pub const ARPEGGIO_BIN: &str = "/opt/arpeggio-env/bin/pdbe-arpeggio";
pub const ENSEMBL_SQLITE: &str = "/data/dbs/ensembl_cache.sqlite";
pub const GNOMAD_VCF: &str = "/data/dbs/gnomad.exomes.r2.0.1.sites.vcf.gz";
pub const SWISSPROT: &str = "/data/dbs/swissprot_2021_11.fasta";

impl ConfigTextBuilder {
    pub fn new() -> Self {
        Self::empty()
            .with_banner(true)
            .set(PATHS_SECTION, "arpeggio_python_bin", ARPEGGIO_PYTHON_BIN)
            .set(PATHS_SECTION, "arpeggio_bin", ARPEGGIO_BIN)
            .set(PATHS_SECTION, "ensembl_sqlite", ENSEMBL_SQLITE)
            .set(PATHS_SECTION, "gnomad_vcf", GNOMAD_VCF)
            .set(PATHS_SECTION, "swissprot", SWISSPROT)
            .set(OTHER_SECTION, MAX_RETRY_KEY, "3")
            .set(OTHER_SECTION, SLEEP_TIME_KEY, "0.5")
    }

    /// No sections, no banner.
    pub fn empty() -> Self {
        Self {
            banner: false,
            sections: Vec::new(),
        }
    }

    pub fn with_banner(mut self, banner: bool) -> Self {
        self.banner = banner;
        self
    }

    /// Set a key, creating the section (at the end) if needed.
    pub fn set(mut self, section: &str, key: &str, value: &str) -> Self {
        let entries = match self.sections.iter().position(|(name, _)| name == section) {
            Some(idx) => &mut self.sections[idx].1,
            None => {
                self.sections.push((section.to_string(), Vec::new()));
                &mut self.sections.last_mut().expect("just pushed").1
            }
        };
        match entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value.to_string(),
            None => entries.push((key.to_string(), value.to_string())),
        }
        self
    }

    pub fn without(mut self, section: &str, key: &str) -> Self {
        for (name, entries) in self.sections.iter_mut() {
            if name == section {
                entries.retain(|(k, _)| k != key);
            }
        }
        self
    }

    pub fn without_section(mut self, section: &str) -> Self {
        self.sections.retain(|(name, _)| name != section);
        self
    }

    /// Render as lines, without trailing newlines.
    ///
    /// A value containing `\n` is written as a key line followed by indented
    /// continuation lines.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if self.banner {
            lines.push("### LIGYSIS CONFIG FILE ###".to_string());
        }
        for (name, entries) in &self.sections {
            lines.push(format!("[{name}]"));
            lines.push(format!("## {name} settings"));
            for (key, value) in entries {
                let mut parts = value.split('\n');
                lines.push(format!("{key} = {}", parts.next().unwrap_or_default()));
                // Continuation lines sit deeper than the key line.
                lines.extend(parts.map(|part| format!("    {part}")));
            }
        }
        if self.banner {
            lines.push("### END OF CONFIG FILE ###".to_string());
        }
        lines
    }

    pub fn build(&self) -> String {
        let mut text = self.lines().join("\n");
        text.push('\n');
        text
    }
}

impl Default for ConfigTextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
