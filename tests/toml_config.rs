use std::error::Error;
use std::path::Path;

use ligysis_config::config::load;
use ligysis_config::errors::{ConfigError, ErrorKind};
use ligysis_config_test_utils::write_temp_config;

type TestResult = Result<(), Box<dyn Error>>;

const TOML_CONFIG: &str = r#"
dbs = "/cluster/dbs"

[paths]
arpeggio_python_bin = "/cluster/envs/arpeggio-env/bin/python"
arpeggio_bin = "/cluster/envs/arpeggio-env/bin/pdbe-arpeggio"
ensembl_sqlite = "%(dbs)s/ensembl_cache.sqlite"
gnomad_vcf = "%(dbs)s/gnomad.exomes.r2.0.1.sites.vcf.gz"
swissprot = "%(dbs)s/swissprot_2021_11.fasta"

[other]
max_retry = 3
sleep_time = 0.5

[thresholds]
resolution = 2.5
use_hash = true
"#;

#[test]
fn toml_file_is_loaded_by_extension() -> TestResult {
    let file = write_temp_config(TOML_CONFIG, ".toml")?;
    let cfg = load(file.path())?;

    assert_eq!(cfg.max_retry(), 3);
    assert_eq!(cfg.sleep_time(), 0.5);
    assert_eq!(
        cfg.paths().swissprot(),
        Path::new("/cluster/dbs/swissprot_2021_11.fasta")
    );
    assert_eq!(cfg.get_float("thresholds", "resolution")?, 2.5);
    assert!(cfg.get_bool("thresholds", "use_hash")?);
    Ok(())
}

#[test]
fn toml_and_ini_renditions_agree_on_required_values() -> TestResult {
    let toml_file = write_temp_config(TOML_CONFIG, ".toml")?;
    let ini_text = TOML_CONFIG
        .replace("dbs = \"/cluster/dbs\"", "[DEFAULT]\ndbs = /cluster/dbs")
        .replace('"', "");
    let ini_file = write_temp_config(&ini_text, ".txt")?;

    let from_toml = load(toml_file.path())?;
    let from_ini = load(ini_file.path())?;
    assert_eq!(from_toml.paths(), from_ini.paths());
    assert_eq!(from_toml.other(), from_ini.other());
    Ok(())
}

#[test]
fn toml_negative_sleep_time_is_rejected() -> TestResult {
    let text = TOML_CONFIG.replace("sleep_time = 0.5", "sleep_time = -0.5");
    let file = write_temp_config(&text, ".toml")?;
    assert_eq!(load(file.path()).unwrap_err().kind(), ErrorKind::TypeCoercion);
    Ok(())
}

#[test]
fn toml_arrays_are_rejected() -> TestResult {
    let text = format!("{TOML_CONFIG}\n[extra]\nlist = [1, 2]\n");
    let file = write_temp_config(&text, ".toml")?;
    match load(file.path()) {
        Err(ConfigError::InvalidValue { section, key, .. }) => {
            assert_eq!(section, "extra");
            assert_eq!(key, "list");
        }
        other => panic!("Expected InvalidValue, got: {:?}", other),
    }
    Ok(())
}

#[test]
fn toml_syntax_errors_are_parse_errors() -> TestResult {
    let file = write_temp_config("[paths\nswissprot = ", ".toml")?;
    let err = load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
    assert_eq!(err.kind(), ErrorKind::Parse);
    Ok(())
}

#[test]
fn toml_keys_differing_only_in_case_are_duplicates() -> TestResult {
    let text = TOML_CONFIG.replace("max_retry = 3", "max_retry = 3\nMax_Retry = 4");
    let file = write_temp_config(&text, ".toml")?;
    match load(file.path()) {
        Err(ConfigError::DuplicateKey { section, key, line }) => {
            assert_eq!(section, "other");
            assert_eq!(key, "max_retry");
            assert_eq!(line, None);
        }
        other => panic!("Expected DuplicateKey, got: {:?}", other),
    }
    Ok(())
}

#[test]
fn toml_top_level_key_and_default_table_collide() -> TestResult {
    let text = format!("{TOML_CONFIG}\n[DEFAULT]\ndbs = \"/elsewhere\"\n");
    let file = write_temp_config(&text, ".toml")?;
    assert!(matches!(
        load(file.path()),
        Err(ConfigError::DuplicateKey { .. })
    ));
    Ok(())
}
