//! Integration tests for configuration loading.

use mediafile::config::{load_config, load_config_or_default};
use std::fs;
use tempfile::tempdir;

#[test]
fn load_explicit_path() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("mediafile.toml");
    fs::write(&path, "[output]\npretty = false\n").unwrap();

    let config = load_config_or_default(Some(&path)).unwrap();
    assert!(!config.output.pretty);
    // Unset sections keep their defaults
    assert_eq!(config.logging.filter, "mediafile=info");
}

#[test]
fn explicit_path_must_exist() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("missing.toml");
    assert!(load_config_or_default(Some(&path)).is_err());
}

#[test]
fn invalid_toml_reports_path() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("broken.toml");
    fs::write(&path, "[output\npretty = ").unwrap();

    let err = load_config(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
    assert!(err.to_string().contains("broken.toml"));
}

#[test]
fn wrong_value_type_rejected() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("typed.toml");
    fs::write(&path, "[output]\npretty = \"yes\"\n").unwrap();

    assert!(load_config(&path).is_err());
}
