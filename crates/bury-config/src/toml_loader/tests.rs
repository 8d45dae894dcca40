//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use bury_common::{ConfigError, WarningScan};
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_bury_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[guard]
warning_scan = "whole_buffer"
notify_message = "Build clean."

[frame]
max_registers = 3
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.guard.warning_scan, WarningScan::WholeBuffer);
    assert_eq!(config.guard.notify_message, "Build clean.");
    assert_eq!(config.frame.max_registers, 3);
    // Defaults preserved
    assert!(config.guard.enabled);
    assert_eq!(config.guard.success_marker, "finished");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn load_config_with_invalid_values_returns_parsed_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[frame]\nmax_registers = 0\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.frame.max_registers, 0);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bury").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert!(config.guard.enabled);
    assert_eq!(config.guard.warning_marker, "warning");
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::BuryConfig;

    let config: BuryConfig = toml::from_str(&default_config_toml()).unwrap();
    assert_eq!(config, BuryConfig::default());
}

#[test]
fn default_config_path_is_reasonable() {
    // dirs may not resolve a config dir in every CI sandbox
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("bury"));
        assert!(path_str.ends_with("config.toml"));
    }
}
