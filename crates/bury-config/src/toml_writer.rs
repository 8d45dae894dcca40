//! Write BuryConfig to TOML on disk and edit single keys.
//!
//! Writes are atomic (write to `.tmp`, then rename) to prevent corruption
//! if the process dies mid-write.

use std::path::Path;

use bury_common::ConfigError;
use toml::Value;

use crate::schema::BuryConfig;
use crate::toml_loader::default_config_path;
use crate::validation;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Write config to the platform default path.
pub fn save_config(config: &BuryConfig) -> Result<(), ConfigError> {
    let path = default_config_path()?;
    save_config_to_path(config, &path)
}

/// Write config to a specific path, creating parent directories.
pub fn save_config_to_path(config: &BuryConfig, path: &Path) -> Result<(), ConfigError> {
    let toml_str = toml::to_string_pretty(config)
        .map_err(|e| ConfigError::ParseError(format!("failed to serialize config to TOML: {e}")))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    let tmp_path = path.with_extension("toml.tmp");
    std::fs::write(&tmp_path, &toml_str).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write config to {}: {e}",
            tmp_path.display()
        ))
    })?;

    if let Err(e) = std::fs::rename(&tmp_path, path) {
        tracing::warn!("atomic rename failed ({}), falling back to direct write", e);
        std::fs::write(path, &toml_str).map_err(|e2| {
            ConfigError::ParseError(format!("failed to write config to {}: {e2}", path.display()))
        })?;
    }

    tracing::debug!(path = %path.display(), "config saved to disk");
    Ok(())
}

/// Return a copy of `config` with the dotted `key` (e.g. `guard.enabled`)
/// set from its textual form.
///
/// The raw value is parsed according to the type the key already has, so
/// `"false"` becomes a boolean for `guard.enabled` but stays a string for
/// `guard.notify_message`. The result is validated before it is returned.
pub fn set_key(config: &BuryConfig, key: &str, raw: &str) -> Result<BuryConfig, ConfigError> {
    let (section, field) = key.split_once('.').ok_or_else(|| {
        ConfigError::ValidationError(format!("expected <section>.<field>, got '{key}'"))
    })?;

    let mut root = Value::try_from(config)
        .map_err(|e| ConfigError::ParseError(format!("failed to serialize config: {e}")))?;

    let table = root
        .get_mut(section)
        .and_then(Value::as_table_mut)
        .ok_or_else(|| ConfigError::ValidationError(format!("unknown config section '{section}'")))?;

    let current = table
        .get(field)
        .ok_or_else(|| ConfigError::ValidationError(format!("unknown config key '{key}'")))?;
    let value = parse_like(current, key, raw)?;
    table.insert(field.to_string(), value);

    let updated: BuryConfig = root
        .try_into()
        .map_err(|e| ConfigError::ParseError(format!("invalid value for '{key}': {e}")))?;
    validation::validate(&updated)?;
    Ok(updated)
}

fn parse_like(current: &Value, key: &str, raw: &str) -> Result<Value, ConfigError> {
    let invalid = |kind: &str| ConfigError::ParseError(format!("'{raw}' is not a valid {kind} for '{key}'"));
    match current {
        Value::Boolean(_) => raw.parse().map(Value::Boolean).map_err(|_| invalid("boolean")),
        Value::Integer(_) => raw.parse().map(Value::Integer).map_err(|_| invalid("integer")),
        Value::Float(_) => raw.parse().map(Value::Float).map_err(|_| invalid("number")),
        _ => Ok(Value::String(raw.to_string())),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use bury_common::WarningScan;
    use tempfile::TempDir;

    #[test]
    fn save_config_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = BuryConfig::default();
        config.guard.notify_message = "Done.".into();
        save_config_to_path(&config, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let parsed: BuryConfig = toml::from_str(&contents).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn save_config_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deep").join("config.toml");

        save_config_to_path(&BuryConfig::default(), &path).unwrap();

        assert!(path.exists());
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("Compilation successful."));
    }

    #[test]
    fn save_config_cleans_up_tmp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        save_config_to_path(&BuryConfig::default(), &path).unwrap();

        let tmp_path = path.with_extension("toml.tmp");
        assert!(!tmp_path.exists(), "tmp file should be renamed away");
    }

    #[test]
    fn set_key_parses_booleans() {
        let config = set_key(&BuryConfig::default(), "guard.enabled", "false").unwrap();
        assert!(!config.guard.enabled);
    }

    #[test]
    fn set_key_parses_integers() {
        let config = set_key(&BuryConfig::default(), "frame.max_registers", "4").unwrap();
        assert_eq!(config.frame.max_registers, 4);
    }

    #[test]
    fn set_key_accepts_enum_strings() {
        let config = set_key(&BuryConfig::default(), "guard.warning_scan", "whole_buffer").unwrap();
        assert_eq!(config.guard.warning_scan, WarningScan::WholeBuffer);
    }

    #[test]
    fn set_key_keeps_strings_verbatim() {
        let config = set_key(&BuryConfig::default(), "guard.notify_message", "true").unwrap();
        assert_eq!(config.guard.notify_message, "true");
    }

    #[test]
    fn set_key_rejects_bad_values() {
        let base = BuryConfig::default();
        assert!(matches!(
            set_key(&base, "guard.enabled", "maybe"),
            Err(ConfigError::ParseError(_))
        ));
        assert!(matches!(
            set_key(&base, "frame.max_registers", "-1"),
            Err(ConfigError::ParseError(_))
        ));
        assert!(matches!(
            set_key(&base, "guard.warning_scan", "sideways"),
            Err(ConfigError::ParseError(_))
        ));
        assert!(matches!(
            set_key(&base, "frame.max_registers", "0"),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn set_key_rejects_unknown_keys() {
        let base = BuryConfig::default();
        assert!(set_key(&base, "guard", "x").is_err());
        assert!(set_key(&base, "theme.name", "x").is_err());
        assert!(set_key(&base, "guard.nope", "x").is_err());
    }
}
