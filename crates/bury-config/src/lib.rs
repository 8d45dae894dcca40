//! Bury configuration system.
//!
//! TOML-based configuration with live reload and validation. Every section
//! has defaults, so a partial (or empty) file is a valid config.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use bury_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod reload;
pub mod schema;
pub mod toml_loader;
pub mod toml_writer;
pub mod validation;
pub mod watcher;

pub use reload::ReloadManager;
pub use schema::{BuryConfig, FrameConfig, GuardConfig, LogLevel, LoggingConfig, CONFIG_SCHEMA_VERSION};
pub use toml_writer::{save_config, save_config_to_path, set_key};
pub use watcher::ConfigWatcher;

use bury_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path and validate it.
///
/// Creates a commented default file if none exists.
pub fn load_config() -> Result<BuryConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path, or the default path when `None`.
pub fn load_config_from(path: Option<&Path>) -> Result<BuryConfig, ConfigError> {
    match path {
        Some(path) => {
            let config = toml_loader::load_from_path(path)?;
            validation::validate(&config)?;
            Ok(config)
        }
        None => load_config(),
    }
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &BuryConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
