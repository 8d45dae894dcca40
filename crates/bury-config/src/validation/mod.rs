//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod frame;
mod guard;
mod helpers;


use crate::schema::BuryConfig;
use bury_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &BuryConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    guard::validate_guard(&mut errors, config);
    frame::validate_frame(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
