//! Logging configuration types.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// An `EnvFilter` directive scoped to the bury crates.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "bury=trace",
            LogLevel::Debug => "bury=debug",
            LogLevel::Info => "bury=info",
            LogLevel::Warning => "bury=warn",
            LogLevel::Error => "bury=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
