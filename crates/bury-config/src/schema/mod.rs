//! Configuration schema types for Bury.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod frame;
mod guard;
mod system;

pub use frame::*;
pub use guard::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct BuryConfig {
    pub guard: GuardConfig,
    pub frame: FrameConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
