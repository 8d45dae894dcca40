//! Editor frame settings used by the reference host.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FrameConfig {
    /// Layout snapshots kept before the oldest is dropped (valid range: 1-256).
    pub max_registers: u32,
    /// Gap between windows in cells (valid range: 0-20).
    pub gap: u32,
    /// Frame width used when printing the layout.
    pub columns: u32,
    /// Frame height used when printing the layout.
    pub lines: u32,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            max_registers: 16,
            gap: 0,
            columns: 160,
            lines: 48,
        }
    }
}
