//! Layout guard settings.

use bury_common::WarningScan;
use serde::{Deserialize, Serialize};

/// Behaviour of the compilation layout guard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GuardConfig {
    /// Master toggle for the mode.
    pub enabled: bool,
    /// Whether the next compilation start records the layout.
    pub save_windows_on_next_start: bool,
    /// Substring of the status text that marks a successful build.
    pub success_marker: String,
    /// Substring of the output that marks a build with warnings.
    pub warning_marker: String,
    /// Where the warning marker is searched for.
    pub warning_scan: WarningScan,
    /// Message shown after the layout is restored.
    pub notify_message: String,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            save_windows_on_next_start: true,
            success_marker: "finished".into(),
            warning_marker: "warning".into(),
            warning_scan: WarningScan::FromPoint,
            notify_message: "Compilation successful.".into(),
        }
    }
}
