use bury_common::WarningScan;
use serde::{Deserialize, Serialize};

/// Runtime settings of a [`crate::LayoutGuard`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardSettings {
    /// Initial value of the capture flag.
    pub save_windows_on_next_start: bool,
    pub success_marker: String,
    pub warning_marker: String,
    pub warning_scan: WarningScan,
    pub notify_message: String,
}

impl Default for GuardSettings {
    fn default() -> Self {
        Self {
            save_windows_on_next_start: true,
            success_marker: "finished".into(),
            warning_marker: "warning".into(),
            warning_scan: WarningScan::FromPoint,
            notify_message: "Compilation successful.".into(),
        }
    }
}
