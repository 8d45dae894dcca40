//! The editor host as seen from the layout guard.

use bury_common::{HostError, SnapshotId};

pub type Result<T> = std::result::Result<T, HostError>;

/// Window-system operations the guard needs from its host.
///
/// All calls happen on the host's UI thread, one at a time.
pub trait EditorHost {
    /// Record the current window layout and return a handle to it.
    fn capture_layout(&mut self) -> Result<SnapshotId>;

    /// Put back a previously captured layout.
    fn restore_layout(&mut self, snapshot: &SnapshotId) -> Result<()>;

    /// Whether the compilation output is shown in any window.
    fn is_output_visible(&self) -> bool;

    /// Show a short message to the user.
    fn notify_user(&mut self, message: &str);
}

/// A host with no windows. Captures hand out fresh handles, restores
/// succeed without doing anything, and output is never visible.
pub struct NoopHost;

impl EditorHost for NoopHost {
    fn capture_layout(&mut self) -> Result<SnapshotId> {
        Ok(SnapshotId::new())
    }

    fn restore_layout(&mut self, _snapshot: &SnapshotId) -> Result<()> {
        Ok(())
    }

    fn is_output_visible(&self) -> bool {
        false
    }

    fn notify_user(&mut self, message: &str) {
        tracing::info!("{message}");
    }
}
