//! The frame as a layout guard host.

use bury_common::SnapshotId;
use bury_guard::{EditorHost, HostResult};
use tracing::info;

use super::Frame;

impl EditorHost for Frame {
    fn capture_layout(&mut self) -> HostResult<SnapshotId> {
        Ok(self.save_configuration())
    }

    fn restore_layout(&mut self, snapshot: &SnapshotId) -> HostResult<()> {
        self.restore_configuration(snapshot)
    }

    fn is_output_visible(&self) -> bool {
        self.is_buffer_visible(&self.output_buffer)
    }

    fn notify_user(&mut self, message: &str) {
        info!(target: "bury_frame::messages", "{message}");
        self.messages.push(message);
    }
}
