//! Saved window configurations.

use std::collections::HashMap;

use bury_common::{HostError, SnapshotId};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::tree::SplitNode;
use crate::window::Window;

use super::Frame;

/// Everything needed to put the windows back: the split tree, which
/// buffer each window shows, and which window has focus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfiguration {
    pub tree: SplitNode,
    pub windows: HashMap<u32, Window>,
    pub focused: u32,
}

impl Frame {
    /// The current window configuration.
    pub fn configuration(&self) -> WindowConfiguration {
        WindowConfiguration {
            tree: self.tree.clone(),
            windows: self.windows.clone(),
            focused: self.focused,
        }
    }

    /// Store the current configuration and return its handle. The oldest
    /// register is dropped once `max_registers` is exceeded.
    pub fn save_configuration(&mut self) -> SnapshotId {
        let id = SnapshotId::new();
        self.registers.push_back((id.clone(), self.configuration()));
        while self.registers.len() > self.max_registers {
            if let Some((dropped, _)) = self.registers.pop_front() {
                debug!(snapshot = %dropped, "dropped oldest layout register");
            }
        }
        id
    }

    /// Apply a stored configuration. The register stays available.
    pub fn restore_configuration(&mut self, id: &SnapshotId) -> Result<(), HostError> {
        let config = self
            .registers
            .iter()
            .find(|(saved, _)| saved == id)
            .map(|(_, config)| config.clone())
            .ok_or_else(|| HostError::InvalidSnapshot(id.clone()))?;

        let next_free = config.windows.keys().max().map_or(1, |max| max + 1);
        self.tree = config.tree;
        self.windows = config.windows;
        self.focused = config.focused;
        self.next_id = self.next_id.max(next_free);
        Ok(())
    }
}
