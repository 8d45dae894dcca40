//! Window operations: split, delete, focus, display.

use bury_common::HostError;
use tracing::debug;

use crate::buffer::SCRATCH_BUFFER;
use crate::tree::Direction;
use crate::window::Window;

use super::Frame;

impl Frame {
    /// Split the focused window; the new window shows `buffer` and
    /// receives focus. Returns the new window's id.
    pub fn split_window(&mut self, direction: Direction, buffer: &str) -> Option<u32> {
        let new_id = self.split_focused(direction, buffer)?;
        self.focused = new_id;
        Some(new_id)
    }

    /// Show `buffer` somewhere without changing focus.
    ///
    /// Reuses a window already showing it; otherwise splits the focused
    /// window and shows it below.
    pub fn display_buffer(&mut self, buffer: &str) -> Result<u32, HostError> {
        if !self.buffers.contains_key(buffer) {
            return Err(HostError::BufferMissing(buffer.to_string()));
        }
        if let Some(&id) = self.windows_showing(buffer).first() {
            return Ok(id);
        }
        let id = self
            .split_focused(Direction::Vertical, buffer)
            .ok_or_else(|| HostError::NotSupported("focused window missing from tree".into()))?;
        debug!(window = id, buffer, "displayed buffer in new window");
        Ok(id)
    }

    /// Delete a window. The last window cannot be deleted.
    pub fn delete_window(&mut self, id: u32) -> bool {
        if self.windows.len() <= 1 || !self.windows.contains_key(&id) {
            return false;
        }
        if id == self.focused {
            if let Some(next) = self.tree.next_window(id) {
                self.focused = next;
            }
        }
        if self.tree.remove_window(id) {
            self.windows.remove(&id);
            true
        } else {
            false
        }
    }

    /// Get `buffer` off the screen: delete its windows, or switch the last
    /// remaining window to `*scratch*`. Returns the number of windows touched.
    pub fn bury_buffer(&mut self, buffer: &str) -> usize {
        let showing = self.windows_showing(buffer);
        for &id in &showing {
            if !self.delete_window(id) {
                if let Some(window) = self.windows.get_mut(&id) {
                    window.buffer = SCRATCH_BUFFER.to_string();
                }
            }
        }
        showing.len()
    }

    pub fn focus_window(&mut self, id: u32) -> bool {
        if self.windows.contains_key(&id) {
            self.focused = id;
            true
        } else {
            false
        }
    }

    /// Windows showing `buffer`, in visual order.
    pub fn windows_showing(&self, buffer: &str) -> Vec<u32> {
        self.ordered_window_ids()
            .into_iter()
            .filter(|id| self.windows.get(id).is_some_and(|w| w.buffer == buffer))
            .collect()
    }

    pub fn is_buffer_visible(&self, buffer: &str) -> bool {
        self.windows.values().any(|w| w.buffer == buffer)
    }

    fn split_focused(&mut self, direction: Direction, buffer: &str) -> Option<u32> {
        let new_id = self.next_id;
        if !self.tree.split_at(self.focused, new_id, direction) {
            return None;
        }
        self.next_id += 1;
        self.windows.insert(new_id, Window::new(new_id, buffer));
        Some(new_id)
    }
}
