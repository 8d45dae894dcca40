//! An in-memory editor frame: windows, buffers and saved layouts.

mod host;
mod registers;
mod render;
mod windows;


use std::collections::{HashMap, VecDeque};

use bury_common::{BufferKind, NotificationQueue, SnapshotId};

use crate::buffer::{Buffer, COMPILATION_BUFFER, SCRATCH_BUFFER};
use crate::layout::LayoutEngine;
use crate::tree::SplitNode;
use crate::window::Window;

pub use registers::WindowConfiguration;

/// Default number of saved layouts kept.
pub const DEFAULT_MAX_REGISTERS: usize = 16;

#[derive(Debug)]
pub struct Frame {
    tree: SplitNode,
    windows: HashMap<u32, Window>,
    buffers: HashMap<String, Buffer>,
    focused: u32,
    next_id: u32,
    /// Saved layouts, oldest first.
    registers: VecDeque<(SnapshotId, WindowConfiguration)>,
    max_registers: usize,
    /// Buffer whose visibility `is_output_visible` reports.
    output_buffer: String,
    messages: NotificationQueue,
    layout_engine: LayoutEngine,
    columns: u32,
    lines: u32,
}

impl Frame {
    /// A frame with a single window showing `*scratch*`.
    pub fn new() -> Self {
        let initial_id = 1;
        let mut windows = HashMap::new();
        windows.insert(initial_id, Window::new(initial_id, SCRATCH_BUFFER));
        let mut buffers = HashMap::new();
        buffers.insert(
            SCRATCH_BUFFER.to_string(),
            Buffer::new(SCRATCH_BUFFER, BufferKind::Text),
        );

        Self {
            tree: SplitNode::leaf(initial_id),
            windows,
            buffers,
            focused: initial_id,
            next_id: initial_id + 1,
            registers: VecDeque::new(),
            max_registers: DEFAULT_MAX_REGISTERS,
            output_buffer: COMPILATION_BUFFER.to_string(),
            messages: NotificationQueue::default(),
            layout_engine: LayoutEngine::default(),
            columns: 160,
            lines: 48,
        }
    }

    pub fn with_max_registers(mut self, max: usize) -> Self {
        self.max_registers = max.max(1);
        self
    }

    pub fn with_layout(mut self, layout_engine: LayoutEngine) -> Self {
        self.layout_engine = layout_engine;
        self
    }

    pub fn with_size(mut self, columns: u32, lines: u32) -> Self {
        self.columns = columns;
        self.lines = lines;
        self
    }

    // -- Accessors --

    pub fn focused_id(&self) -> u32 {
        self.focused
    }

    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    pub fn window(&self, id: u32) -> Option<&Window> {
        self.windows.get(&id)
    }

    pub fn tree(&self) -> &SplitNode {
        &self.tree
    }

    /// Window ids in visual order.
    pub fn ordered_window_ids(&self) -> Vec<u32> {
        self.tree.collect_window_ids()
    }

    pub fn buffer(&self, name: &str) -> Option<&Buffer> {
        self.buffers.get(name)
    }

    pub fn buffer_mut(&mut self, name: &str) -> Option<&mut Buffer> {
        self.buffers.get_mut(name)
    }

    /// Get a buffer, creating it with `kind` if it does not exist.
    pub fn ensure_buffer(&mut self, name: &str, kind: BufferKind) -> &mut Buffer {
        self.buffers
            .entry(name.to_string())
            .or_insert_with(|| Buffer::new(name, kind))
    }

    pub fn output_buffer(&self) -> &str {
        &self.output_buffer
    }

    pub fn set_output_buffer(&mut self, name: impl Into<String>) {
        self.output_buffer = name.into();
    }

    pub fn messages(&self) -> &NotificationQueue {
        &self.messages
    }

    /// Messages posted over the frame's lifetime.
    pub fn posted_messages(&self) -> usize {
        self.messages.pushed()
    }

    pub fn register_count(&self) -> usize {
        self.registers.len()
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}
