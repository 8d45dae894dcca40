use bury_common::BufferKind;

pub const SCRATCH_BUFFER: &str = "*scratch*";
pub const COMPILATION_BUFFER: &str = "*compilation*";
pub const GREP_BUFFER: &str = "*grep*";

/// Text with a kind and a point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    pub name: String,
    pub kind: BufferKind,
    text: String,
    point: usize,
}

impl Buffer {
    pub fn new(name: impl Into<String>, kind: BufferKind) -> Self {
        Self {
            name: name.into(),
            kind,
            text: String::new(),
            point: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn point(&self) -> usize {
        self.point
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Clear the contents and move point to the beginning.
    pub fn erase(&mut self) {
        self.text.clear();
        self.point = 0;
    }

    /// Append at the end without moving point.
    pub fn append(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Move point, clamped to the buffer end.
    pub fn goto(&mut self, point: usize) {
        self.point = point.min(self.text.len());
    }
}
