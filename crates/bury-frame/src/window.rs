use bury_common::PaneId;
use serde::{Deserialize, Serialize};

/// A window: a viewport onto one buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    pub id: PaneId,
    pub buffer: String,
}

impl Window {
    pub fn new(id: u32, buffer: impl Into<String>) -> Self {
        Self {
            id: PaneId(id),
            buffer: buffer.into(),
        }
    }
}
