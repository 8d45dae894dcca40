use serde::{Deserialize, Serialize};

/// `Horizontal` places children side by side, `Vertical` stacks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SplitNode {
    Leaf {
        window_id: u32,
    },
    Split {
        direction: Direction,
        ratio: f64,
        first: Box<SplitNode>,
        second: Box<SplitNode>,
    },
}

impl SplitNode {
    pub fn leaf(window_id: u32) -> Self {
        SplitNode::Leaf { window_id }
    }

    pub fn split_h(first: SplitNode, second: SplitNode) -> Self {
        SplitNode::Split {
            direction: Direction::Horizontal,
            ratio: 0.5,
            first: Box::new(first),
            second: Box::new(second),
        }
    }

    pub fn split_v(first: SplitNode, second: SplitNode) -> Self {
        SplitNode::Split {
            direction: Direction::Vertical,
            ratio: 0.5,
            first: Box::new(first),
            second: Box::new(second),
        }
    }

    pub fn window_count(&self) -> usize {
        match self {
            SplitNode::Leaf { .. } => 1,
            SplitNode::Split { first, second, .. } => first.window_count() + second.window_count(),
        }
    }

    pub fn contains_window(&self, id: u32) -> bool {
        match self {
            SplitNode::Leaf { window_id } => *window_id == id,
            SplitNode::Split { first, second, .. } => {
                first.contains_window(id) || second.contains_window(id)
            }
        }
    }

    /// Window ids in depth-first, top-left to bottom-right order.
    pub fn collect_window_ids(&self) -> Vec<u32> {
        let mut ids = Vec::new();
        self.collect_ids_into(&mut ids);
        ids
    }

    fn collect_ids_into(&self, out: &mut Vec<u32>) {
        match self {
            SplitNode::Leaf { window_id } => out.push(*window_id),
            SplitNode::Split { first, second, .. } => {
                first.collect_ids_into(out);
                second.collect_ids_into(out);
            }
        }
    }

    /// The window after `current_id`, wrapping around.
    pub fn next_window(&self, current_id: u32) -> Option<u32> {
        let ids = self.collect_window_ids();
        if ids.len() <= 1 {
            return None;
        }
        let idx = ids.iter().position(|&id| id == current_id)?;
        Some(ids[(idx + 1) % ids.len()])
    }
}
