//! Mutating operations on the split tree.

use super::{Direction, SplitNode};

impl SplitNode {
    /// Split the leaf `target_id`. The existing window stays first, the new
    /// window goes second. Returns `false` if the target is not in the tree.
    pub fn split_at(&mut self, target_id: u32, new_id: u32, direction: Direction) -> bool {
        match self {
            SplitNode::Leaf { window_id } if *window_id == target_id => {
                *self = SplitNode::Split {
                    direction,
                    ratio: 0.5,
                    first: Box::new(SplitNode::leaf(target_id)),
                    second: Box::new(SplitNode::leaf(new_id)),
                };
                true
            }
            SplitNode::Leaf { .. } => false,
            SplitNode::Split { first, second, .. } => {
                first.split_at(target_id, new_id, direction)
                    || second.split_at(target_id, new_id, direction)
            }
        }
    }

    /// Remove a window; its sibling takes the parent's place. The root leaf
    /// cannot be removed.
    pub fn remove_window(&mut self, target_id: u32) -> bool {
        match self {
            SplitNode::Leaf { .. } => false,
            SplitNode::Split { first, second, .. } => {
                if matches!(first.as_ref(), SplitNode::Leaf { window_id } if *window_id == target_id) {
                    *self = *second.clone();
                    return true;
                }
                if matches!(second.as_ref(), SplitNode::Leaf { window_id } if *window_id == target_id) {
                    *self = *first.clone();
                    return true;
                }
                first.remove_window(target_id) || second.remove_window(target_id)
            }
        }
    }
}
