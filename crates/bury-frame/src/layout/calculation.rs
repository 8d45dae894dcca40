//! Recursive tree-to-rect computation.

use crate::tree::{Direction, SplitNode};
use bury_common::Rect;

use super::LayoutEngine;

impl LayoutEngine {
    pub fn compute(&self, root: &SplitNode, bounds: Rect) -> Vec<(u32, Rect)> {
        let mut results = Vec::new();
        self.layout_node(root, bounds, &mut results);
        results
    }

    fn layout_node(&self, node: &SplitNode, bounds: Rect, out: &mut Vec<(u32, Rect)>) {
        match node {
            SplitNode::Leaf { window_id } => out.push((*window_id, bounds)),
            SplitNode::Split {
                direction,
                ratio,
                first,
                second,
            } => {
                let (a, b) = self.divide(bounds, *direction, *ratio);
                self.layout_node(first, a, out);
                self.layout_node(second, b, out);
            }
        }
    }

    fn divide(&self, bounds: Rect, direction: Direction, ratio: f64) -> (Rect, Rect) {
        let gap = self.gap as f64;
        match direction {
            Direction::Horizontal => {
                let available = (bounds.width - gap).max(0.0);
                let w1 = available * ratio;
                (
                    Rect {
                        width: w1,
                        ..bounds
                    },
                    Rect {
                        x: bounds.x + w1 + gap,
                        width: (available - w1).max(0.0),
                        ..bounds
                    },
                )
            }
            Direction::Vertical => {
                let available = (bounds.height - gap).max(0.0);
                let h1 = available * ratio;
                (
                    Rect {
                        height: h1,
                        ..bounds
                    },
                    Rect {
                        y: bounds.y + h1 + gap,
                        height: (available - h1).max(0.0),
                        ..bounds
                    },
                )
            }
        }
    }
}
