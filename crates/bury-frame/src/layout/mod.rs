//! Window geometry: turns the split tree into rectangles.

mod calculation;

/// Computes window rectangles inside the frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutEngine {
    /// Cells between sibling windows.
    pub gap: u32,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self { gap: 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{Direction, SplitNode};
    use bury_common::Rect;

    fn bounds() -> Rect {
        Rect {
            x: 0.0,
            y: 0.0,
            width: 160.0,
            height: 48.0,
        }
    }

    #[test]
    fn single_window_fills_bounds() {
        let engine = LayoutEngine::default();
        let result = engine.compute(&SplitNode::leaf(1), bounds());
        assert_eq!(result, vec![(1, bounds())]);
    }

    #[test]
    fn vertical_split_divides_height() {
        let engine = LayoutEngine::default();
        let root = SplitNode::split_v(SplitNode::leaf(1), SplitNode::leaf(2));
        let result = engine.compute(&root, bounds());
        assert_eq!(result.len(), 2);
        assert!((result[0].1.height - 24.0).abs() < 0.01);
        assert!((result[1].1.y - 24.0).abs() < 0.01);
        assert!((result[1].1.width - 160.0).abs() < 0.01);
    }

    #[test]
    fn gap_reduces_available_space() {
        let engine = LayoutEngine { gap: 2 };
        let root = SplitNode::Split {
            direction: Direction::Horizontal,
            ratio: 0.5,
            first: Box::new(SplitNode::leaf(1)),
            second: Box::new(SplitNode::leaf(2)),
        };
        let result = engine.compute(&root, bounds());
        let total = result[0].1.width + result[1].1.width;
        assert!((total - 158.0).abs() < 0.01);
    }
}
