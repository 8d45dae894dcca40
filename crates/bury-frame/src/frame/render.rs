//! Text rendering of the frame for the CLI.

use std::fmt::Write;

use bury_common::Rect;

use super::Frame;

impl Frame {
    /// Window rectangles for the current tree, in visual order.
    pub fn layout(&self) -> Vec<(u32, Rect)> {
        let bounds = Rect {
            x: 0.0,
            y: 0.0,
            width: self.columns as f64,
            height: self.lines as f64,
        };
        self.layout_engine.compute(&self.tree, bounds)
    }

    /// One line per window: id, buffer, geometry, and a `*` on the
    /// focused window.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (id, rect) in self.layout() {
            let buffer = self.windows.get(&id).map_or("?", |w| w.buffer.as_str());
            let marker = if id == self.focused { "*" } else { " " };
            let _ = writeln!(
                out,
                "{marker} window-{id:<3} {buffer:<16} {}x{}+{}+{}",
                rect.width.round() as u32,
                rect.height.round() as u32,
                rect.x.round() as u32,
                rect.y.round() as u32,
            );
        }
        out
    }
}
