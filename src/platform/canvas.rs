//! Drawing capability

use crate::sim::Rect;

/// Linear RGBA color
pub type Color = [f32; 4];

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
    pub const BLACK: Color = [0.0, 0.0, 0.0, 1.0];
}

/// A drawing surface in logical arena coordinates (top-left origin)
pub trait Canvas {
    /// Fill an axis-aligned rectangle
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw a line of monospace text with its baseline at `y`
    fn draw_text(&mut self, text: &str, x: f32, y: f32, color: Color);
}
