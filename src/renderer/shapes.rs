//! Shape generation for 2D primitives
//!
//! `Frame` is the `Canvas` the GPU path draws into: every call becomes
//! triangles in logical arena coordinates, uploaded once per frame.

use bytemuck::{Pod, Zeroable};

use super::font;
use crate::platform::{Canvas, Color};
use crate::sim::Rect;

/// A colored corner in logical coordinates; the pipeline rewrites the
/// position to NDC before upload
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: Color,
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: Color) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Two triangles covering a rectangle
pub fn rect(r: Rect, color: Color) -> [Vertex; 6] {
    let (x0, y0) = (r.x(), r.y());
    let (x1, y1) = (r.right(), r.bottom());
    [
        Vertex::new(x0, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Vertex list for one frame
#[derive(Debug, Default)]
pub struct Frame {
    vertices: Vec<Vertex>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop last frame's geometry, keeping the allocation
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }
}

impl Canvas for Frame {
    fn fill_rect(&mut self, r: Rect, color: Color) {
        // Degenerate rects add nothing
        if r.w() <= 0.0 || r.h() <= 0.0 {
            return;
        }
        self.vertices.extend_from_slice(&rect(r, color));
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, color: Color) {
        for r in font::layout_text(text, x, y) {
            self.fill_rect(r, color);
        }
    }
}
