//! Rendering module
//!
//! `hud::draw` is the render step and only talks to a `Canvas`. `Frame`
//! turns canvas calls into triangles that `RenderState` uploads to wgpu.

pub mod font;
pub mod hud;
pub mod pipeline;
pub mod shapes;

pub use hud::draw;
pub use pipeline::RenderState;
pub use shapes::{Frame, Vertex};
