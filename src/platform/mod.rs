//! Platform abstraction layer
//!
//! The simulation talks to the outside world only through these
//! capabilities, so it runs the same under a window or a test harness:
//! - `InputSource`: which keys are held this frame
//! - `Canvas`: filled rectangles and text
//! - `HostError`: fatal failures reported by the host

pub mod canvas;
pub mod error;
pub mod input;

pub use canvas::{Canvas, Color, colors};
pub use error::HostError;
pub use input::{InputSource, Key, KeyboardState, poll};
