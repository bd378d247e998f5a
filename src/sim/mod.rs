//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One tick per rendered frame, no wall-clock time
//! - No randomness
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{WallOutcome, ball_hits_paddle, classify_wall};
pub use rect::Rect;
pub use state::{Ball, GameState, Paddle};
pub use tick::{TickEvents, TickInput, tick};
