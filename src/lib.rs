//! Paddle Pong - a single-paddle arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, scoring)
//! - `renderer`: HUD drawing and the wgpu rendering pipeline
//! - `platform`: Input/canvas capabilities and host errors
//! - `settings`: Host-side presentation options

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Logical arena dimensions (never rescaled by the window)
    pub const SCREEN_WIDTH: f32 = 1280.0;
    pub const SCREEN_HEIGHT: f32 = 960.0;

    /// Ball speed per axis (units/frame)
    pub const BALL_SPEED: f32 = 7.0;
    /// Paddle vertical speed (units/frame)
    pub const PADDLE_SPEED: f32 = 9.0;

    /// Paddle defaults - right edge of the arena
    pub const PADDLE_START_X: f32 = 1250.0;
    pub const PADDLE_START_Y: f32 = 200.0;
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;

    /// Ball defaults - top-left corner, heading down-right
    pub const BALL_SIZE: f32 = 15.0;

    /// HUD text baselines
    pub const SCORE_TEXT_POS: (f32, f32) = (10.0, 20.0);
    pub const HIGH_SCORE_TEXT_POS: (f32, f32) = (10.0, 40.0);

    pub const WINDOW_TITLE: &str = "Pong";
}
