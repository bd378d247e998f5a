//! Game state and core simulation types
//!
//! The whole simulation is one owned `GameState`; nothing lives in statics.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// The player's paddle on the right edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            rect: Rect::new(PADDLE_START_X, PADDLE_START_Y, PADDLE_WIDTH, PADDLE_HEIGHT),
        }
    }
}

impl Paddle {
    /// Shift the paddle vertically. Not clamped: the paddle may leave the arena.
    pub fn move_by(&mut self, dy: f32) {
        self.rect.pos.y += dy;
    }
}

/// The single bouncing ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub rect: Rect,
    /// Per-axis velocity (units/frame); each component is ±BALL_SPEED
    pub vel: Vec2,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            rect: Rect::new(0.0, 0.0, BALL_SIZE, BALL_SIZE),
            vel: Vec2::new(BALL_SPEED, BALL_SPEED),
        }
    }
}

impl Ball {
    /// Advance position by the current velocity
    pub fn advance(&mut self) {
        self.rect.pos += self.vel;
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.rect.pos
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub paddle: Paddle,
    pub ball: Ball,
    /// Points in the current round
    pub score: u32,
    /// Best score reached since startup (never decreases)
    pub high_score: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            paddle: Paddle::default(),
            ball: Ball::default(),
            score: 0,
            high_score: 0,
        }
    }

    /// Add one point; returns true if this set a new high score.
    /// Saturates at `u32::MAX`.
    pub fn award_point(&mut self) -> bool {
        self.score = self.score.saturating_add(1);
        if self.score > self.high_score {
            self.high_score = self.score;
            true
        } else {
            false
        }
    }

    /// Start a new round: ball back to the origin, score cleared.
    /// Velocity and high score carry over.
    pub fn reset_round(&mut self) {
        self.ball.rect.pos = Vec2::ZERO;
        self.score = 0;
    }
}
