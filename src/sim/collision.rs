//! Collision detection and response
//!
//! The ball is treated as a point (its top-left corner) for both checks.
//! Paddle hits are not debounced: a ball lingering inside the paddle
//! bounces again every frame.

use super::rect::Rect;
use super::state::Ball;
use crate::consts::*;

/// Which wall branch fired this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallOutcome {
    /// Ball passed the right edge; round restarts
    Reset,
    /// Left edge: horizontal velocity forced positive
    LeftRebound,
    /// Top edge: vertical velocity forced positive
    TopRebound,
    /// Bottom edge: vertical velocity forced negative
    BottomRebound,
    /// Ball is inside the arena
    None,
}

/// Check whether the ball point lies inside the paddle.
///
/// Horizontal span is half-open (`x <= bx < x + w`), vertical span is closed
/// (`y <= by <= y + h`).
pub fn ball_hits_paddle(ball: &Ball, paddle: &Rect) -> bool {
    let p = ball.pos();
    paddle.spans_x(p.x) && paddle.spans_y(p.y)
}

/// Reverse horizontal direction after a paddle hit
pub fn bounce_off_paddle(ball: &mut Ball) {
    ball.vel.x = -ball.vel.x;
}

/// Classify the ball against the arena walls.
///
/// Ordered: the first matching branch wins, so corners resolve to the
/// earlier entry.
pub fn classify_wall(ball: &Ball) -> WallOutcome {
    let p = ball.pos();
    if p.x >= SCREEN_WIDTH {
        WallOutcome::Reset
    } else if p.x <= 0.0 {
        WallOutcome::LeftRebound
    } else if p.y < 0.0 {
        WallOutcome::TopRebound
    } else if p.y >= SCREEN_HEIGHT {
        WallOutcome::BottomRebound
    } else {
        WallOutcome::None
    }
}

/// Apply a rebound to the ball velocity. `Reset` touches game state and is
/// handled by the tick.
pub fn apply_rebound(ball: &mut Ball, outcome: WallOutcome) {
    match outcome {
        WallOutcome::LeftRebound => ball.vel.x = BALL_SPEED,
        WallOutcome::TopRebound => ball.vel.y = BALL_SPEED,
        WallOutcome::BottomRebound => ball.vel.y = -BALL_SPEED,
        WallOutcome::Reset | WallOutcome::None => {}
    }
}
