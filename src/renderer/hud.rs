//! Render step: turns a `GameState` into canvas calls
//!
//! Read-only over the state; no game logic happens here.

use crate::consts::{HIGH_SCORE_TEXT_POS, SCORE_TEXT_POS};
use crate::platform::{Canvas, Color};
use crate::sim::GameState;

pub fn score_label(score: u32) -> String {
    format!("Score: {}", score)
}

pub fn high_score_label(high_score: u32) -> String {
    format!("High Score: {}", high_score)
}

/// Draw paddle, ball and both score labels in `color`
pub fn draw(state: &GameState, canvas: &mut impl Canvas, color: Color) {
    canvas.fill_rect(state.paddle.rect, color);
    canvas.fill_rect(state.ball.rect, color);

    let (x, y) = SCORE_TEXT_POS;
    canvas.draw_text(&score_label(state.score), x, y, color);
    let (x, y) = HIGH_SCORE_TEXT_POS;
    canvas.draw_text(&high_score_label(state.high_score), x, y, color);
}
