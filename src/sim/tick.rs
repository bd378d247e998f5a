//! Per-frame simulation step
//!
//! One call advances the game by exactly one frame:
//! input → paddle → ball → paddle collision → wall check.

use super::collision::{
    WallOutcome, apply_rebound, ball_hits_paddle, bounce_off_paddle, classify_wall,
};
use super::state::GameState;
use crate::consts::*;

/// Input for a single frame: which keys are held right now
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickEvents {
    /// Ball was inside the paddle and bounced
    pub paddle_hit: bool,
    /// Score exceeded the previous high score
    pub new_high_score: bool,
    /// Wall branch taken after the paddle check
    pub wall: WallOutcome,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) -> TickEvents {
    // Both keys held cancel out
    if input.down {
        state.paddle.move_by(PADDLE_SPEED);
    }
    if input.up {
        state.paddle.move_by(-PADDLE_SPEED);
    }

    state.ball.advance();

    let mut new_high_score = false;
    let paddle_hit = ball_hits_paddle(&state.ball, &state.paddle.rect);
    if paddle_hit {
        bounce_off_paddle(&mut state.ball);
        new_high_score = state.award_point();
        if new_high_score {
            log::debug!("New high score: {}", state.high_score);
        }
    }

    let wall = classify_wall(&state.ball);
    match wall {
        WallOutcome::Reset => {
            log::debug!("Round over at score {} (high {})", state.score, state.high_score);
            state.reset_round();
        }
        other => apply_rebound(&mut state.ball, other),
    }

    TickEvents {
        paddle_hit,
        new_high_score,
        wall,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    fn state_with_ball(x: f32, y: f32, dx: f32, dy: f32) -> GameState {
        let mut state = GameState::new();
        state.ball.rect.pos = Vec2::new(x, y);
        state.ball.vel = Vec2::new(dx, dy);
        state
    }

    #[test]
    fn test_paddle_moves_with_keys() {
        let mut state = GameState::new();

        tick(&mut state, &TickInput { up: false, down: true });
        assert_eq!(state.paddle.rect.y(), 209.0);

        tick(&mut state, &TickInput { up: true, down: false });
        tick(&mut state, &TickInput { up: true, down: false });
        assert_eq!(state.paddle.rect.y(), 191.0);

        tick(&mut state, &TickInput { up: true, down: true });
        assert_eq!(state.paddle.rect.y(), 191.0);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.paddle.rect.y(), 191.0);
        assert_eq!(state.paddle.rect.x(), 1250.0);
    }

    #[test]
    fn test_ball_moves_by_velocity() {
        let mut state = state_with_ball(100.0, 100.0, 7.0, -7.0);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.ball.pos(), Vec2::new(107.0, 93.0));
        assert_eq!(state.ball.vel, Vec2::new(7.0, -7.0));
    }

    #[test]
    fn test_paddle_bounce_scenario() {
        // Ball lands exactly on the paddle's top-left column after moving
        let mut state = state_with_ball(1243.0, 243.0, 7.0, 7.0);
        let events = tick(&mut state, &TickInput::default());

        assert!(events.paddle_hit);
        assert!(events.new_high_score);
        assert_eq!(events.wall, WallOutcome::None);
        assert_eq!(state.ball.pos(), Vec2::new(1250.0, 250.0));
        assert_eq!(state.ball.vel, Vec2::new(-7.0, 7.0));
        assert_eq!(state.score, 1);
        assert_eq!(state.high_score, 1);
    }

    #[test]
    fn test_lingering_ball_rescores_every_frame() {
        let mut state = state_with_ball(1250.0, 250.0, 0.0, 0.0);
        for expected in 1..=3 {
            let events = tick(&mut state, &TickInput::default());
            assert!(events.paddle_hit);
            assert_eq!(state.score, expected);
        }
        assert_eq!(state.high_score, 3);
    }

    #[test]
    fn test_right_edge_resets_round() {
        let mut state = state_with_ball(1273.0, 493.0, 7.0, 7.0);
        state.score = 5;
        state.high_score = 5;

        let events = tick(&mut state, &TickInput::default());

        assert_eq!(events.wall, WallOutcome::Reset);
        assert_eq!(state.ball.pos(), Vec2::ZERO);
        assert_eq!(state.ball.vel, Vec2::new(7.0, 7.0));
        assert_eq!(state.score, 0);
        assert_eq!(state.high_score, 5);
    }

    #[test]
    fn test_left_wall_rebound() {
        let mut state = state_with_ball(5.0, 400.0, -7.0, 7.0);
        let events = tick(&mut state, &TickInput::default());
        assert_eq!(events.wall, WallOutcome::LeftRebound);
        assert_eq!(state.ball.vel, Vec2::new(7.0, 7.0));
    }

    #[test]
    fn test_top_and_bottom_rebound() {
        let mut state = state_with_ball(400.0, 3.0, 7.0, -7.0);
        assert_eq!(tick(&mut state, &TickInput::default()).wall, WallOutcome::TopRebound);
        assert_eq!(state.ball.vel.y, 7.0);

        let mut state = state_with_ball(400.0, 955.0, 7.0, 7.0);
        assert_eq!(tick(&mut state, &TickInput::default()).wall, WallOutcome::BottomRebound);
        assert_eq!(state.ball.vel.y, -7.0);
    }

    #[test]
    fn test_first_frame_moves_inside_arena() {
        let mut state = GameState::new();
        let events = tick(&mut state, &TickInput::default());
        assert_eq!(events.wall, WallOutcome::None);
        assert_eq!(state.ball.pos(), Vec2::new(7.0, 7.0));
    }

    #[test]
    fn test_reset_then_next_frame_uses_left_branch() {
        // After a reset the ball sits at x=0 with leftward velocity
        let mut state = state_with_ball(1287.0, 300.0, -7.0, 7.0);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.ball.pos(), Vec2::ZERO);

        let events = tick(&mut state, &TickInput::default());
        assert_eq!(state.ball.pos(), Vec2::new(-7.0, 7.0));
        assert_eq!(events.wall, WallOutcome::LeftRebound);
        assert_eq!(state.ball.vel.x, 7.0);
    }

    #[test]
    fn test_long_run_stays_consistent() {
        let mut state = GameState::new();
        let mut max_score = 0;
        for frame in 0..10_000u32 {
            let input = TickInput {
                up: frame % 40 < 20,
                down: frame % 40 >= 20,
            };
            tick(&mut state, &input);
            max_score = max_score.max(state.score);
            assert!(state.high_score >= state.score);
            assert_eq!(state.ball.vel.x.abs(), BALL_SPEED);
            assert_eq!(state.ball.vel.y.abs(), BALL_SPEED);
            assert_eq!(state.ball.rect.size, Vec2::splat(BALL_SIZE));
            assert_eq!(state.paddle.rect.size, Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT));
        }
        assert_eq!(state.high_score, max_score);
    }

    fn axis_speed() -> impl Strategy<Value = f32> {
        prop_oneof![Just(BALL_SPEED), Just(-BALL_SPEED)]
    }

    proptest! {
        #[test]
        fn prop_move_adds_velocity(
            x in 1.0f32..1200.0,
            y in 1.0f32..900.0,
            dx in axis_speed(),
            dy in axis_speed(),
        ) {
            let mut state = state_with_ball(x, y, dx, dy);
            // Keep the paddle out of the way
            state.paddle.rect.pos.y = -10_000.0;
            tick(&mut state, &TickInput::default());
            prop_assert_eq!(state.ball.pos(), Vec2::new(x, y) + Vec2::new(dx, dy));
        }

        #[test]
        fn prop_paddle_overlap_flips_dx_and_scores(
            off_x in 0.0f32..14.9,
            off_y in 0.0f32..=100.0,
            dx in axis_speed(),
            dy in axis_speed(),
            score in 0u32..50,
        ) {
            // Place the ball so that after moving it lands inside the paddle
            let target = Vec2::new(1250.0 + off_x, 200.0 + off_y);
            let start = target - Vec2::new(dx, dy);
            let mut state = state_with_ball(start.x, start.y, dx, dy);
            state.score = score;
            state.high_score = score;

            let events = tick(&mut state, &TickInput::default());

            prop_assert!(events.paddle_hit);
            prop_assert_eq!(state.ball.vel, Vec2::new(-dx, dy));
            prop_assert_eq!(state.score, score + 1);
            prop_assert_eq!(state.high_score, score + 1);
        }

        #[test]
        fn prop_high_score_is_running_max(
            inputs in proptest::collection::vec((any::<bool>(), any::<bool>()), 1..600),
        ) {
            let mut state = GameState::new();
            let mut max_seen = 0;
            for (up, down) in inputs {
                let before = state.high_score;
                tick(&mut state, &TickInput { up, down });
                max_seen = max_seen.max(state.score);
                prop_assert!(state.high_score >= before);
                prop_assert_eq!(state.high_score, max_seen);
            }
        }

        #[test]
        fn prop_reset_keeps_velocity_and_high_score(
            x in 1280.0f32..2000.0,
            y in -500.0f32..1500.0,
            dx in axis_speed(),
            dy in axis_speed(),
            score in 0u32..20,
            extra in 0u32..20,
        ) {
            let mut state = state_with_ball(x - dx, y - dy, dx, dy);
            state.paddle.rect.pos.y = -10_000.0;
            state.score = score;
            state.high_score = score + extra;

            let events = tick(&mut state, &TickInput::default());

            prop_assert_eq!(events.wall, WallOutcome::Reset);
            prop_assert_eq!(state.ball.pos(), Vec2::ZERO);
            prop_assert_eq!(state.ball.vel, Vec2::new(dx, dy));
            prop_assert_eq!(state.score, 0);
            prop_assert_eq!(state.high_score, score + extra);
        }

        #[test]
        fn prop_left_wall_forces_positive_dx(
            x in -50.0f32..=0.0,
            y in -500.0f32..1500.0,
            dx in axis_speed(),
            dy in axis_speed(),
        ) {
            let mut state = state_with_ball(x - dx, y - dy, dx, dy);
            state.paddle.rect.pos.y = -10_000.0;

            tick(&mut state, &TickInput::default());

            prop_assert_eq!(state.ball.vel, Vec2::new(BALL_SPEED, dy));
        }
    }
}
