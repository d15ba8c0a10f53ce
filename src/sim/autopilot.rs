//! Demo-mode paddle steering
//!
//! Tracks the ball's x with a small dead zone. Purely a function of the
//! session, so runs driven by it stay deterministic.

use super::state::{Direction, GameSession};
use super::tick::TickInput;

/// Ignore offsets smaller than this share of the paddle width
const DEAD_ZONE: f32 = 0.2;

/// Pick a movement direction that keeps the paddle under the ball
pub fn steer(session: &GameSession) -> TickInput {
    let paddle = &session.paddle;
    // Aim slightly off-center so returns are not perfectly vertical
    let lead = if session.ball.vel.x >= 0.0 { -0.15 } else { 0.15 };
    let target = session.ball.pos.x + lead * paddle.width;
    let offset = target - paddle.center_x();

    let direction = if offset.abs() <= paddle.width * DEAD_ZONE {
        None
    } else if offset < 0.0 {
        Some(Direction::Left)
    } else {
        Some(Direction::Right)
    };

    TickInput { direction }
}
