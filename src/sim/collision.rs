//! Collision detection and response
//!
//! Discrete per-tick sampling only: walls and paddle are tested against the
//! ball's projected next position, bricks against its current center.

use super::geometry::paddle_bounce;
use super::state::{Ball, BrickGrid, GameEvent, Paddle};
use crate::config::GameConfig;

/// Result of advancing the ball one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallStep {
    InPlay,
    /// Ball reached the floor outside the paddle's x-range
    Lost,
}

/// Move the ball by its velocity, then resolve walls, ceiling and paddle
///
/// After the move, each check looks one step ahead (`pos + vel`). Side walls
/// and ceiling reflect the matching velocity component. Reaching the floor
/// either bounces off the paddle, when the ball's x is strictly inside the
/// paddle's span, or loses the ball.
pub fn step_ball(
    ball: &mut Ball,
    paddle: &Paddle,
    config: &GameConfig,
    events: &mut Vec<GameEvent>,
) -> BallStep {
    ball.pos += ball.vel;

    let next_x = ball.pos.x + ball.vel.x;
    if next_x > config.canvas_width - ball.radius || next_x < ball.radius {
        ball.vel.x = -ball.vel.x;
        events.push(GameEvent::WallBounce);
    }

    let next_y = ball.pos.y + ball.vel.y;
    if next_y < ball.radius {
        ball.vel.y = -ball.vel.y;
        events.push(GameEvent::CeilingBounce);
    } else if next_y > config.canvas_height - ball.radius {
        let rect = paddle.rect();
        if rect.spans_x(ball.pos.x) {
            ball.vel = paddle_bounce(ball.vel, &rect, ball.pos.x);
            events.push(GameEvent::PaddleBounce);
        } else {
            events.push(GameEvent::BallLost);
            return BallStep::Lost;
        }
    }

    BallStep::InPlay
}

/// Destroy every alive brick containing the ball's center
///
/// Each hit flips `vel.y` and scores one point. There is no early exit, so
/// two bricks hit in the same tick flip the ball twice. Returns the number
/// of bricks destroyed.
pub fn resolve_brick_collisions(
    ball: &mut Ball,
    bricks: &mut BrickGrid,
    score: &mut u32,
    events: &mut Vec<GameEvent>,
) -> usize {
    let mut destroyed = 0;
    for brick in bricks.iter_mut() {
        if brick.is_alive() && brick.rect.contains_point(ball.pos) {
            ball.vel.y = -ball.vel.y;
            brick.destroy();
            *score += 1;
            destroyed += 1;
            log::debug!(
                "Brick ({}, {}) destroyed, score {}",
                brick.column,
                brick.row,
                score
            );
            events.push(GameEvent::BrickDestroyed {
                column: brick.column,
                row: brick.row,
            });
        }
    }
    destroyed
}
