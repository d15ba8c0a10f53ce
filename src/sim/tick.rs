//! Per-frame simulation tick
//!
//! One call advances the session by exactly one discrete step. No clocks and
//! no randomness: identical session and input give identical results.

use serde::{Deserialize, Serialize};

use super::collision::{BallStep, resolve_brick_collisions, step_ball};
use super::state::{Direction, GameEvent, GameSession, Outcome};
use crate::config::GameConfig;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Held movement direction, applied once before the ball moves
    pub direction: Option<Direction>,
}

impl TickInput {
    pub fn moving(direction: Direction) -> Self {
        Self {
            direction: Some(direction),
        }
    }
}

/// What happened during one tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Events in the order they occurred
    pub events: Vec<GameEvent>,
    /// Set on the tick the run ends
    pub outcome: Option<Outcome>,
}

impl TickReport {
    pub fn bricks_destroyed(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, GameEvent::BrickDestroyed { .. }))
            .count()
    }
}

/// Advance the session by one step
///
/// Order: paddle input, brick collisions, ball step, then the end-of-run
/// check. Clearing the board wins even if the ball is lost on the same tick.
/// A session that has already ended is left untouched.
pub fn tick(session: &mut GameSession, input: &TickInput, config: &GameConfig) -> TickReport {
    let mut report = TickReport::default();
    if session.is_over() {
        return report;
    }

    session.ticks += 1;

    if let Some(direction) = input.direction {
        session.paddle.move_in(direction, config.canvas_width);
    }

    resolve_brick_collisions(
        &mut session.ball,
        &mut session.bricks,
        &mut session.score,
        &mut report.events,
    );

    let step = step_ball(
        &mut session.ball,
        &session.paddle,
        config,
        &mut report.events,
    );

    let outcome = if session.score >= session.winning_score() {
        report.events.push(GameEvent::BoardCleared);
        Some(Outcome::Won)
    } else if step == BallStep::Lost {
        Some(Outcome::Lost)
    } else {
        None
    };

    if let Some(outcome) = outcome {
        log::info!(
            "Run ended ({:?}) after {} ticks with score {}",
            outcome,
            session.ticks,
            session.score
        );
        session.outcome = Some(outcome);
        report.outcome = Some(outcome);
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::BrickStatus;
    use glam::Vec2;

    #[test]
    fn test_first_tick_just_moves_ball() {
        let config = GameConfig::default();
        let mut session = GameSession::new(&config);
        let report = tick(&mut session, &TickInput::default(), &config);
        assert_eq!(report, TickReport::default());
        assert_eq!(session.ticks, 1);
        assert_eq!(session.ball.pos, Vec2::new(402.0, 568.0));
    }

    #[test]
    fn test_input_moves_paddle() {
        let config = GameConfig::default();
        let mut session = GameSession::new(&config);
        tick(&mut session, &TickInput::moving(Direction::Left), &config);
        assert_eq!(session.paddle.x, 343.0);
    }

    #[test]
    fn test_last_brick_wins() {
        let config = GameConfig::default();
        let mut session = GameSession::new(&config);
        for brick in session.bricks.iter_mut() {
            if (brick.column, brick.row) != (3, 2) {
                brick.destroy();
            }
        }
        session.score = 39;

        let target = session.bricks.get(3, 2).unwrap().rect;
        session.ball.pos = Vec2::new(target.center_x(), target.y + 10.0);
        session.ball.vel = Vec2::new(1.0, -2.0);

        let report = tick(&mut session, &TickInput::default(), &config);
        assert_eq!(report.outcome, Some(Outcome::Won));
        assert_eq!(session.score, 40);
        assert_eq!(report.bricks_destroyed(), 1);
        assert_eq!(report.events.last(), Some(&GameEvent::BoardCleared));
        assert!(session.bricks.is_cleared());
    }

    #[test]
    fn test_miss_loses_with_score_unchanged() {
        let config = GameConfig::default();
        let mut session = GameSession::new(&config);
        session.score = 7;
        session.ball.pos = Vec2::new(50.0, 590.0);
        session.ball.vel = Vec2::new(1.0, 3.0);

        let report = tick(&mut session, &TickInput::default(), &config);
        assert_eq!(report.outcome, Some(Outcome::Lost));
        assert_eq!(session.score, 7);
        assert_eq!(session.outcome, Some(Outcome::Lost));
    }

    #[test]
    fn test_ended_session_ignores_ticks() {
        let config = GameConfig::default();
        let mut session = GameSession::new(&config);
        session.outcome = Some(Outcome::Lost);
        let before = session.clone();

        let report = tick(&mut session, &TickInput::moving(Direction::Right), &config);
        assert!(report.events.is_empty());
        assert_eq!(session, before);
    }

    #[test]
    fn test_determinism() {
        let config = GameConfig::default();
        let mut a = GameSession::new(&config);
        let mut b = GameSession::new(&config);

        let inputs = [
            TickInput::moving(Direction::Left),
            TickInput::default(),
            TickInput::moving(Direction::Right),
            TickInput::moving(Direction::Right),
        ];

        for i in 0..3000 {
            let input = &inputs[i % inputs.len()];
            let ra = tick(&mut a, input, &config);
            let rb = tick(&mut b, input, &config);
            assert_eq!(ra, rb);
        }
        assert_eq!(a, b);
    }

    #[test]
    fn test_straight_up_rally_clears_middle_column_only() {
        // Dead-center bounces send the ball straight back up forever
        let config = GameConfig {
            ball_velocity: Vec2::new(0.0, -2.0),
            ..Default::default()
        };
        let mut session = GameSession::new(&config);
        for _ in 0..5000 {
            tick(&mut session, &TickInput::default(), &config);
        }
        assert!(!session.is_over());
        assert_eq!(session.score, 5);
        for brick in session.bricks.iter() {
            let expected = if brick.column == 4 {
                BrickStatus::Destroyed
            } else {
                BrickStatus::Alive
            };
            assert_eq!(brick.status, expected);
        }
    }
}
