//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One discrete step per tick, no wall-clock time
//! - No randomness
//! - Stable iteration order (columns outer, rows inner)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod geometry;
pub mod state;
pub mod tick;

pub use collision::{BallStep, resolve_brick_collisions, step_ball};
pub use geometry::{Rect, paddle_bounce};
pub use state::{
    Ball, Brick, BrickGrid, BrickStatus, Direction, GameEvent, GameSession, Outcome, Paddle,
    ROW_PALETTE,
};
pub use tick::{TickInput, TickReport, tick};
