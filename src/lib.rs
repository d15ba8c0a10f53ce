//! Brick Breaker - A single-screen paddle and brick arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, physics, collisions, frame tick)
//! - `game`: Menu / Playing / GameOver state machine
//! - `highscores`: Score service interface and local leaderboard stores
//! - `config`: Data-driven board geometry

pub mod config;
pub mod error;
pub mod game;
pub mod highscores;
pub mod sim;

pub use config::GameConfig;
pub use error::{ConfigError, ScoreServiceError};
pub use game::{FinalScore, Game, GamePhase, Snapshot, SubmitOutcome};
pub use highscores::{FileScoreStore, HighScoreEntry, HighScores, ScoreService};

/// Default board configuration constants
pub mod consts {
    /// Canvas dimensions (pixels)
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Horizontal distance covered by one move command
    pub const PADDLE_SPEED: f32 = 7.0;
    /// Gap between the paddle's bottom edge and the canvas bottom
    pub const PADDLE_BOTTOM_GAP: f32 = 10.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 5.0;
    /// Ball spawn height above the canvas bottom
    pub const BALL_START_OFFSET: f32 = 30.0;
    /// Launch velocity (pixels per tick, up and to the right)
    pub const BALL_START_DX: f32 = 2.0;
    pub const BALL_START_DY: f32 = -2.0;

    /// Brick grid defaults
    pub const BRICK_ROWS: usize = 5;
    pub const BRICK_COLUMNS: usize = 8;
    pub const BRICK_WIDTH: f32 = 75.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_PADDING: f32 = 10.0;
    pub const BRICK_OFFSET_TOP: f32 = 30.0;
    pub const BRICK_OFFSET_LEFT: f32 = 30.0;

    /// Maximum paddle deflection from vertical (60°)
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_3;
    /// Minimum vertical share of speed after a paddle bounce
    pub const MIN_VERTICAL_FRACTION: f32 = 0.1;
}
