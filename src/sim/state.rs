//! Game entities and per-run session state
//!
//! Everything a Playing run owns lives in `GameSession`. Entities are plain
//! values; board dimensions come from `GameConfig`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::config::GameConfig;

/// Horizontal paddle movement command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Parse a direction name or arrow-key name
    ///
    /// Anything unrecognized yields `None`, which callers treat as a no-op.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "left" | "arrowleft" => Some(Direction::Left),
            "right" | "arrowright" => Some(Direction::Right),
            _ => None,
        }
    }

    #[inline]
    fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// The player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
    /// Fixed after construction
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
}

impl Paddle {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: config.paddle_start_x(),
            y: config.paddle_y(),
            width: config.paddle_width,
            height: config.paddle_height,
            speed: config.paddle_speed,
        }
    }

    /// Shift by one step of `speed`, then clamp to `[0, canvas_width - width]`
    pub fn move_in(&mut self, direction: Direction, canvas_width: f32) {
        self.x += direction.sign() * self.speed;
        self.x = self.x.clamp(0.0, (canvas_width - self.width).max(0.0));
    }

    /// Paddle bounds for collision checks
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Pixels per tick
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: config.ball_start(),
            vel: config.ball_velocity,
            radius: config.ball_radius,
        }
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// Brick lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BrickStatus {
    #[default]
    Alive,
    Destroyed,
}

/// Row colors (0xRRGGBB), top row first, cycling for taller grids
pub const ROW_PALETTE: [u32; 5] = [0xE53935, 0xFB8C00, 0xFDD835, 0x43A047, 0x0095DD];

/// A destructible brick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub column: usize,
    pub row: usize,
    pub rect: Rect,
    pub status: BrickStatus,
    /// Cosmetic only
    pub color: u32,
}

impl Brick {
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.status == BrickStatus::Alive
    }

    /// Mark destroyed; returns false if it already was
    pub fn destroy(&mut self) -> bool {
        if self.is_alive() {
            self.status = BrickStatus::Destroyed;
            true
        } else {
            false
        }
    }
}

/// Fixed rows x columns brick layout, stored column-major
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrickGrid {
    columns: Vec<Vec<Brick>>,
    rows: usize,
}

impl BrickGrid {
    pub fn new(config: &GameConfig) -> Self {
        let columns = (0..config.brick_columns)
            .map(|column| {
                (0..config.brick_rows)
                    .map(|row| {
                        let origin = config.brick_origin(column, row);
                        Brick {
                            column,
                            row,
                            rect: Rect::new(
                                origin.x,
                                origin.y,
                                config.brick_width,
                                config.brick_height,
                            ),
                            status: BrickStatus::Alive,
                            color: ROW_PALETTE[row % ROW_PALETTE.len()],
                        }
                    })
                    .collect()
            })
            .collect();

        Self {
            columns,
            rows: config.brick_rows,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Total bricks, alive or not
    pub fn len(&self) -> usize {
        self.rows * self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, column: usize, row: usize) -> Option<&Brick> {
        self.columns.get(column).and_then(|c| c.get(row))
    }

    pub fn get_mut(&mut self, column: usize, row: usize) -> Option<&mut Brick> {
        self.columns.get_mut(column).and_then(|c| c.get_mut(row))
    }

    /// All bricks, columns outer and rows inner
    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.columns.iter().flatten()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Brick> {
        self.columns.iter_mut().flatten()
    }

    pub fn alive_count(&self) -> usize {
        self.iter().filter(|b| b.is_alive()).count()
    }

    /// True once every brick has been destroyed
    pub fn is_cleared(&self) -> bool {
        self.iter().all(|b| !b.is_alive())
    }
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Every brick destroyed
    Won,
    /// Ball fell past the paddle
    Lost,
}

/// Things that happened during a tick, in order (for render/audio hosts)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball reflected off a side wall
    WallBounce,
    /// Ball reflected off the top wall
    CeilingBounce,
    /// Ball reflected off the paddle
    PaddleBounce,
    /// Brick destroyed at (column, row)
    BrickDestroyed { column: usize, row: usize },
    /// Ball missed the paddle
    BallLost,
    /// Last brick destroyed
    BoardCleared,
}

/// State for one Playing run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    pub paddle: Paddle,
    pub ball: Ball,
    pub bricks: BrickGrid,
    /// One point per destroyed brick
    pub score: u32,
    /// Simulation tick counter
    pub ticks: u64,
    /// Set once the run ends; further ticks are ignored
    pub outcome: Option<Outcome>,
}

impl GameSession {
    /// Fresh paddle, ball and full brick grid with a zero score
    pub fn new(config: &GameConfig) -> Self {
        Self {
            paddle: Paddle::new(config),
            ball: Ball::new(config),
            bricks: BrickGrid::new(config),
            score: 0,
            ticks: 0,
            outcome: None,
        }
    }

    /// Score needed to win
    pub fn winning_score(&self) -> u32 {
        self.bricks.len() as u32
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }
}
