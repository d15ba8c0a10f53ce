//! Board configuration
//!
//! Canvas, paddle, ball and brick-grid geometry. Passed explicitly into the
//! simulation rather than captured from the host canvas, and persisted as
//! JSON so a host can tweak the board without rebuilding.

use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Board geometry for one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Canvas ===
    pub canvas_width: f32,
    pub canvas_height: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Distance moved per move command
    pub paddle_speed: f32,
    /// Gap between paddle bottom and canvas bottom
    pub paddle_bottom_gap: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Spawn height above the canvas bottom
    pub ball_start_offset: f32,
    /// Launch velocity in pixels per tick
    pub ball_velocity: Vec2,

    // === Bricks ===
    pub brick_rows: usize,
    pub brick_columns: usize,
    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_padding: f32,
    pub brick_offset_top: f32,
    pub brick_offset_left: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_bottom_gap: PADDLE_BOTTOM_GAP,

            ball_radius: BALL_RADIUS,
            ball_start_offset: BALL_START_OFFSET,
            ball_velocity: Vec2::new(BALL_START_DX, BALL_START_DY),

            brick_rows: BRICK_ROWS,
            brick_columns: BRICK_COLUMNS,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_padding: BRICK_PADDING,
            brick_offset_top: BRICK_OFFSET_TOP,
            brick_offset_left: BRICK_OFFSET_LEFT,
        }
    }
}

impl GameConfig {
    /// Total bricks on the board (the winning score), `None` on overflow
    pub fn brick_count(&self) -> Option<usize> {
        self.brick_rows.checked_mul(self.brick_columns)
    }

    /// Paddle x at the start of a run (centered)
    pub fn paddle_start_x(&self) -> f32 {
        (self.canvas_width - self.paddle_width) / 2.0
    }

    /// Fixed paddle y (top edge)
    pub fn paddle_y(&self) -> f32 {
        self.canvas_height - self.paddle_height - self.paddle_bottom_gap
    }

    /// Ball spawn point (center-bottom)
    pub fn ball_start(&self) -> Vec2 {
        Vec2::new(
            self.canvas_width / 2.0,
            self.canvas_height - self.ball_start_offset,
        )
    }

    /// Top-left corner of the brick at (column, row)
    pub fn brick_origin(&self, column: usize, row: usize) -> Vec2 {
        Vec2::new(
            column as f32 * (self.brick_width + self.brick_padding) + self.brick_offset_left,
            row as f32 * (self.brick_height + self.brick_padding) + self.brick_offset_top,
        )
    }

    /// Reject geometry the simulation cannot run on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_radius", self.ball_radius),
            ("brick_width", self.brick_width),
            ("brick_height", self.brick_height),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        if self.paddle_width > self.canvas_width {
            return Err(ConfigError::Invalid(format!(
                "paddle_width {} exceeds canvas_width {}",
                self.paddle_width, self.canvas_width
            )));
        }
        if self.paddle_bottom_gap < 0.0 || !self.paddle_bottom_gap.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "paddle_bottom_gap must be non-negative, got {}",
                self.paddle_bottom_gap
            )));
        }
        // Spawning within a radius of the floor loses the ball on the first tick
        if !(self.ball_start_offset.is_finite() && self.ball_start_offset > self.ball_radius) {
            return Err(ConfigError::Invalid(format!(
                "ball_start_offset {} must exceed ball_radius {}",
                self.ball_start_offset, self.ball_radius
            )));
        }
        if self.brick_padding < 0.0 || !self.brick_padding.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "brick_padding must be non-negative, got {}",
                self.brick_padding
            )));
        }

        // Scores are u32, so the winning score must fit
        let count = self
            .brick_count()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| ConfigError::Invalid("brick grid too large".to_string()))?;
        if count == 0 {
            return Err(ConfigError::Invalid("brick grid is empty".to_string()));
        }
        if self.ball_velocity.length_squared() == 0.0 || !self.ball_velocity.is_finite() {
            return Err(ConfigError::Invalid(
                "ball_velocity must be non-zero".to_string(),
            ));
        }

        // Far corner of the last brick must stay on the canvas and above the paddle
        let far = self.brick_origin(self.brick_columns - 1, self.brick_rows - 1)
            + Vec2::new(self.brick_width, self.brick_height);
        if far.x > self.canvas_width || far.y >= self.paddle_y() {
            return Err(ConfigError::Invalid(format!(
                "brick grid extends to ({}, {}) which does not fit above the paddle",
                far.x, far.y
            )));
        }

        Ok(())
    }

    /// Load and validate a config from a JSON file
    ///
    /// Missing fields fall back to their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&json).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save the config as pretty-printed JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Config saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.brick_count(), Some(40));
        assert_eq!(config.paddle_start_x(), 350.0);
        assert_eq!(config.paddle_y(), 580.0);
        assert_eq!(config.ball_start(), Vec2::new(400.0, 570.0));
    }

    #[test]
    fn test_brick_origin_layout() {
        let config = GameConfig::default();
        assert_eq!(config.brick_origin(0, 0), Vec2::new(30.0, 30.0));
        assert_eq!(config.brick_origin(1, 0), Vec2::new(115.0, 30.0));
        assert_eq!(config.brick_origin(7, 4), Vec2::new(625.0, 150.0));
    }

    #[test]
    fn test_validate_rejects_bad_geometry() {
        let wide_paddle = GameConfig {
            paddle_width: 900.0,
            ..Default::default()
        };
        assert!(matches!(wide_paddle.validate(), Err(ConfigError::Invalid(_))));

        let no_bricks = GameConfig {
            brick_rows: 0,
            ..Default::default()
        };
        assert!(no_bricks.validate().is_err());

        let too_many_columns = GameConfig {
            brick_columns: 12,
            ..Default::default()
        };
        assert!(too_many_columns.validate().is_err());

        let negative = GameConfig {
            ball_radius: -1.0,
            ..Default::default()
        };
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_spawn_and_gap_out_of_range() {
        let below_canvas = GameConfig {
            paddle_bottom_gap: -20.0,
            ..Default::default()
        };
        assert!(matches!(below_canvas.validate(), Err(ConfigError::Invalid(_))));

        let spawn_in_floor = GameConfig {
            ball_start_offset: 3.0,
            ..Default::default()
        };
        assert!(matches!(spawn_in_floor.validate(), Err(ConfigError::Invalid(_))));

        let overlapping = GameConfig {
            brick_padding: -10.0,
            ..Default::default()
        };
        assert!(overlapping.validate().is_err());
    }

    #[test]
    fn test_load_rejects_oversized_grid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("huge.json");
        let json = format!(r#"{{ "brick_rows": {}, "brick_columns": 4 }}"#, usize::MAX / 2);
        std::fs::write(&path, json).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let config: GameConfig = serde_json::from_str(&raw).unwrap();
        assert_eq!(config.brick_count(), None);
        assert!(matches!(
            GameConfig::load(&path),
            Err(ConfigError::Invalid(msg)) if msg.contains("too large")
        ));
    }

    #[test]
    fn test_save_then_load_with_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = GameConfig {
            paddle_speed: 9.0,
            ..Default::default()
        };
        config.save(&path).unwrap();
        assert_eq!(GameConfig::load(&path).unwrap(), config);

        // Missing fields take defaults
        std::fs::write(&path, r#"{ "brick_rows": 3 }"#).unwrap();
        let partial = GameConfig::load(&path).unwrap();
        assert_eq!(partial.brick_rows, 3);
        assert_eq!(partial.brick_columns, BRICK_COLUMNS);
    }

    #[test]
    fn test_load_reports_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(matches!(
            GameConfig::load(&missing),
            Err(ConfigError::Io { .. })
        ));

        let garbage = dir.path().join("garbage.json");
        std::fs::write(&garbage, "not json").unwrap();
        assert!(matches!(
            GameConfig::load(&garbage),
            Err(ConfigError::Json { .. })
        ));
    }
}
