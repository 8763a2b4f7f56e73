//! Game configuration
//!
//! Loaded from JSON by the host; every field is optional and falls back to
//! the defaults in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating a [`GameConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

/// Field dimensions and tuning knobs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub field_width: i32,
    pub field_height: i32,
    /// Paddle movement per tick while a direction is held
    pub paddle_step: i32,
    /// Per-axis ball speed at the start of a session
    pub ball_initial_speed: i32,
    pub brick_rows: usize,
    pub brick_cols: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            paddle_step: PADDLE_STEP,
            ball_initial_speed: BALL_START_SPEED,
            brick_rows: BRICK_ROWS,
            brick_cols: BRICK_COLS,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Check that paddle, ball and bricks fit the field and that every
    /// per-tick step stays small enough for integer positions
    pub fn validate(&self) -> Result<(), ConfigError> {
        let min_width = PADDLE_WIDTH.max(BALL_DIAMETER);
        if !(min_width..=MAX_FIELD_DIM).contains(&self.field_width) {
            return Err(invalid(
                "field_width",
                format!(
                    "must be between {min_width} and {MAX_FIELD_DIM}, got {}",
                    self.field_width
                ),
            ));
        }
        if !(PADDLE_BOTTOM_OFFSET..=MAX_FIELD_DIM).contains(&self.field_height) {
            return Err(invalid(
                "field_height",
                format!(
                    "must be between {PADDLE_BOTTOM_OFFSET} and {MAX_FIELD_DIM}, got {}",
                    self.field_height
                ),
            ));
        }
        let max_step = self.paddle_max_x().max(1);
        if !(1..=max_step).contains(&self.paddle_step) {
            return Err(invalid(
                "paddle_step",
                format!("must be between 1 and {max_step}, got {}", self.paddle_step),
            ));
        }
        // Ball moves less than one diameter per tick
        if !(1..BALL_DIAMETER).contains(&self.ball_initial_speed) {
            return Err(invalid(
                "ball_initial_speed",
                format!(
                    "must be between 1 and {}, got {}",
                    BALL_DIAMETER - 1,
                    self.ball_initial_speed
                ),
            ));
        }
        if self.brick_rows == 0 {
            return Err(invalid("brick_rows", "must be at least 1".to_string()));
        }
        if self.brick_cols == 0 {
            return Err(invalid("brick_cols", "must be at least 1".to_string()));
        }

        let grid_right = grid_extent(self.brick_cols, BRICK_PITCH_X, BRICK_OFFSET_X, BRICK_WIDTH);
        if grid_right > i64::from(self.field_width) {
            return Err(invalid(
                "brick_cols",
                format!(
                    "{} columns end at x={grid_right}, past the field width {}",
                    self.brick_cols, self.field_width
                ),
            ));
        }
        let paddle_top = self.field_height - PADDLE_BOTTOM_OFFSET;
        let grid_bottom = grid_extent(self.brick_rows, BRICK_PITCH_Y, BRICK_OFFSET_Y, BRICK_HEIGHT);
        if grid_bottom > i64::from(paddle_top) {
            return Err(invalid(
                "brick_rows",
                format!(
                    "{} rows end at y={grid_bottom}, below the paddle row at {paddle_top}",
                    self.brick_rows
                ),
            ));
        }
        Ok(())
    }

    /// Rightmost x the paddle's left edge may reach
    #[inline]
    pub fn paddle_max_x(&self) -> i32 {
        self.field_width - PADDLE_WIDTH
    }

    /// Rightmost x the ball's left edge may reach before it bounces
    #[inline]
    pub fn ball_max_x(&self) -> i32 {
        self.field_width - BALL_DIAMETER
    }
}

/// Far edge of `count` bricks laid out at `pitch` after `offset`
fn grid_extent(count: usize, pitch: i32, offset: i32, size: i32) -> i64 {
    let count = i64::try_from(count).unwrap_or(i64::MAX);
    (count - 1)
        .saturating_mul(i64::from(pitch))
        .saturating_add(i64::from(offset + size))
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.field_width, 800);
        assert_eq!(config.field_height, 600);
        assert_eq!(config.paddle_max_x(), 700);
        assert_eq!(config.ball_max_x(), 780);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json(r#"{ "paddle_step": 7, "brick_rows": 3 }"#).unwrap();
        assert_eq!(config.paddle_step, 7);
        assert_eq!(config.brick_rows, 3);
        assert_eq!(config.brick_cols, BRICK_COLS);
        assert_eq!(config.field_width, FIELD_WIDTH);
    }

    #[test]
    fn test_malformed_json() {
        let err = GameConfig::from_json("{ field_width: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_zero_speed() {
        let err = GameConfig::from_json(r#"{ "ball_initial_speed": 0 }"#).unwrap_err();
        match err {
            ConfigError::Invalid { field, .. } => assert_eq!(field, "ball_initial_speed"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_field_narrower_than_paddle() {
        let config = GameConfig {
            field_width: 90,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                field: "field_width",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_empty_grid() {
        let config = GameConfig {
            brick_cols: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_oversized_paddle_step() {
        let config = GameConfig {
            paddle_step: i32::MAX,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                field: "paddle_step",
                ..
            })
        ));

        let widest = GameConfig {
            paddle_step: 700,
            ..Default::default()
        };
        assert!(widest.validate().is_ok());
    }

    #[test]
    fn test_ball_speed_below_diameter() {
        for speed in [BALL_DIAMETER, i32::MAX] {
            let config = GameConfig {
                ball_initial_speed: speed,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::Invalid {
                    field: "ball_initial_speed",
                    ..
                })
            ));
        }

        let fastest = GameConfig {
            ball_initial_speed: BALL_DIAMETER - 1,
            ..Default::default()
        };
        assert!(fastest.validate().is_ok());
    }

    #[test]
    fn test_grid_must_fit_field_width() {
        // 8 columns end exactly at x=800
        let full = GameConfig {
            brick_cols: 8,
            ..Default::default()
        };
        assert!(full.validate().is_ok());

        for cols in [9, usize::MAX] {
            let config = GameConfig {
                brick_cols: cols,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::Invalid {
                    field: "brick_cols",
                    ..
                })
            ));
        }
    }

    #[test]
    fn test_grid_must_stay_above_paddle() {
        // Paddle top at 550: rows end at 40 + 30 * rows
        let deepest = GameConfig {
            brick_rows: 17,
            ..Default::default()
        };
        assert!(deepest.validate().is_ok());

        for rows in [18, usize::MAX] {
            let config = GameConfig {
                brick_rows: rows,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::Invalid {
                    field: "brick_rows",
                    ..
                })
            ));
        }
    }

    #[test]
    fn test_rejects_huge_field() {
        let config = GameConfig {
            field_height: i32::MAX,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                field: "field_height",
                ..
            })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = GameConfig::load("/nonexistent/brick-breaker.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
