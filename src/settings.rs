//! Playfield configuration
//!
//! Defaults come from [`crate::consts`]; a JSON file may override any subset
//! of fields. A config is validated once and then shared read-only.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// What happens when a ball leaves the horizontal bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BallExitPolicy {
    /// Remove the ball; the run ends once no balls remain
    #[default]
    Despawn,
    /// End the run as soon as any ball escapes
    Terminate,
}

impl BallExitPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            BallExitPolicy::Despawn => "despawn",
            BallExitPolicy::Terminate => "terminate",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "despawn" => Some(BallExitPolicy::Despawn),
            "terminate" => Some(BallExitPolicy::Terminate),
            _ => None,
        }
    }
}

/// Which paddles exist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaddleLayout {
    /// Left paddle only; the right edge is a solid wall
    Single,
    /// Left and right paddles
    #[default]
    Dual,
}

/// Immutable simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === Playfield ===
    pub window_width: f32,
    pub window_height: f32,
    /// Wall thickness, ball size and ball-ball contact distance
    pub wall_thickness: f32,

    // === Paddles ===
    pub paddle_layout: PaddleLayout,
    pub paddle_height: f32,
    /// Units per second
    pub paddle_speed: f32,
    pub paddle_inset: f32,
    /// Capture band, measured from the paddle's side of the window
    pub paddle_band_near: f32,
    pub paddle_band_far: f32,

    // === Balls ===
    pub ball_count: u32,
    pub ball_collisions: bool,
    pub ball_exit_policy: BallExitPolicy,
    pub ball_max_speed_x: f32,
    pub ball_min_speed_x: f32,
    pub ball_max_speed_y: f32,

    // === Timing ===
    pub target_frame_time_ms: u64,
    pub max_delta_time: f32,

    /// Spawn seed; `None` lets the caller pick one
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            wall_thickness: WALL_THICKNESS,

            paddle_layout: PaddleLayout::Dual,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_inset: PADDLE_INSET,
            paddle_band_near: PADDLE_BAND_NEAR,
            paddle_band_far: PADDLE_BAND_FAR,

            ball_count: BALL_COUNT,
            ball_collisions: true,
            ball_exit_policy: BallExitPolicy::Despawn,
            ball_max_speed_x: BALL_MAX_SPEED_X,
            ball_min_speed_x: BALL_MIN_SPEED_X,
            ball_max_speed_y: BALL_MAX_SPEED_Y,

            target_frame_time_ms: TARGET_FRAME_TIME_MS,
            max_delta_time: MAX_DELTA_TIME,

            seed: None,
        }
    }
}

/// Configuration loading/validation failure
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid { field: &'static str, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "failed to read config: {e}"),
            ConfigError::Parse(e) => write!(f, "failed to parse config: {e}"),
            ConfigError::Invalid { field, reason } => write!(f, "invalid `{field}`: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

impl SimConfig {
    /// Parse and validate a JSON config; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("window_width", self.window_width),
            ("window_height", self.window_height),
            ("wall_thickness", self.wall_thickness),
            ("paddle_height", self.paddle_height),
            ("max_delta_time", self.max_delta_time),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid(field, format!("must be finite and > 0, got {value}")));
            }
        }

        let non_negative = [
            ("paddle_speed", self.paddle_speed),
            ("paddle_inset", self.paddle_inset),
            ("paddle_band_near", self.paddle_band_near),
            ("paddle_band_far", self.paddle_band_far),
            ("ball_max_speed_x", self.ball_max_speed_x),
            ("ball_min_speed_x", self.ball_min_speed_x),
            ("ball_max_speed_y", self.ball_max_speed_y),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(field, format!("must be finite and >= 0, got {value}")));
            }
        }

        if self.paddle_height + 2.0 * self.wall_thickness > self.window_height {
            return Err(invalid(
                "paddle_height",
                "paddle plus both walls does not fit in the window",
            ));
        }
        if self.paddle_band_near >= self.paddle_band_far {
            return Err(invalid(
                "paddle_band_far",
                "capture band must satisfy near < far",
            ));
        }
        if self.paddle_band_far >= self.window_width / 2.0 {
            return Err(invalid(
                "paddle_band_far",
                "capture band must lie within half the window width",
            ));
        }
        if self.ball_min_speed_x > self.ball_max_speed_x {
            return Err(invalid(
                "ball_min_speed_x",
                "minimum horizontal speed exceeds the maximum",
            ));
        }
        if self.ball_count == 0 {
            return Err(invalid("ball_count", "at least one ball is required"));
        }
        Ok(())
    }

    /// Paddle centre y range: `[h/2 + thickness, height - h/2 - thickness]`
    #[inline]
    pub fn paddle_y_bounds(&self) -> (f32, f32) {
        let half = self.paddle_height / 2.0;
        (
            half + self.wall_thickness,
            self.window_height - half - self.wall_thickness,
        )
    }

    /// Clamp paddle y to playfield bounds
    #[inline]
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        let (min, max) = self.paddle_y_bounds();
        y.clamp(min, max)
    }

    #[inline]
    pub fn target_frame_time(&self) -> Duration {
        Duration::from_millis(self.target_frame_time_ms)
    }

    /// Minimum centre distance between two balls
    #[inline]
    pub fn ball_contact_distance(&self) -> f32 {
        self.wall_thickness
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SimConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.paddle_y_bounds(), (65.0, 703.0));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config =
            SimConfig::from_json(r#"{ "ball_count": 3, "ball_exit_policy": "terminate" }"#)
                .unwrap();
        assert_eq!(config.ball_count, 3);
        assert_eq!(config.ball_exit_policy, BallExitPolicy::Terminate);
        assert_eq!(config.window_width, WINDOW_WIDTH);
        assert_eq!(config.paddle_layout, PaddleLayout::Dual);
    }

    #[test]
    fn test_invalid_values_name_the_field() {
        let err = SimConfig::from_json(r#"{ "ball_count": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "ball_count",
                ..
            }
        ));

        let err = SimConfig::from_json(r#"{ "paddle_height": 800.0 }"#).unwrap_err();
        assert!(err.to_string().contains("paddle_height"));

        let err =
            SimConfig::from_json(r#"{ "paddle_band_near": 30.0, "paddle_band_far": 25.0 }"#)
                .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "paddle_band_far",
                ..
            }
        ));
    }

    #[test]
    fn test_malformed_json() {
        let err = SimConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_clamp_paddle_y() {
        let config = SimConfig::default();
        assert_eq!(config.clamp_paddle_y(0.0), 65.0);
        assert_eq!(config.clamp_paddle_y(10_000.0), 703.0);
        assert_eq!(config.clamp_paddle_y(384.0), 384.0);
    }

    #[test]
    fn test_exit_policy_from_str() {
        assert_eq!(
            BallExitPolicy::from_str("Terminate"),
            Some(BallExitPolicy::Terminate)
        );
        assert_eq!(BallExitPolicy::from_str("despawn").map(|p| p.as_str()), Some("despawn"));
        assert_eq!(BallExitPolicy::from_str("bounce"), None);
    }
}
