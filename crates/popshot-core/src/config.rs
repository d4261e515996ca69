//! Simulation configuration.
//!
//! Every section deserializes with defaults, so a partial JSON document
//! only needs the fields it overrides.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::HandSelection;
use crate::render::Color;
use crate::types::Viewport;

/// Top-level configuration for one simulation instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed and same input = same run.
    pub seed: u64,
    pub viewport: Viewport,
    pub gesture: GestureConfig,
    pub target: TargetConfig,
    pub projectile: ProjectileConfig,
    pub limits: SpawnLimits,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            viewport: Viewport::default(),
            gesture: GestureConfig::default(),
            target: TargetConfig::default(),
            projectile: ProjectileConfig::default(),
            limits: SpawnLimits::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Normalized fingertip distance below which a pinch registers.
    pub pinch_threshold: f64,
    pub hand_selection: HandSelection,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            pinch_threshold: DEFAULT_PINCH_THRESHOLD,
            hand_selection: HandSelection::First,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    pub radius: f64,
    /// Pixels per tick, upward.
    pub speed: f64,
    pub color: Color,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            radius: TARGET_RADIUS,
            speed: TARGET_SPEED,
            color: Color::RED,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileConfig {
    /// Pixels per tick, upward.
    pub speed: f64,
    pub width: f64,
    pub height: f64,
    pub color: Color,
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self {
            speed: PROJECTILE_SPEED,
            width: PROJECTILE_WIDTH,
            height: PROJECTILE_HEIGHT,
            color: Color::BLUE,
        }
    }
}

/// Spawn-rate hardening. Neither knob changes the per-frame contract:
/// with no cap hit and `cooldown_frames == 0`, a gesture held for N frames
/// spawns N entities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnLimits {
    /// `None` = unbounded.
    pub max_targets: Option<usize>,
    /// `None` = unbounded.
    pub max_projectiles: Option<usize>,
    /// Minimum frames between two spawns of the same kind. 0 disables.
    pub cooldown_frames: u32,
}

impl Default for SpawnLimits {
    fn default() -> Self {
        Self {
            max_targets: Some(DEFAULT_MAX_TARGETS),
            max_projectiles: Some(DEFAULT_MAX_PROJECTILES),
            cooldown_frames: 0,
        }
    }
}

/// Rejected configuration value.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidViewport { width: f64, height: f64 },
    InvalidThreshold(f64),
    /// A size or speed that must be finite and strictly positive.
    NonPositive { field: &'static str, value: f64 },
    ZeroCap { field: &'static str },
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidViewport { width, height } => {
                write!(f, "invalid viewport {width}x{height}")
            }
            ConfigError::InvalidThreshold(value) => {
                write!(f, "pinch threshold {value} outside (0, 1]")
            }
            ConfigError::NonPositive { field, value } => {
                write!(f, "{field} must be finite and positive, got {value}")
            }
            ConfigError::ZeroCap { field } => write!(f, "{field} must be at least 1"),
            ConfigError::Parse(message) => write!(f, "config parse error: {message}"),
        }
    }
}

impl std::error::Error for ConfigError {}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

impl SimConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let Viewport { width, height } = self.viewport;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidViewport { width, height });
        }

        let threshold = self.gesture.pinch_threshold;
        if !(threshold.is_finite() && threshold > 0.0 && threshold <= 1.0) {
            return Err(ConfigError::InvalidThreshold(threshold));
        }

        positive("target.radius", self.target.radius)?;
        positive("target.speed", self.target.speed)?;
        positive("projectile.speed", self.projectile.speed)?;
        positive("projectile.width", self.projectile.width)?;
        positive("projectile.height", self.projectile.height)?;

        if self.limits.max_targets == Some(0) {
            return Err(ConfigError::ZeroCap {
                field: "limits.max_targets",
            });
        }
        if self.limits.max_projectiles == Some(0) {
            return Err(ConfigError::ZeroCap {
                field: "limits.max_projectiles",
            });
        }
        Ok(())
    }
}
