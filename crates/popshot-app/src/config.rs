//! Driver configuration: simulation config plus loop cadence.
//!
//! Read from the JSON file named by `POPSHOT_CONFIG` (defaults when
//! unset). `POPSHOT_FRAMES` overrides `run_frames`.

use std::path::Path;
use std::{env, fs};

use serde::{Deserialize, Serialize};

use popshot_core::config::SimConfig;
use popshot_core::constants::{DEFAULT_FRAME_RATE, DEFAULT_GESTURE_RATE};

use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub sim: SimConfig,
    /// Render/orchestration rate (Hz).
    pub frame_rate: u32,
    /// Rate of the scripted hand source (Hz).
    pub gesture_rate: u32,
    /// Stop after this many frames. 0 runs until the hand script ends.
    pub run_frames: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sim: SimConfig::default(),
            frame_rate: DEFAULT_FRAME_RATE,
            gesture_rate: DEFAULT_GESTURE_RATE,
            run_frames: 600,
        }
    }
}

impl AppConfig {
    pub fn from_json_str(json: &str) -> Result<Self, AppError> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.sim.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let json = fs::read_to_string(path).map_err(|source| AppError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Load from the environment.
    pub fn load() -> Result<Self, AppError> {
        let mut config = match env::var("POPSHOT_CONFIG") {
            Ok(path) => Self::from_path(Path::new(&path))?,
            Err(_) => Self::default(),
        };
        if let Some(frames) = env::var("POPSHOT_FRAMES")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
        {
            config.run_frames = frames;
        }
        Ok(config)
    }
}
