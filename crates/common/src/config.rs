//! Application configuration.

use std::path::{Path, PathBuf};

use cameraman_model::modes::{RotationMode, StrategyKind, ZoomInMode};
use serde::{Deserialize, Serialize};

use crate::error::{CameramanError, CameramanResult};

/// Global application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Tracking strategy parameters.
    pub tracking: TrackingSettings,

    /// Actuator parameters.
    pub controller: ControllerSettings,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Parameters of the destination zone and the tracking strategies.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackingSettings {
    /// Live view width in pixels.
    pub frame_width: f64,

    /// Live view height in pixels.
    pub frame_height: f64,

    /// Dead-band radius in pixels up to which no pan, tilt or zoom occurs.
    pub variance: f64,

    /// Speed limit of the tracking strategy.
    pub max_allowed_speed: f64,

    /// Speed limit of the align strategy.
    pub align_max_allowed_speed: f64,

    /// Seconds over which speeds decay to zero once the target is lost.
    pub slow_down_time_secs: f64,

    /// Pan speed used while searching for a target.
    pub search_speed: f64,

    /// Which strategy family to build.
    pub strategy: StrategyKind,

    /// Response curve of configurable strategies.
    pub rotation_mode: RotationMode,

    /// Zoom-in decision of configurable strategies.
    pub zoom_in_mode: ZoomInMode,
}

/// Acceleration limits of the smooth camera controller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerSettings {
    /// How fast the gimbal may accelerate in pan direction (speed units per second).
    pub rotational_acceleration_per_second: f64,

    /// How fast the gimbal may accelerate in tilt direction (speed units per second).
    pub tilting_acceleration_per_second: f64,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "cameraman_tracking=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path.
    pub file: Option<PathBuf>,
}

impl Default for TrackingSettings {
    fn default() -> Self {
        Self {
            frame_width: 640.0,
            frame_height: 480.0,
            variance: 80.0,
            max_allowed_speed: 500.0,
            align_max_allowed_speed: 200.0,
            slow_down_time_secs: 1.0,
            search_speed: 200.0,
            strategy: StrategyKind::Simple,
            rotation_mode: RotationMode::QuadraticToLinear,
            zoom_in_mode: ZoomInMode::SlowWhenAligned,
        }
    }
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            rotational_acceleration_per_second: 400.0,
            tilting_acceleration_per_second: 400.0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    ///
    /// The warning for an unreadable file is only visible if a tracing
    /// subscriber is already installed. Callers that set up logging from
    /// the loaded config should use [`AppConfig::load_or_default`] instead.
    pub fn load() -> Self {
        let config_path = config_file_path();
        Self::load_or_default(&config_path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config at {:?}: {}", config_path, e);
            Self::default()
        })
    }

    /// Load config from `path`. A missing file yields the defaults, an
    /// unreadable or malformed one is an error.
    pub fn load_or_default(path: &Path) -> CameramanResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(path)
    }

    /// Standard config file location (`$XDG_CONFIG_HOME/cameraman/config.json`).
    pub fn default_path() -> PathBuf {
        config_file_path()
    }

    /// Load config from an explicit path.
    pub fn load_from(path: &Path) -> CameramanResult<Self> {
        if !path.exists() {
            return Err(CameramanError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save config to the standard location.
    pub fn save(&self) -> Result<(), std::io::Error> {
        let config_path = config_file_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(config_path, json)
    }

    /// Check the geometric preconditions the tracking core relies on.
    pub fn validate(&self) -> CameramanResult<()> {
        let t = &self.tracking;
        if t.frame_width <= 0.0 || t.frame_height <= 0.0 {
            return Err(CameramanError::config(format!(
                "frame size must be positive, got {}x{}",
                t.frame_width, t.frame_height
            )));
        }
        if t.variance < 0.0 {
            return Err(CameramanError::config(format!(
                "variance must not be negative, got {}",
                t.variance
            )));
        }
        if t.slow_down_time_secs <= 0.0 {
            return Err(CameramanError::config(format!(
                "slow down time must be positive, got {}",
                t.slow_down_time_secs
            )));
        }
        if t.max_allowed_speed < 0.0 || t.align_max_allowed_speed < 0.0 {
            return Err(CameramanError::config("speed limits must not be negative"));
        }
        Ok(())
    }
}

/// Standard config file location.
fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("cameraman").join("config.json")
}
