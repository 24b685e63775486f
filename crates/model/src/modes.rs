//! Selectors for the configurable speed response curves.
//!
//! These are plain configuration values. Each enum carries an explicit
//! `Unknown` variant that unrecognized configuration strings deserialize to,
//! so consumers can warn and fall back instead of failing to load.

use serde::{Deserialize, Serialize};

/// How rotation speed grows with the distance of the target to the destination center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationMode {
    /// No rotation inside the variance, linear ramp outside.
    Stop,
    /// Speed grows linearly with the distance.
    Linear,
    /// Speed grows with the square of the distance.
    Quadratic,
    /// Quadratic inside the variance, linear outside. Both pieces yield
    /// the same speed at the variance.
    QuadraticToLinear,
    #[serde(other)]
    Unknown,
}

/// When and how fast to zoom in once the target is smaller than desired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoomInMode {
    Slow,
    Fast,
    /// Zoom in slowly, but only while the target is horizontally and vertically aligned.
    SlowWhenAligned,
    /// Zoom in fast, but only while the target is horizontally and vertically aligned.
    FastWhenAligned,
    /// Zoom in fast when aligned, slowly when the target is mostly aligned
    /// (its distance to the frame edges is at least 1.5 times its size),
    /// otherwise not at all.
    Gradually,
    #[serde(other)]
    Unknown,
}

/// Which tracking strategy family to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Linear ramp, fast zoom.
    #[default]
    Simple,
    /// Selectable rotation and zoom-in response.
    Configurable,
}

impl std::fmt::Display for RotationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RotationMode::Stop => "stop",
            RotationMode::Linear => "linear",
            RotationMode::Quadratic => "quadratic",
            RotationMode::QuadraticToLinear => "quadratic_to_linear",
            RotationMode::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

impl std::fmt::Display for ZoomInMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ZoomInMode::Slow => "slow",
            ZoomInMode::Fast => "fast",
            ZoomInMode::SlowWhenAligned => "slow_when_aligned",
            ZoomInMode::FastWhenAligned => "fast_when_aligned",
            ZoomInMode::Gradually => "gradually",
            ZoomInMode::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "simple" => Ok(StrategyKind::Simple),
            "configurable" => Ok(StrategyKind::Configurable),
            other => Err(format!("unknown strategy '{other}' (expected simple|configurable)")),
        }
    }
}
