//! Error types shared across cameraman crates.

use std::path::PathBuf;

/// Top-level error type for cameraman operations.
///
/// Tracking decisions themselves are total and never produce one of these;
/// they come from the actuator side, configuration, and input parsing.
#[derive(Debug, thiserror::Error)]
pub enum CameramanError {
    #[error("Gimbal error: {message}")]
    Gimbal { message: String },

    #[error("Zoom error: {message}")]
    Zoom { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using CameramanError.
pub type CameramanResult<T> = Result<T, CameramanError>;

impl CameramanError {
    pub fn gimbal(msg: impl Into<String>) -> Self {
        Self::Gimbal {
            message: msg.into(),
        }
    }

    pub fn zoom(msg: impl Into<String>) -> Self {
        Self::Zoom {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: msg.into(),
        }
    }
}
