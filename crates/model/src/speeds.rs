//! The per-frame actuator command.

use serde::{Deserialize, Serialize};

/// Discrete zoom speeds understood by the camera.
///
/// Negative values zoom out, positive values zoom in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoomSpeed {
    ZoomOutFast,
    ZoomOutSlow,
    #[default]
    ZoomStopped,
    ZoomInSlow,
    ZoomInFast,
}

impl ZoomSpeed {
    /// Signed magnitude as sent to the camera.
    pub fn as_i32(self) -> i32 {
        match self {
            ZoomSpeed::ZoomOutFast => -200,
            ZoomSpeed::ZoomOutSlow => -100,
            ZoomSpeed::ZoomStopped => 0,
            ZoomSpeed::ZoomInSlow => 100,
            ZoomSpeed::ZoomInFast => 200,
        }
    }

    pub fn is_zoom_in(self) -> bool {
        self.as_i32() > 0
    }

    pub fn is_zoom_out(self) -> bool {
        self.as_i32() < 0
    }
}

/// Pan, tilt and zoom speeds for one control cycle.
///
/// Positive pan moves the view right, positive tilt moves it down
/// (both in image space).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CameraSpeeds {
    pub pan_speed: f64,
    pub tilt_speed: f64,
    pub zoom_speed: ZoomSpeed,
}

impl CameraSpeeds {
    pub fn new(pan_speed: f64, tilt_speed: f64, zoom_speed: ZoomSpeed) -> Self {
        Self {
            pan_speed,
            tilt_speed,
            zoom_speed,
        }
    }

    /// Zero all speeds.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_stopped(&self) -> bool {
        self.pan_speed == 0.0 && self.tilt_speed == 0.0 && self.zoom_speed == ZoomSpeed::ZoomStopped
    }
}
