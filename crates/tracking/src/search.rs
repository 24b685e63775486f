//! Behavior while no target is in view.

use cameraman_model::speeds::CameraSpeeds;

/// Sweeps the camera by panning at a fixed speed.
///
/// Tilt and zoom are left as they are.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotateSearchTargetStrategy {
    speed: f64,
}

impl RotateSearchTargetStrategy {
    pub const DEFAULT_SPEED: f64 = 200.0;

    pub fn new(speed: f64) -> Self {
        Self { speed }
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn update(&self, camera_speeds: &mut CameraSpeeds) {
        camera_speeds.pan_speed = self.speed;
    }
}

impl Default for RotateSearchTargetStrategy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SPEED)
    }
}
