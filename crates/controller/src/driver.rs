//! Hardware-facing driver contracts.

use cameraman_common::error::CameramanResult;

/// Sends speed commands to the gimbal motors.
pub trait GimbalDriver {
    /// Rotate with the given yaw (pan) and pitch (tilt) speeds.
    fn control(&mut self, yaw_speed: f64, pitch_speed: f64) -> CameramanResult<()>;
}

/// Sends zoom commands to the camera.
pub trait ZoomDriver {
    fn zoom_in(&mut self) -> CameramanResult<()>;

    fn zoom_out(&mut self) -> CameramanResult<()>;

    fn zoom_stop(&mut self) -> CameramanResult<()>;
}
