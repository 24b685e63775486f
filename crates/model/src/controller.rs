//! Actuator contract.
//!
//! The control core hands its speeds to a [`CameraController`] once per
//! frame. Implementations own the transport (serial gimbal protocol,
//! camera HTTP API, ...) and must deal with its failures themselves:
//! nothing a controller does may abort the control loop.

use crate::speeds::CameraSpeeds;

/// Sink for the camera speeds computed each frame.
pub trait CameraController {
    /// Prepare for a new session (e.g. reset acceleration timers).
    fn start(&mut self);

    /// Apply the speeds of the current frame.
    fn update(&mut self, camera_speeds: &CameraSpeeds);

    /// Bring the camera to rest, starting from the given speeds.
    fn stop(&mut self, camera_speeds: &CameraSpeeds);

    /// Whether the camera is still in motion.
    fn is_camera_moving(&self) -> bool;
}

impl<C: CameraController + ?Sized> CameraController for Box<C> {
    fn start(&mut self) {
        (**self).start()
    }

    fn update(&mut self, camera_speeds: &CameraSpeeds) {
        (**self).update(camera_speeds)
    }

    fn stop(&mut self, camera_speeds: &CameraSpeeds) {
        (**self).stop(camera_speeds)
    }

    fn is_camera_moving(&self) -> bool {
        (**self).is_camera_moving()
    }
}
