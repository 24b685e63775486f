//! Acceleration-limited camera controller.

use std::sync::Arc;
use std::time::Duration;

use cameraman_common::clock::Clock;
use cameraman_common::config::ControllerSettings;
use cameraman_model::controller::CameraController;
use cameraman_model::speeds::{CameraSpeeds, ZoomSpeed};
use tracing::{debug, error, warn};

use crate::driver::{GimbalDriver, ZoomDriver};
use crate::speed_manager::SpeedManager;

/// Upper bound on gimbal updates issued while stopping.
const MAX_STOP_UPDATES: usize = 10_000;

/// Ramps pan/tilt towards the requested speeds instead of jumping, and
/// only sends zoom commands when the zoom direction changes.
///
/// Tilt is sent to the gimbal as inverted pitch: a positive tilt speed
/// moves the view down, which is a negative pitch.
pub struct SmoothCameraController<G, Z> {
    gimbal: G,
    zoom: Z,
    rotate_speed_manager: SpeedManager,
    tilt_speed_manager: SpeedManager,
    old_zoom_speed: ZoomSpeed,
    stop_poll_interval: Duration,
}

impl<G: GimbalDriver, Z: ZoomDriver> SmoothCameraController<G, Z> {
    pub fn new(
        gimbal: G,
        zoom: Z,
        rotate_speed_manager: SpeedManager,
        tilt_speed_manager: SpeedManager,
    ) -> Self {
        Self {
            gimbal,
            zoom,
            rotate_speed_manager,
            tilt_speed_manager,
            old_zoom_speed: ZoomSpeed::ZoomStopped,
            stop_poll_interval: Duration::from_millis(10),
        }
    }

    pub fn from_settings(
        gimbal: G,
        zoom: Z,
        settings: &ControllerSettings,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self::new(
            gimbal,
            zoom,
            SpeedManager::new(settings.rotational_acceleration_per_second, clock.clone()),
            SpeedManager::new(settings.tilting_acceleration_per_second, clock),
        )
    }

    /// How long to wait between gimbal updates while stopping.
    pub fn with_stop_poll_interval(mut self, interval: Duration) -> Self {
        self.stop_poll_interval = interval;
        self
    }

    pub fn gimbal(&self) -> &G {
        &self.gimbal
    }

    pub fn zoom(&self) -> &Z {
        &self.zoom
    }

    /// Current (ramped) pan and tilt speeds.
    pub fn current_speeds(&self) -> (f64, f64) {
        (
            self.rotate_speed_manager.current_speed,
            self.tilt_speed_manager.current_speed,
        )
    }

    fn update_gimbal(&mut self, camera_speeds: &CameraSpeeds) {
        self.rotate_speed_manager.target_speed = camera_speeds.pan_speed;
        self.tilt_speed_manager.target_speed = camera_speeds.tilt_speed;
        let old_pan_speed = self.rotate_speed_manager.current_speed;
        let old_tilt_speed = self.tilt_speed_manager.current_speed;

        let yaw_speed = self.rotate_speed_manager.update();
        let pitch_speed = -self.tilt_speed_manager.update();
        match self.gimbal.control(yaw_speed, pitch_speed) {
            Ok(()) => debug!(
                "current gimbal speeds are: pan {:5.0}, tilt {:5.0}",
                self.rotate_speed_manager.current_speed,
                self.tilt_speed_manager.current_speed
            ),
            Err(e) => {
                error!("failed to control gimbal: {}", e);
                self.rotate_speed_manager.current_speed = old_pan_speed;
                self.tilt_speed_manager.current_speed = old_tilt_speed;
            }
        }
    }

    fn update_zoom(&mut self, camera_speeds: &CameraSpeeds) {
        let new = camera_speeds.zoom_speed;
        let old = self.old_zoom_speed;
        let result = if new.is_zoom_in() && !old.is_zoom_in() {
            debug!("zoom in");
            self.zoom.zoom_in()
        } else if new.is_zoom_out() && !old.is_zoom_out() {
            debug!("zoom out");
            self.zoom.zoom_out()
        } else if new == ZoomSpeed::ZoomStopped && old != ZoomSpeed::ZoomStopped {
            debug!("zoom stop");
            self.zoom.zoom_stop()
        } else {
            Ok(())
        };
        match result {
            Ok(()) => self.old_zoom_speed = new,
            Err(e) => error!("failed to zoom camera: {}", e),
        }
    }
}

impl<G: GimbalDriver, Z: ZoomDriver> CameraController for SmoothCameraController<G, Z> {
    fn start(&mut self) {
        self.rotate_speed_manager.reset();
        self.tilt_speed_manager.reset();
    }

    fn update(&mut self, camera_speeds: &CameraSpeeds) {
        self.update_gimbal(camera_speeds);
        self.update_zoom(camera_speeds);
    }

    fn stop(&mut self, camera_speeds: &CameraSpeeds) {
        for _ in 0..MAX_STOP_UPDATES {
            self.update(camera_speeds);
            if !self.is_camera_moving() {
                return;
            }
            if !self.stop_poll_interval.is_zero() {
                std::thread::sleep(self.stop_poll_interval);
            }
        }
        warn!("camera still moving after {} stop updates", MAX_STOP_UPDATES);
    }

    fn is_camera_moving(&self) -> bool {
        self.rotate_speed_manager.current_speed != 0.0 || self.tilt_speed_manager.current_speed != 0.0
    }
}
