//! A controller that only records what it was told.

use cameraman_model::controller::CameraController;
use cameraman_model::speeds::CameraSpeeds;

#[derive(Debug, Default, Clone)]
pub struct RecordingCameraController {
    started: bool,
    updates: Vec<CameraSpeeds>,
    stopped_with: Option<CameraSpeeds>,
}

impl RecordingCameraController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Every speed command received through `update`, in order.
    pub fn updates(&self) -> &[CameraSpeeds] {
        &self.updates
    }

    pub fn last_update(&self) -> Option<&CameraSpeeds> {
        self.updates.last()
    }

    /// The speeds passed to `stop`, if it was called.
    pub fn stopped_with(&self) -> Option<&CameraSpeeds> {
        self.stopped_with.as_ref()
    }
}

impl CameraController for RecordingCameraController {
    fn start(&mut self) {
        self.started = true;
        self.stopped_with = None;
    }

    fn update(&mut self, camera_speeds: &CameraSpeeds) {
        self.updates.push(*camera_speeds);
    }

    fn stop(&mut self, camera_speeds: &CameraSpeeds) {
        self.stopped_with = Some(*camera_speeds);
    }

    fn is_camera_moving(&self) -> bool {
        match (&self.stopped_with, self.updates.last()) {
            (Some(stopped), _) => !stopped.is_stopped(),
            (None, Some(last)) => !last.is_stopped(),
            (None, None) => false,
        }
    }
}
