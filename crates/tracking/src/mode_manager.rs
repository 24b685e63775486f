//! The cameraman's top-level state machine.
//!
//! Once per frame the manager decides between searching for a target,
//! aligning the camera with a newly found one, and tracking it, unless an
//! operator has taken over manually. The resulting speeds are handed to the
//! [`CameraController`].
//!
//! All operations take `&mut self`; callers driving the manager from more
//! than one thread (e.g. a frame loop plus an operator input handler) wrap
//! it in a mutex.

use std::sync::Arc;

use cameraman_common::clock::Clock;
use cameraman_common::config::TrackingSettings;
use cameraman_model::controller::CameraController;
use cameraman_model::geometry::BoundingBox;
use cameraman_model::modes::{RotationMode, ZoomInMode};
use cameraman_model::speeds::{CameraSpeeds, ZoomSpeed};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::search::RotateSearchTargetStrategy;
use crate::strategy::{AlignTrackingStrategy, Strategy, TrackingStrategy};

/// What the cameraman is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameramanMode {
    Manual,
    Searching,
    Aligning,
    Tracking,
}

impl std::fmt::Display for CameramanMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CameramanMode::Manual => "manual",
            CameramanMode::Searching => "searching",
            CameramanMode::Aligning => "aligning",
            CameramanMode::Tracking => "tracking",
        };
        f.write_str(name)
    }
}

pub struct CameramanModeManager<C: CameraController> {
    camera_controller: C,
    align_tracking_strategy: Strategy,
    tracking_strategy: Strategy,
    search_target_strategy: RotateSearchTargetStrategy,
    camera_speeds: CameraSpeeds,
    mode: CameramanMode,
    is_manual_mode: bool,
}

impl<C: CameraController> CameramanModeManager<C> {
    pub fn new(
        camera_controller: C,
        align_tracking_strategy: Strategy,
        tracking_strategy: Strategy,
        search_target_strategy: RotateSearchTargetStrategy,
    ) -> Self {
        Self {
            camera_controller,
            align_tracking_strategy,
            tracking_strategy,
            search_target_strategy,
            camera_speeds: CameraSpeeds::default(),
            mode: CameramanMode::Tracking,
            is_manual_mode: false,
        }
    }

    /// Assemble the manager from configuration.
    ///
    /// The align strategy uses `align_max_allowed_speed`; the tracking
    /// strategy uses `max_allowed_speed` and slows down over
    /// `slow_down_time_secs` once the target is lost.
    pub fn from_settings(
        camera_controller: C,
        settings: &TrackingSettings,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let align = Strategy::from_settings(settings, settings.align_max_allowed_speed);
        let tracking = Strategy::from_settings(settings, settings.max_allowed_speed)
            .stop_if_lost(settings.slow_down_time_secs, clock);
        Self::new(
            camera_controller,
            align,
            tracking,
            RotateSearchTargetStrategy::new(settings.search_speed),
        )
    }

    /// Compute and send the speeds for one frame.
    pub fn update(&mut self, target: Option<&BoundingBox>, is_target_lost: bool) {
        if !self.is_manual_mode {
            let is_aligning = matches!(
                self.mode,
                CameramanMode::Searching | CameramanMode::Aligning
            );
            if target.is_none() && is_target_lost {
                self.set_mode(CameramanMode::Searching);
                self.search_target_strategy.update(&mut self.camera_speeds);
            } else if is_aligning
                && !target.is_some_and(|t| self.align_tracking_strategy.is_aligned(t))
            {
                self.set_mode(CameramanMode::Aligning);
                self.align_tracking_strategy
                    .update(&mut self.camera_speeds, target, is_target_lost);
            } else {
                self.set_mode(CameramanMode::Tracking);
                self.tracking_strategy
                    .update(&mut self.camera_speeds, target, is_target_lost);
            }
        }
        self.camera_controller.update(&self.camera_speeds);
    }

    pub fn start(&mut self) {
        self.camera_controller.start();
    }

    /// Zero all speeds and bring the camera to rest.
    pub fn stop(&mut self) {
        debug!("Stop camera");
        self.camera_speeds.reset();
        self.camera_controller.stop(&self.camera_speeds);
    }

    /// Hand control to the operator. Automatic strategies stop running.
    pub fn manual_mode(&mut self) {
        self.is_manual_mode = true;
        self.set_mode(CameramanMode::Manual);
    }

    /// Return control to the automatic strategies from the next frame on.
    pub fn tracking_mode(&mut self) {
        self.is_manual_mode = false;
        self.set_mode(CameramanMode::Tracking);
    }

    pub fn manual_rotate(&mut self, pan_speed: f64) {
        self.camera_speeds.pan_speed = pan_speed;
    }

    pub fn manual_tilt(&mut self, tilt_speed: f64) {
        self.camera_speeds.tilt_speed = tilt_speed;
    }

    pub fn manual_zoom(&mut self, zoom_speed: ZoomSpeed) {
        self.camera_speeds.zoom_speed = zoom_speed;
    }

    /// Switch the rotation response curve of both the align and tracking strategy.
    pub fn set_rotation_mode(&mut self, mode: RotationMode) {
        debug!("change rotation mode to: {}", mode);
        self.align_tracking_strategy.set_rotation_mode(mode);
        self.tracking_strategy.set_rotation_mode(mode);
    }

    /// Switch the zoom-in decision of both the align and tracking strategy.
    pub fn set_zoom_in_mode(&mut self, mode: ZoomInMode) {
        debug!("change zoom in mode to: {}", mode);
        self.align_tracking_strategy.set_zoom_in_mode(mode);
        self.tracking_strategy.set_zoom_in_mode(mode);
    }

    pub fn mode(&self) -> CameramanMode {
        self.mode
    }

    pub fn is_manual_mode(&self) -> bool {
        self.is_manual_mode
    }

    pub fn camera_speeds(&self) -> &CameraSpeeds {
        &self.camera_speeds
    }

    pub fn camera_controller(&self) -> &C {
        &self.camera_controller
    }

    pub fn tracking_strategy(&self) -> &Strategy {
        &self.tracking_strategy
    }

    pub fn align_tracking_strategy(&self) -> &Strategy {
        &self.align_tracking_strategy
    }

    fn set_mode(&mut self, mode: CameramanMode) {
        if self.mode != mode {
            debug!("cameraman mode changed from {} to {}", self.mode, mode);
            self.mode = mode;
        }
    }
}
