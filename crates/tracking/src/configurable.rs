//! Tracking with selectable rotation response curves and zoom-in behavior.

use cameraman_model::geometry::BoundingBox;
use cameraman_model::modes::{RotationMode, ZoomInMode};
use cameraman_model::speeds::{CameraSpeeds, ZoomSpeed};
use tracing::warn;

use crate::destination::Destination;
use crate::strategy::{
    signed_speed, steer_towards_destination, AlignTrackingStrategy, DestinationSteering,
    TrackingStrategy,
};

/// Like [`SimpleTrackingStrategy`](crate::SimpleTrackingStrategy), but the
/// shape of the speed ramp and the zoom-in decision are configurable.
///
/// Aligned means the target center lies in the destination's aligned box
/// *and* the target height lies within the min/max size range.
#[derive(Debug, Clone)]
pub struct ConfigurableTrackingStrategy {
    destination: Destination,
    max_allowed_speed: f64,
    rotation_mode: RotationMode,
    zoom_in_mode: ZoomInMode,
}

impl ConfigurableTrackingStrategy {
    pub fn new(destination: Destination, max_allowed_speed: f64) -> Self {
        Self {
            destination,
            max_allowed_speed,
            rotation_mode: RotationMode::QuadraticToLinear,
            zoom_in_mode: ZoomInMode::SlowWhenAligned,
        }
    }

    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    pub fn max_allowed_speed(&self) -> f64 {
        self.max_allowed_speed
    }

    pub fn rotation_mode(&self) -> RotationMode {
        self.rotation_mode
    }

    pub fn set_rotation_mode(&mut self, mode: RotationMode) {
        self.rotation_mode = mode;
    }

    pub fn zoom_in_mode(&self) -> ZoomInMode {
        self.zoom_in_mode
    }

    pub fn set_zoom_in_mode(&mut self, mode: ZoomInMode) {
        self.zoom_in_mode = mode;
    }

    /// Speed along one axis for a target at `target` and a destination at
    /// `destination`, where `size` is the frame dimension along that axis.
    pub fn speed_by_distance(&self, target: f64, destination: f64, size: f64) -> f64 {
        let distance = target - destination;
        let abs_distance = distance.abs();
        let max_distance = size / 2.0;
        let variance = self.destination.variance();

        if abs_distance < variance {
            return match self.rotation_mode {
                RotationMode::Stop | RotationMode::Linear | RotationMode::Quadratic => 0.0,
                RotationMode::QuadraticToLinear => {
                    let magnitude =
                        self.max_allowed_speed * abs_distance * abs_distance / (variance * max_distance);
                    signed_speed(distance, magnitude, self.max_allowed_speed)
                }
                RotationMode::Unknown => {
                    warn!("unhandled rotation mode {}", self.rotation_mode);
                    0.0
                }
            };
        }

        let percentage_distance = abs_distance / max_distance;
        let magnitude = match self.rotation_mode {
            RotationMode::Quadratic => percentage_distance.powi(2) * self.max_allowed_speed,
            RotationMode::Stop | RotationMode::Linear | RotationMode::QuadraticToLinear => {
                percentage_distance * self.max_allowed_speed
            }
            RotationMode::Unknown => {
                warn!("unhandled rotation mode {}", self.rotation_mode);
                return 0.0;
            }
        };
        signed_speed(distance, magnitude, self.max_allowed_speed)
    }

    fn is_xy_aligned(&self, target: &BoundingBox) -> bool {
        self.destination.aligned_box().contains_point(&target.center())
    }

    fn is_zoom_aligned(&self, target: &BoundingBox) -> bool {
        let min_height = self.destination.min_size_box().height;
        let max_height = self.destination.max_size_box().height;
        (min_height..=max_height).contains(&target.height)
    }

    /// The region in which a target still counts as mostly aligned.
    ///
    /// Centered on the destination and shrinking by three target sizes per
    /// axis, i.e. the target keeps a distance of 1.5 times its size to the
    /// frame edges.
    fn is_in_slow_zoom_in_range(&self, target: &BoundingBox) -> bool {
        let frame = self.destination.frame_size();
        let slow_zoom_in_range = BoundingBox::from_center_and_size(
            self.destination.center(),
            frame.width - 3.0 * target.width,
            frame.height - 3.0 * target.height,
        );
        slow_zoom_in_range.intersect(target).area() > 0.0
    }

    fn zoom_in(&self, target: &BoundingBox) -> ZoomSpeed {
        match self.zoom_in_mode {
            ZoomInMode::Slow => ZoomSpeed::ZoomInSlow,
            ZoomInMode::Fast => ZoomSpeed::ZoomInFast,
            ZoomInMode::SlowWhenAligned if self.is_xy_aligned(target) => ZoomSpeed::ZoomInSlow,
            ZoomInMode::FastWhenAligned if self.is_xy_aligned(target) => ZoomSpeed::ZoomInFast,
            ZoomInMode::SlowWhenAligned | ZoomInMode::FastWhenAligned => ZoomSpeed::ZoomStopped,
            ZoomInMode::Gradually => {
                if self.is_xy_aligned(target) {
                    ZoomSpeed::ZoomInFast
                } else if self.is_in_slow_zoom_in_range(target) {
                    ZoomSpeed::ZoomInSlow
                } else {
                    ZoomSpeed::ZoomStopped
                }
            }
            ZoomInMode::Unknown => {
                warn!("unhandled zoom in mode {}", self.zoom_in_mode);
                ZoomSpeed::ZoomStopped
            }
        }
    }
}

impl DestinationSteering for ConfigurableTrackingStrategy {
    fn destination_mut(&mut self) -> &mut Destination {
        &mut self.destination
    }

    fn axis_speed(&self, target: f64, destination: f64, size: f64) -> f64 {
        self.speed_by_distance(target, destination, size)
    }

    fn zoom_speed(&self, target: &BoundingBox) -> ZoomSpeed {
        if target.height < self.destination.min_size_box().height {
            self.zoom_in(target)
        } else if target.height > self.destination.max_size_box().height {
            ZoomSpeed::ZoomOutFast
        } else {
            ZoomSpeed::ZoomStopped
        }
    }
}

impl TrackingStrategy for ConfigurableTrackingStrategy {
    fn update(
        &mut self,
        camera_speeds: &mut CameraSpeeds,
        target: Option<&BoundingBox>,
        is_target_lost: bool,
    ) {
        steer_towards_destination(self, camera_speeds, target, is_target_lost);
    }
}

impl AlignTrackingStrategy for ConfigurableTrackingStrategy {
    fn is_aligned(&self, target: &BoundingBox) -> bool {
        self.is_xy_aligned(target) && self.is_zoom_aligned(target)
    }
}
