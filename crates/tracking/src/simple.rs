//! Baseline speed law: dead-band, linear ramp, hard clamp.

use cameraman_model::geometry::BoundingBox;
use cameraman_model::speeds::{CameraSpeeds, ZoomSpeed};

use crate::destination::Destination;
use crate::strategy::{
    signed_speed, steer_towards_destination, AlignTrackingStrategy, DestinationSteering,
    TrackingStrategy,
};

/// Steers the target towards the destination center with a speed
/// proportional to its distance, and zooms fast whenever the target's
/// height leaves the acceptable range.
#[derive(Debug, Clone)]
pub struct SimpleTrackingStrategy {
    destination: Destination,
    max_allowed_speed: f64,
}

impl SimpleTrackingStrategy {
    pub const DEFAULT_MAX_ALLOWED_SPEED: f64 = 1000.0;

    pub fn new(destination: Destination, max_allowed_speed: f64) -> Self {
        Self {
            destination,
            max_allowed_speed,
        }
    }

    pub fn with_default_speed(destination: Destination) -> Self {
        Self::new(destination, Self::DEFAULT_MAX_ALLOWED_SPEED)
    }

    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    pub fn max_allowed_speed(&self) -> f64 {
        self.max_allowed_speed
    }

    /// Speed along one axis for a target at `target` and a destination at
    /// `destination`, where `size` is the frame dimension along that axis.
    pub fn speed_by_distance(&self, target: f64, destination: f64, size: f64) -> f64 {
        let distance = target - destination;
        let abs_distance = distance.abs();
        if abs_distance < self.destination.variance() {
            return 0.0;
        }
        let magnitude = abs_distance / (size / 2.0) * self.max_allowed_speed;
        signed_speed(distance, magnitude, self.max_allowed_speed)
    }
}

impl DestinationSteering for SimpleTrackingStrategy {
    fn destination_mut(&mut self) -> &mut Destination {
        &mut self.destination
    }

    fn axis_speed(&self, target: f64, destination: f64, size: f64) -> f64 {
        self.speed_by_distance(target, destination, size)
    }

    fn zoom_speed(&self, target: &BoundingBox) -> ZoomSpeed {
        if target.height < self.destination.min_size_box().height {
            ZoomSpeed::ZoomInFast
        } else if target.height > self.destination.max_size_box().height {
            ZoomSpeed::ZoomOutFast
        } else {
            ZoomSpeed::ZoomStopped
        }
    }
}

impl TrackingStrategy for SimpleTrackingStrategy {
    fn update(
        &mut self,
        camera_speeds: &mut CameraSpeeds,
        target: Option<&BoundingBox>,
        is_target_lost: bool,
    ) {
        steer_towards_destination(self, camera_speeds, target, is_target_lost);
    }
}

impl AlignTrackingStrategy for SimpleTrackingStrategy {
    fn is_aligned(&self, target: &BoundingBox) -> bool {
        self.destination.aligned_box().contains_point(&target.center())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cameraman_model::geometry::{FrameSize, Point};

    fn strategy() -> SimpleTrackingStrategy {
        SimpleTrackingStrategy::new(Destination::new(FrameSize::new(640.0, 480.0), 50.0), 100.0)
    }

    fn target_at(x: f64, y: f64, height: f64) -> BoundingBox {
        BoundingBox::from_center_and_size(Point::new(x, y), 50.0, height)
    }

    #[test]
    fn test_dead_band() {
        let s = strategy();
        assert_eq!(s.speed_by_distance(320.0, 320.0, 640.0), 0.0);
        assert_eq!(s.speed_by_distance(369.0, 320.0, 640.0), 0.0);
        assert_eq!(s.speed_by_distance(271.0, 320.0, 640.0), 0.0);
    }

    #[test]
    fn test_linear_ramp_and_clamp() {
        let s = strategy();
        // 160px of a 320px half-width
        assert!((s.speed_by_distance(480.0, 320.0, 640.0) - 50.0).abs() < 1e-9);
        assert!((s.speed_by_distance(160.0, 320.0, 640.0) + 50.0).abs() < 1e-9);
        // distance beyond half the frame is clamped
        assert_eq!(s.speed_by_distance(1000.0, 320.0, 640.0), 100.0);
        assert_eq!(s.speed_by_distance(-1000.0, 320.0, 640.0), -100.0);
    }

    #[test]
    fn test_update_ignores_missing_or_lost_target() {
        let mut s = strategy();
        let mut speeds = CameraSpeeds::new(12.0, -3.0, ZoomSpeed::ZoomInSlow);
        s.update(&mut speeds, None, false);
        assert_eq!(speeds, CameraSpeeds::new(12.0, -3.0, ZoomSpeed::ZoomInSlow));

        let target = target_at(600.0, 400.0, 10.0);
        s.update(&mut speeds, Some(&target), true);
        assert_eq!(speeds, CameraSpeeds::new(12.0, -3.0, ZoomSpeed::ZoomInSlow));
    }

    #[test]
    fn test_update_sets_speeds_and_moves_size_boxes() {
        let mut s = strategy();
        let mut speeds = CameraSpeeds::default();
        let target = target_at(480.0, 360.0, 200.0);
        s.update(&mut speeds, Some(&target), false);

        assert!((speeds.pan_speed - 50.0).abs() < 1e-9);
        assert!((speeds.tilt_speed - 50.0).abs() < 1e-9);
        assert_eq!(speeds.zoom_speed, ZoomSpeed::ZoomStopped);
        assert_eq!(s.destination().size_box_center(), Point::new(480.0, 360.0));
        assert_eq!(s.destination().center(), Point::new(320.0, 240.0));
    }

    #[test]
    fn test_zoom_decision() {
        let mut s = strategy();
        let mut speeds = CameraSpeeds::default();

        s.update(&mut speeds, Some(&target_at(320.0, 240.0, 100.0)), false);
        assert_eq!(speeds.zoom_speed, ZoomSpeed::ZoomInFast);

        s.update(&mut speeds, Some(&target_at(320.0, 240.0, 400.0)), false);
        assert_eq!(speeds.zoom_speed, ZoomSpeed::ZoomOutFast);

        s.update(&mut speeds, Some(&target_at(320.0, 240.0, 240.0)), false);
        assert_eq!(speeds.zoom_speed, ZoomSpeed::ZoomStopped);
    }

    #[test]
    fn test_is_aligned() {
        let s = strategy();
        assert!(s.is_aligned(&target_at(360.0, 200.0, 10.0)));
        assert!(!s.is_aligned(&target_at(420.0, 240.0, 10.0)));
    }
}
