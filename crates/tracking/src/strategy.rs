//! Capability traits shared by all tracking strategies and the closed set
//! of strategy variants the mode manager is built from.

use std::sync::Arc;

use cameraman_common::clock::Clock;
use cameraman_common::config::TrackingSettings;
use cameraman_model::geometry::{BoundingBox, FrameSize};
use cameraman_model::modes::{RotationMode, StrategyKind, ZoomInMode};
use cameraman_model::speeds::{CameraSpeeds, ZoomSpeed};

use crate::configurable::ConfigurableTrackingStrategy;
use crate::destination::Destination;
use crate::simple::SimpleTrackingStrategy;
use crate::stop_if_lost::StopIfLostTrackingStrategy;

/// Computes camera speeds from the current target.
pub trait TrackingStrategy {
    /// Update `camera_speeds` for the current frame.
    ///
    /// Speeds are left untouched if there is nothing to steer towards.
    fn update(
        &mut self,
        camera_speeds: &mut CameraSpeeds,
        target: Option<&BoundingBox>,
        is_target_lost: bool,
    );
}

/// A tracking strategy that can also tell whether the target is framed well enough.
pub trait AlignTrackingStrategy: TrackingStrategy {
    fn is_aligned(&self, target: &BoundingBox) -> bool;
}

/// Apply the sign of `distance` to a speed magnitude and clamp it to `max_allowed_speed`.
pub(crate) fn signed_speed(distance: f64, magnitude: f64, max_allowed_speed: f64) -> f64 {
    let speed = magnitude.min(max_allowed_speed);
    if distance < 0.0 {
        -speed
    } else {
        speed
    }
}

/// A per-axis speed law and zoom rule that steer the target towards a [`Destination`].
pub(crate) trait DestinationSteering {
    fn destination_mut(&mut self) -> &mut Destination;

    /// Speed along one axis, `size` being the frame dimension along that axis.
    fn axis_speed(&self, target: f64, destination: f64, size: f64) -> f64;

    fn zoom_speed(&self, target: &BoundingBox) -> ZoomSpeed;
}

/// [`TrackingStrategy::update`] for any [`DestinationSteering`] strategy.
pub(crate) fn steer_towards_destination<S: DestinationSteering>(
    strategy: &mut S,
    camera_speeds: &mut CameraSpeeds,
    target: Option<&BoundingBox>,
    is_target_lost: bool,
) {
    let Some(target) = target.filter(|_| !is_target_lost) else {
        return;
    };
    let t = target.center();
    let destination = strategy.destination_mut();
    destination.update_size_box_center(t.x, t.y);
    let d = destination.center();
    let frame = destination.frame_size();
    camera_speeds.pan_speed = strategy.axis_speed(t.x, d.x, frame.width);
    camera_speeds.tilt_speed = strategy.axis_speed(t.y, d.y, frame.height);
    camera_speeds.zoom_speed = strategy.zoom_speed(target);
}

/// The strategies the mode manager can be assembled from.
#[derive(Debug)]
pub enum Strategy {
    Simple(SimpleTrackingStrategy),
    Configurable(ConfigurableTrackingStrategy),
    StopIfLost(Box<StopIfLostTrackingStrategy<Strategy>>),
}

impl Strategy {
    /// Build a plain strategy of the configured kind.
    pub fn from_settings(settings: &TrackingSettings, max_allowed_speed: f64) -> Self {
        let destination = Destination::new(
            FrameSize::new(settings.frame_width, settings.frame_height),
            settings.variance,
        );
        match settings.strategy {
            StrategyKind::Simple => {
                Strategy::Simple(SimpleTrackingStrategy::new(destination, max_allowed_speed))
            }
            StrategyKind::Configurable => {
                let mut strategy = ConfigurableTrackingStrategy::new(destination, max_allowed_speed);
                strategy.set_rotation_mode(settings.rotation_mode);
                strategy.set_zoom_in_mode(settings.zoom_in_mode);
                Strategy::Configurable(strategy)
            }
        }
    }

    /// Wrap this strategy so that it slows down over `slow_down_time` seconds
    /// once the target is lost.
    pub fn stop_if_lost(self, slow_down_time: f64, clock: Arc<dyn Clock>) -> Self {
        Strategy::StopIfLost(Box::new(StopIfLostTrackingStrategy::with_clock(
            self,
            slow_down_time,
            clock,
        )))
    }

    /// The destination zone the innermost strategy steers towards.
    pub fn destination(&self) -> &Destination {
        match self {
            Strategy::Simple(strategy) => strategy.destination(),
            Strategy::Configurable(strategy) => strategy.destination(),
            Strategy::StopIfLost(strategy) => strategy.inner().destination(),
        }
    }

    /// Change the rotation response of configurable strategies. Others ignore it.
    pub fn set_rotation_mode(&mut self, mode: RotationMode) {
        match self {
            Strategy::Simple(_) => {}
            Strategy::Configurable(strategy) => strategy.set_rotation_mode(mode),
            Strategy::StopIfLost(strategy) => strategy.inner_mut().set_rotation_mode(mode),
        }
    }

    /// Change the zoom-in decision of configurable strategies. Others ignore it.
    pub fn set_zoom_in_mode(&mut self, mode: ZoomInMode) {
        match self {
            Strategy::Simple(_) => {}
            Strategy::Configurable(strategy) => strategy.set_zoom_in_mode(mode),
            Strategy::StopIfLost(strategy) => strategy.inner_mut().set_zoom_in_mode(mode),
        }
    }
}

impl TrackingStrategy for Strategy {
    fn update(
        &mut self,
        camera_speeds: &mut CameraSpeeds,
        target: Option<&BoundingBox>,
        is_target_lost: bool,
    ) {
        match self {
            Strategy::Simple(strategy) => strategy.update(camera_speeds, target, is_target_lost),
            Strategy::Configurable(strategy) => {
                strategy.update(camera_speeds, target, is_target_lost)
            }
            Strategy::StopIfLost(strategy) => {
                strategy.update(camera_speeds, target, is_target_lost)
            }
        }
    }
}

impl AlignTrackingStrategy for Strategy {
    fn is_aligned(&self, target: &BoundingBox) -> bool {
        match self {
            Strategy::Simple(strategy) => strategy.is_aligned(target),
            Strategy::Configurable(strategy) => strategy.is_aligned(target),
            Strategy::StopIfLost(strategy) => strategy.is_aligned(target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cameraman_common::clock::ManualClock;
    use cameraman_model::geometry::Point;

    fn linear_pair() -> (SimpleTrackingStrategy, ConfigurableTrackingStrategy) {
        let destination = Destination::new(FrameSize::new(640.0, 480.0), 50.0);
        let mut configurable = ConfigurableTrackingStrategy::new(destination.clone(), 100.0);
        configurable.set_rotation_mode(RotationMode::Linear);
        configurable.set_zoom_in_mode(ZoomInMode::Fast);
        (SimpleTrackingStrategy::new(destination, 100.0), configurable)
    }

    #[test]
    fn test_linear_strategies_steer_alike() {
        let (mut simple, mut configurable) = linear_pair();
        for (x, y, height) in [
            (320.0, 240.0, 240.0),
            (600.0, 100.0, 40.0),
            (10.0, 470.0, 460.0),
            (380.0, 180.0, 200.0),
        ] {
            let target = BoundingBox::from_center_and_size(Point::new(x, y), 50.0, height);
            let mut a = CameraSpeeds::default();
            let mut b = CameraSpeeds::default();
            simple.update(&mut a, Some(&target), false);
            configurable.update(&mut b, Some(&target), false);
            assert_eq!(a, b, "target at ({x}, {y}) height {height}");
            assert_eq!(
                simple.destination().size_box_center(),
                configurable.destination().size_box_center()
            );
        }
    }

    #[test]
    fn test_lost_target_leaves_speeds_for_both_strategies() {
        let (mut simple, mut configurable) = linear_pair();
        let target = BoundingBox::new(600.0, 400.0, 20.0, 20.0);
        let held = CameraSpeeds::new(7.0, -7.0, ZoomSpeed::ZoomOutSlow);

        let mut a = held;
        simple.update(&mut a, Some(&target), true);
        let mut b = held;
        configurable.update(&mut b, Some(&target), true);
        assert_eq!(a, held);
        assert_eq!(b, held);

        simple.update(&mut a, None, false);
        configurable.update(&mut b, None, false);
        assert_eq!(a, held);
        assert_eq!(b, held);
    }

    #[test]
    fn test_signed_speed() {
        assert_eq!(signed_speed(-10.0, 50.0, 100.0), -50.0);
        assert_eq!(signed_speed(10.0, 500.0, 100.0), 100.0);
        assert_eq!(signed_speed(0.0, 0.0, 100.0), 0.0);
    }

    #[test]
    fn test_from_settings_builds_configured_kind() {
        let settings = TrackingSettings {
            strategy: StrategyKind::Configurable,
            rotation_mode: RotationMode::Quadratic,
            ..Default::default()
        };
        match Strategy::from_settings(&settings, 300.0) {
            Strategy::Configurable(strategy) => {
                assert_eq!(strategy.rotation_mode(), RotationMode::Quadratic);
                assert_eq!(strategy.max_allowed_speed(), 300.0);
            }
            other => panic!("expected configurable strategy, got {other:?}"),
        }
    }

    #[test]
    fn test_mode_changes_reach_wrapped_strategy() {
        let settings = TrackingSettings {
            strategy: StrategyKind::Configurable,
            ..Default::default()
        };
        let mut strategy = Strategy::from_settings(&settings, 300.0)
            .stop_if_lost(1.0, Arc::new(ManualClock::new()));
        strategy.set_rotation_mode(RotationMode::Stop);
        strategy.set_zoom_in_mode(ZoomInMode::Fast);

        let Strategy::StopIfLost(wrapper) = &strategy else {
            panic!("expected wrapped strategy");
        };
        let Strategy::Configurable(inner) = wrapper.inner() else {
            panic!("expected configurable inner strategy");
        };
        assert_eq!(inner.rotation_mode(), RotationMode::Stop);
        assert_eq!(inner.zoom_in_mode(), ZoomInMode::Fast);
    }

    #[test]
    fn test_destination_reaches_through_wrapper() {
        let settings = TrackingSettings::default();
        let strategy =
            Strategy::from_settings(&settings, 300.0).stop_if_lost(1.0, Arc::new(ManualClock::new()));
        assert_eq!(strategy.destination().variance(), settings.variance);
    }
}
