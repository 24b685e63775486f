//! Loss decay: slow the camera down gradually once the target disappears.

use std::sync::Arc;

use cameraman_common::clock::{Clock, MonotonicClock};
use cameraman_model::geometry::BoundingBox;
use cameraman_model::speeds::{CameraSpeeds, ZoomSpeed};

use crate::strategy::{AlignTrackingStrategy, TrackingStrategy};

/// Decorator that scales pan/tilt speeds down to zero over `slow_down_time`
/// seconds while the target is lost, and stops zooming.
///
/// The inner strategy always runs first, even for lost frames. On the first
/// lost frame the loss time is recorded and the inner speeds pass through
/// unchanged. Each later lost frame multiplies the current speeds by
/// `1 - min(elapsed, slow_down_time) / slow_down_time`. Seeing the target
/// again re-arms the decay.
pub struct StopIfLostTrackingStrategy<S> {
    inner: S,
    clock: Arc<dyn Clock>,
    slow_down_time: f64,
    has_target_been_lost: bool,
    time_of_loss: f64,
}

impl<S: TrackingStrategy> StopIfLostTrackingStrategy<S> {
    /// Wrap `inner`, measuring time with the monotonic wall clock.
    pub fn new(inner: S, slow_down_time: f64) -> Self {
        Self::with_clock(inner, slow_down_time, Arc::new(MonotonicClock::start()))
    }

    pub fn with_clock(inner: S, slow_down_time: f64, clock: Arc<dyn Clock>) -> Self {
        let time_of_loss = clock.now_secs();
        Self {
            inner,
            clock,
            slow_down_time,
            has_target_been_lost: false,
            time_of_loss,
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    pub fn slow_down_time(&self) -> f64 {
        self.slow_down_time
    }

    pub fn has_target_been_lost(&self) -> bool {
        self.has_target_been_lost
    }

    /// Fraction of speed kept at the current time, given an ongoing loss.
    pub fn slow_down_factor(&self) -> f64 {
        if self.slow_down_time <= 0.0 {
            return 0.0;
        }
        let elapsed = (self.clock.now_secs() - self.time_of_loss).max(0.0);
        let t = elapsed.min(self.slow_down_time);
        1.0 - t / self.slow_down_time
    }
}

impl<S: TrackingStrategy> TrackingStrategy for StopIfLostTrackingStrategy<S> {
    fn update(
        &mut self,
        camera_speeds: &mut CameraSpeeds,
        target: Option<&BoundingBox>,
        is_target_lost: bool,
    ) {
        self.inner.update(camera_speeds, target, is_target_lost);
        if is_target_lost {
            if !self.has_target_been_lost {
                self.time_of_loss = self.clock.now_secs();
            } else {
                let factor = self.slow_down_factor();
                camera_speeds.pan_speed *= factor;
                camera_speeds.tilt_speed *= factor;
                camera_speeds.zoom_speed = ZoomSpeed::ZoomStopped;
            }
        }
        self.has_target_been_lost = is_target_lost;
    }
}

impl<S: AlignTrackingStrategy> AlignTrackingStrategy for StopIfLostTrackingStrategy<S> {
    fn is_aligned(&self, target: &BoundingBox) -> bool {
        self.inner.is_aligned(target)
    }
}

impl<S: std::fmt::Debug> std::fmt::Debug for StopIfLostTrackingStrategy<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StopIfLostTrackingStrategy")
            .field("inner", &self.inner)
            .field("slow_down_time", &self.slow_down_time)
            .field("has_target_been_lost", &self.has_target_been_lost)
            .field("time_of_loss", &self.time_of_loss)
            .finish()
    }
}
