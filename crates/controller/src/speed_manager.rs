//! Acceleration limiting for a single axis.

use std::sync::Arc;

use cameraman_common::clock::{Clock, ElapsedTime};

/// Moves the current speed towards a target speed, changing it by at most
/// `acceleration_per_second` per elapsed second.
#[derive(Debug)]
pub struct SpeedManager {
    pub acceleration_per_second: f64,
    pub target_speed: f64,
    pub current_speed: f64,
    elapsed_time: ElapsedTime,
}

impl SpeedManager {
    pub const DEFAULT_ACCELERATION_PER_SECOND: f64 = 1000.0;

    pub fn new(acceleration_per_second: f64, clock: Arc<dyn Clock>) -> Self {
        Self {
            acceleration_per_second,
            target_speed: 0.0,
            current_speed: 0.0,
            elapsed_time: ElapsedTime::new(clock),
        }
    }

    /// Restart measuring elapsed time from now.
    pub fn reset(&mut self) {
        self.elapsed_time.reset();
    }

    pub fn is_target_speed_reached(&self) -> bool {
        self.current_speed == self.target_speed
    }

    /// Accelerate towards the target speed and return the new current speed.
    pub fn update(&mut self) -> f64 {
        let elapsed = self.elapsed_time.update();
        let delta_speed = self.target_speed - self.current_speed;
        let acceleration = self.acceleration_per_second * elapsed;
        if acceleration >= delta_speed.abs() {
            self.current_speed = self.target_speed;
        } else {
            self.current_speed += delta_speed.signum() * acceleration;
        }
        self.current_speed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cameraman_common::clock::ManualClock;

    fn manager(acceleration: f64) -> (SpeedManager, ManualClock) {
        let clock = ManualClock::new();
        (SpeedManager::new(acceleration, Arc::new(clock.clone())), clock)
    }

    #[test]
    fn test_accelerates_up_to_target() {
        let (mut sm, clock) = manager(100.0);
        sm.target_speed = 250.0;

        clock.advance_secs(1.0);
        assert_eq!(sm.update(), 100.0);
        clock.advance_secs(1.0);
        assert_eq!(sm.update(), 200.0);
        assert!(!sm.is_target_speed_reached());
        clock.advance_secs(1.0);
        assert_eq!(sm.update(), 250.0);
        assert!(sm.is_target_speed_reached());
    }

    #[test]
    fn test_decelerates_through_zero() {
        let (mut sm, clock) = manager(100.0);
        sm.current_speed = 50.0;
        sm.target_speed = -50.0;
        clock.advance_secs(0.5);
        assert_eq!(sm.update(), 0.0);
        clock.advance_secs(0.5);
        assert_eq!(sm.update(), -50.0);
    }

    #[test]
    fn test_no_time_no_change() {
        let (mut sm, _clock) = manager(100.0);
        sm.target_speed = 10.0;
        assert_eq!(sm.update(), 0.0);
    }

    #[test]
    fn test_reset_discards_idle_time() {
        let (mut sm, clock) = manager(100.0);
        sm.target_speed = 500.0;
        clock.advance_secs(3.0);
        sm.reset();
        clock.advance_secs(1.0);
        assert_eq!(sm.update(), 100.0);
    }
}
