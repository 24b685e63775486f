//! Clock and timing utilities for the control loop.
//!
//! Time-dependent behavior (loss decay, acceleration limiting, frame pacing)
//! reads the current time through the [`Clock`] trait so it can run against
//! the wall clock in production and against a hand-driven clock in tests
//! and offline replays.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// A source of monotonic time in seconds.
pub trait Clock: Send + Sync {
    /// Seconds elapsed since the clock's epoch.
    fn now_secs(&self) -> f64;
}

/// Monotonic clock anchored at the moment it was created.
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    epoch: Instant,
}

impl MonotonicClock {
    /// Create a new clock anchored to now.
    pub fn start() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }

    /// Convert an elapsed nanosecond value to seconds.
    pub fn ns_to_secs(ns: u64) -> f64 {
        ns as f64 / 1_000_000_000.0
    }

    /// Convert seconds to nanoseconds.
    pub fn secs_to_ns(secs: f64) -> u64 {
        (secs * 1_000_000_000.0) as u64
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::start()
    }
}

impl Clock for MonotonicClock {
    fn now_secs(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same time, so a test can keep one handle and hand
/// another to the component under test.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now_ns: Arc<AtomicU64>,
}

impl ManualClock {
    /// Create a clock reading zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward.
    pub fn advance(&self, delta: Duration) {
        self.now_ns
            .fetch_add(delta.as_nanos() as u64, Ordering::SeqCst);
    }

    /// Move the clock forward by fractional seconds. Negative values are ignored.
    pub fn advance_secs(&self, secs: f64) {
        if secs > 0.0 {
            self.now_ns
                .fetch_add(MonotonicClock::secs_to_ns(secs), Ordering::SeqCst);
        }
    }

    /// Jump to an absolute time.
    pub fn set_secs(&self, secs: f64) {
        self.now_ns
            .store(MonotonicClock::secs_to_ns(secs.max(0.0)), Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_secs(&self) -> f64 {
        MonotonicClock::ns_to_secs(self.now_ns.load(Ordering::SeqCst))
    }
}

/// Measures the time between consecutive calls to [`ElapsedTime::update`].
pub struct ElapsedTime {
    clock: Arc<dyn Clock>,
    last_update_secs: f64,
}

impl ElapsedTime {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        let last_update_secs = clock.now_secs();
        Self {
            clock,
            last_update_secs,
        }
    }

    /// Restart measuring from now.
    pub fn reset(&mut self) {
        self.last_update_secs = self.clock.now_secs();
    }

    /// Seconds since the previous update (or reset).
    pub fn update(&mut self) -> f64 {
        let now = self.clock.now_secs();
        let elapsed = (now - self.last_update_secs).max(0.0);
        self.last_update_secs = now;
        elapsed
    }
}

impl std::fmt::Debug for ElapsedTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElapsedTime")
            .field("last_update_secs", &self.last_update_secs)
            .finish()
    }
}

/// Fixed frame interval derived from a target rate.
#[derive(Debug, Clone, Copy)]
pub struct RateController {
    target_interval_ns: u64,
}

impl RateController {
    /// Create a controller targeting the given Hz rate. Zero is treated as 1 Hz.
    pub fn new(target_hz: u32) -> Self {
        Self {
            target_interval_ns: 1_000_000_000 / target_hz.max(1) as u64,
        }
    }

    /// Target interval between frames.
    pub fn interval(&self) -> Duration {
        Duration::from_nanos(self.target_interval_ns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monotonic_clock_elapsed() {
        let clock = MonotonicClock::start();
        // Should be very small but non-negative
        assert!(clock.now_secs() >= 0.0);
        assert!(clock.now_secs() < 1.0);
    }

    #[test]
    fn test_ns_to_secs_conversion() {
        assert!((MonotonicClock::ns_to_secs(1_500_000_000) - 1.5).abs() < 1e-9);
        assert_eq!(MonotonicClock::secs_to_ns(2.0), 2_000_000_000);
    }

    #[test]
    fn test_manual_clock_shared_between_clones() {
        let clock = ManualClock::new();
        let handle = clock.clone();
        assert_eq!(clock.now_secs(), 0.0);

        handle.advance(Duration::from_millis(250));
        assert!((clock.now_secs() - 0.25).abs() < 1e-9);

        handle.advance_secs(-1.0);
        assert!((clock.now_secs() - 0.25).abs() < 1e-9);

        handle.set_secs(3.0);
        assert!((clock.now_secs() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_elapsed_time() {
        let clock = ManualClock::new();
        let mut elapsed = ElapsedTime::new(Arc::new(clock.clone()));

        clock.advance_secs(0.5);
        assert!((elapsed.update() - 0.5).abs() < 1e-9);
        assert_eq!(elapsed.update(), 0.0);

        clock.advance_secs(1.0);
        elapsed.reset();
        assert_eq!(elapsed.update(), 0.0);
    }

    #[test]
    fn test_rate_controller() {
        assert_eq!(RateController::new(15).interval(), Duration::from_nanos(66_666_666));
        assert_eq!(RateController::new(1000).interval(), Duration::from_millis(1));
        assert_eq!(RateController::new(0).interval(), Duration::from_secs(1));
    }
}
