//! Robot Cameraman Tracking Core
//!
//! Turns one target bounding box per video frame into pan/tilt/zoom speeds:
//! - **Destination:** The zone the target should be framed in
//! - **Strategies:** Speed laws that steer the target into that zone
//! - **Loss decay:** Gradual slow-down once the target disappears
//! - **Mode manager:** Arbitrates searching, aligning, tracking and manual control
//!
//! This crate is pure computation with no I/O and no blocking.
//! Time is only read through an injected clock.

pub mod configurable;
pub mod destination;
pub mod mode_manager;
pub mod search;
pub mod simple;
pub mod stop_if_lost;
pub mod strategy;

pub use configurable::ConfigurableTrackingStrategy;
pub use destination::Destination;
pub use mode_manager::{CameramanMode, CameramanModeManager};
pub use search::RotateSearchTargetStrategy;
pub use simple::SimpleTrackingStrategy;
pub use stop_if_lost::StopIfLostTrackingStrategy;
pub use strategy::{AlignTrackingStrategy, Strategy, TrackingStrategy};
