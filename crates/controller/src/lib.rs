//! Robot Cameraman Controllers
//!
//! Implementations of the [`CameraController`](cameraman_model::CameraController)
//! contract:
//! - **Smooth:** Acceleration-limited pan/tilt with edge-triggered zoom commands
//! - **Recording:** Keeps every command, for offline replays and tests
//!
//! Hardware access goes through the [`GimbalDriver`] and [`ZoomDriver`]
//! traits; no transport lives in this crate.

pub mod driver;
pub mod recording;
pub mod smooth;
pub mod speed_manager;

pub use driver::{GimbalDriver, ZoomDriver};
pub use recording::RecordingCameraController;
pub use smooth::SmoothCameraController;
pub use speed_manager::SpeedManager;
