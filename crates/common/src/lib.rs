//! Robot Cameraman Common Utilities
//!
//! Shared infrastructure for all cameraman crates:
//! - Error types and result aliases
//! - Clocks used for loss decay and acceleration limiting
//! - Tracing/logging initialization
//! - Configuration loading

pub mod clock;
pub mod config;
pub mod error;
pub mod logging;

pub use clock::*;
pub use config::*;
pub use error::*;
