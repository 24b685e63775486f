//! Robot Cameraman Model
//!
//! Defines the data contracts shared by the control core and its collaborators:
//! - **Geometry:** Points, bounding boxes, and frame sizes in pixel space
//! - **Speeds:** The pan/tilt/zoom command produced once per frame
//! - **Modes:** Selectors for the configurable speed response curves
//! - **Frames:** Per-frame detection input and its JSONL encoding
//! - **Controller:** The actuator sink that consumes camera speeds

pub mod controller;
pub mod frame;
pub mod geometry;
pub mod modes;
pub mod speeds;

pub use controller::*;
pub use frame::*;
pub use geometry::*;
pub use modes::*;
pub use speeds::*;
