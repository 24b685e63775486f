//! The destination zone: where and how large the target should appear.
//!
//! The zone consists of
//! - the aim point at the frame center, which the speed laws measure against,
//! - a small aligned box (side `2 × variance`) around the aim point,
//! - a max-size box spanning the frame minus 30% horizontal and 20% vertical
//!   padding on each side, and a min-size box `2 × variance` smaller per axis.
//!
//! Only the sizes of the min/max boxes matter for zoom decisions; their
//! position follows the tracked target so they can be drawn around it.

use cameraman_model::geometry::{BoundingBox, FrameSize, Point};

/// Fraction of the frame width left free on each side of the max-size box.
const X_PADDING: f64 = 0.3;

/// Fraction of the frame height left free on each side of the max-size box.
const Y_PADDING: f64 = 0.2;

#[derive(Debug, Clone, PartialEq)]
pub struct Destination {
    frame_size: FrameSize,
    variance: f64,
    center: Point,
    aligned_box: BoundingBox,
    size_box_center: Point,
    min_size_box: BoundingBox,
    max_size_box: BoundingBox,
}

impl Destination {
    /// Create the zone for a frame of the given size.
    ///
    /// A negative variance inverts the min/max relation; callers validate it.
    pub fn new(frame_size: FrameSize, variance: f64) -> Self {
        let center = frame_size.center();
        let max_width = frame_size.width - 2.0 * X_PADDING * frame_size.width;
        let max_height = frame_size.height - 2.0 * Y_PADDING * frame_size.height;
        let mut destination = Self {
            frame_size,
            variance,
            center,
            aligned_box: BoundingBox::from_center_and_size(center, variance * 2.0, variance * 2.0),
            size_box_center: center,
            min_size_box: BoundingBox::new(
                0.0,
                0.0,
                max_width - 2.0 * variance,
                max_height - 2.0 * variance,
            ),
            max_size_box: BoundingBox::new(0.0, 0.0, max_width, max_height),
        };
        destination.update_size_box_center(center.x, center.y);
        destination
    }

    /// Move the min/max size boxes to `(x, y)` without changing their size.
    ///
    /// Called every frame a target is tracked.
    pub fn update_size_box_center(&mut self, x: f64, y: f64) {
        self.size_box_center.set(x, y);
        self.min_size_box.set_center(x, y);
        self.max_size_box.set_center(x, y);
    }

    /// Move the whole zone (aim point, aligned box and size boxes) to `(x, y)`.
    pub fn recenter(&mut self, x: f64, y: f64) {
        self.center.set(x, y);
        self.aligned_box.set_center(x, y);
        self.update_size_box_center(x, y);
    }

    pub fn frame_size(&self) -> FrameSize {
        self.frame_size
    }

    /// Dead-band radius in pixels.
    pub fn variance(&self) -> f64 {
        self.variance
    }

    /// The aim point.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Box of side `2 × variance` around the aim point.
    pub fn aligned_box(&self) -> &BoundingBox {
        &self.aligned_box
    }

    /// Common center of the min/max size boxes.
    pub fn size_box_center(&self) -> Point {
        self.size_box_center
    }

    pub fn min_size_box(&self) -> &BoundingBox {
        &self.min_size_box
    }

    pub fn max_size_box(&self) -> &BoundingBox {
        &self.max_size_box
    }
}
