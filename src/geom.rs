#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

/// A pointer location in client (CSS pixel) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Vector from `origin` to `self`.
    #[must_use]
    pub fn delta_from(self, origin: Point) -> (f64, f64) {
        (self.x - origin.x, self.y - origin.y)
    }
}

/// Top-left offset of the text element, relative to the canvas top-left.
pub type Position = Point;

/// Width and height of a measured box, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Furthest top-left an `inner` box can take while staying inside `self`.
    ///
    /// Axes where `inner` is larger than `self` collapse to 0.
    #[must_use]
    pub fn max_offset(self, inner: Size) -> Point {
        Point {
            x: (self.width - inner.width).max(0.0),
            y: (self.height - inner.height).max(0.0),
        }
    }
}
