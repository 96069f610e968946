//! Drag sessions and container clamping.
//!
//! A drag captures the pointer and element positions at pointer-down and
//! derives every later position from the total pointer delta since then,
//! not from per-event increments, so rounding never accumulates. The result
//! is clamped so the element's measured box stays inside the container.
//!
//! Nothing here touches a rendering surface: the host measures both boxes and
//! passes them in as plain [`Size`]s.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use serde::{Deserialize, Serialize};

use crate::geom::{Point, Position, Size};

/// Reference frame of one drag gesture, from pointer-down to pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragSession {
    /// Pointer location at pointer-down.
    pub pointer_origin: Point,
    /// Element top-left at pointer-down.
    pub element_origin: Position,
    /// Cleared by [`DragSession::end`]; an ended session moves nothing.
    pub active: bool,
}

impl DragSession {
    /// Capture the reference frame for a new drag.
    #[must_use]
    pub fn begin(pointer: Point, element_position: Position) -> Self {
        Self { pointer_origin: pointer, element_origin: element_position, active: true }
    }

    /// New element position for the pointer at `pointer`.
    ///
    /// Returns `None` once the session has ended.
    #[must_use]
    pub fn move_to(&self, pointer: Point, container: Size, element: Size) -> Option<Position> {
        if !self.active {
            return None;
        }
        let (dx, dy) = pointer.delta_from(self.pointer_origin);
        let raw = Point::new(self.element_origin.x + dx, self.element_origin.y + dy);
        Some(constrain(raw, container, element))
    }

    /// Mark the session finished.
    pub fn end(&mut self) {
        self.active = false;
    }
}

/// Clamp a raw top-left so `element` stays inside `container`.
///
/// On an axis where the element is larger than the container the result is 0.
#[must_use]
pub fn constrain(raw: Position, container: Size, element: Size) -> Position {
    let max = container.max_offset(element);
    Point::new(clamp_axis(raw.x, max.x), clamp_axis(raw.y, max.y))
}

/// Clamp `value` into `[0, max]`; a NaN value lands on 0.
fn clamp_axis(value: f64, max: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.min(max).max(0.0)
}
