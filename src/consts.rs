//! Shared constants for the editor crate.

// ── Font size ───────────────────────────────────────────────────

/// Smallest font size the size control accepts, in pixels.
pub const MIN_FONT_SIZE: u32 = 10;

/// Largest font size the size control accepts, in pixels.
pub const MAX_FONT_SIZE: u32 = 50;

/// Font size of a fresh session, in pixels.
pub const DEFAULT_FONT_SIZE: u32 = 20;

// ── Session seed ────────────────────────────────────────────────

/// Text shown when a session starts.
pub const DEFAULT_TEXT: &str = "Abhinav";

/// Initial left offset of the text element inside the canvas.
pub const DEFAULT_START_X: f64 = 50.0;

/// Initial top offset of the text element inside the canvas.
pub const DEFAULT_START_Y: f64 = 50.0;

/// Canvas width before the host reports a measurement (20rem at 16px).
pub const DEFAULT_CANVAS_WIDTH: f64 = 320.0;

/// Canvas height before the host reports a measurement.
pub const DEFAULT_CANVAS_HEIGHT: f64 = 320.0;
