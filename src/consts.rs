//! Shared numeric and style constants for the sketchpad crate.

// ── Window fitting ──────────────────────────────────────────────

/// Horizontal gap between the surface and the window edge, in CSS pixels.
pub const SURFACE_MARGIN_X: f64 = 10.0;

/// Vertical gap between the surface and the window edge, in CSS pixels.
pub const SURFACE_MARGIN_Y: f64 = 10.0;

// ── Strokes ─────────────────────────────────────────────────────

/// Tolerance passed to path simplification when a stroke completes,
/// in surface units.
pub const SIMPLIFY_TOLERANCE: f64 = 10.0;

/// Colour of the default pen.
pub const DEFAULT_COLOUR: &str = "black";

/// Minimum gap between appended points for a spaced pen, in surface units,
/// when the host does not supply one.
pub const DEFAULT_SPACING: f64 = 4.0;

/// Line width for rendered strokes, in backing-store pixels.
pub const STROKE_WIDTH: f64 = 2.0;
