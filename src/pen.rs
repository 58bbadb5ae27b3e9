//! Pen behaviours.
//!
//! A [`Pen`] decides what style a new stroke is created with and how (or
//! whether) each pointer movement appends a point to the in-progress path.
//! [`ColouredPen`] records every movement; [`SpacedPen`] thins dense input
//! by enforcing a minimum gap between recorded points. [`PenSpec`] is the
//! JSON shape embedders use to select a pen at runtime.

#[cfg(test)]
#[path = "pen_test.rs"]
mod pen_test;

use serde::Deserialize;

use crate::consts::{DEFAULT_COLOUR, DEFAULT_SPACING};
use crate::input::PointerInput;
use crate::scene::{PathId, Scene, StrokeStyle};
use crate::surface::SurfaceState;

/// Strategy for turning pointer movement into path points.
pub trait Pen {
    /// Style options applied to a stroke created while this pen is active.
    fn options(&self) -> StrokeStyle;

    /// The pen's colour.
    fn colour(&self) -> &str;

    /// Handle one pointer movement during an active stroke: resolve the
    /// pointer position against `surface` and append it to `path` in
    /// `scene`, or skip it, at the pen's discretion.
    fn stroke(&self, input: PointerInput, scene: &mut dyn Scene, path: &PathId, surface: &SurfaceState);
}

/// Pen that records every pointer movement in its configured colour.
#[derive(Debug, Clone)]
pub struct ColouredPen {
    colour: String,
}

impl ColouredPen {
    #[must_use]
    pub fn new(colour: impl Into<String>) -> Self {
        Self { colour: colour.into() }
    }
}

impl Default for ColouredPen {
    fn default() -> Self {
        Self::new(DEFAULT_COLOUR)
    }
}

impl Pen for ColouredPen {
    fn options(&self) -> StrokeStyle {
        StrokeStyle::new(self.colour.clone())
    }

    fn colour(&self) -> &str {
        &self.colour
    }

    fn stroke(&self, input: PointerInput, scene: &mut dyn Scene, path: &PathId, surface: &SurfaceState) {
        scene.append_point(path, surface.pointer_position(input.page_x, input.page_y));
    }
}

/// Pen that skips movements closer than `spacing` surface units to the
/// last recorded point.
#[derive(Debug, Clone)]
pub struct SpacedPen {
    colour: String,
    spacing: f64,
}

impl SpacedPen {
    /// Negative spacing is clamped to zero, which records every movement.
    #[must_use]
    pub fn new(colour: impl Into<String>, spacing: f64) -> Self {
        Self { colour: colour.into(), spacing: spacing.max(0.0) }
    }
}

impl Default for SpacedPen {
    fn default() -> Self {
        Self::new(DEFAULT_COLOUR, DEFAULT_SPACING)
    }
}

impl Pen for SpacedPen {
    fn options(&self) -> StrokeStyle {
        StrokeStyle::new(self.colour.clone())
    }

    fn colour(&self) -> &str {
        &self.colour
    }

    fn stroke(&self, input: PointerInput, scene: &mut dyn Scene, path: &PathId, surface: &SurfaceState) {
        let point = surface.pointer_position(input.page_x, input.page_y);
        let far_enough = scene.last_point(path).map_or(true, |last| {
            let dx = point.x - last.x;
            let dy = point.y - last.y;
            dx * dx + dy * dy >= self.spacing * self.spacing
        });
        if far_enough {
            scene.append_point(path, point);
        }
    }
}

/// JSON description of a pen, as accepted by the board's `set_pen_spec`.
///
/// Every field is optional: `{}` selects the default coloured black pen.
#[derive(Debug, Clone, Deserialize)]
pub struct PenSpec {
    #[serde(default = "PenSpec::default_kind")]
    kind: String,
    #[serde(default = "PenSpec::default_colour")]
    colour: String,
    #[serde(default = "PenSpec::default_spacing")]
    spacing: f64,
}

impl PenSpec {
    fn default_kind() -> String {
        "coloured".to_string()
    }

    fn default_colour() -> String {
        DEFAULT_COLOUR.to_string()
    }

    fn default_spacing() -> f64 {
        DEFAULT_SPACING
    }
}

/// Construct the pen a spec describes, or `None` for an unknown kind.
#[must_use]
pub fn build(spec: &PenSpec) -> Option<Box<dyn Pen>> {
    match spec.kind.as_str() {
        "coloured" => Some(Box::new(ColouredPen::new(spec.colour.clone()))),
        "spaced" => Some(Box::new(SpacedPen::new(spec.colour.clone(), spec.spacing))),
        _ => None,
    }
}
