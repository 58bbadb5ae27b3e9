#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use crate::consts::{SURFACE_MARGIN_X, SURFACE_MARGIN_Y};

/// A point in surface-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Where the surface sits on the page and how dense its backing store is.
///
/// `offset_x` / `offset_y` are the element's top-left corner in page
/// coordinates. `resolution` is the ratio of backing-store pixels to CSS
/// pixels (1.0 = no scaling). The offset goes stale on any layout change and
/// must be refreshed (via a fit) before converting pointer coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceState {
    pub offset_x: f64,
    pub offset_y: f64,
    pub resolution: f64,
}

impl Default for SurfaceState {
    fn default() -> Self {
        Self { offset_x: 0.0, offset_y: 0.0, resolution: 1.0 }
    }
}

impl SurfaceState {
    /// Convert page-relative pointer coordinates to surface-local coordinates.
    #[must_use]
    pub fn pointer_position(&self, page_x: f64, page_y: f64) -> Position {
        Position {
            x: (page_x - self.offset_x) * self.resolution,
            y: (page_y - self.offset_y) * self.resolution,
        }
    }
}

/// Pixel sizes produced by one fit-to-window pass.
///
/// CSS size is what the element occupies on the page; device size is the
/// backing-store pixel count the drawing context addresses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitPlan {
    pub css_width: f64,
    pub css_height: f64,
    pub device_width: f64,
    pub device_height: f64,
}

impl FitPlan {
    /// Size the surface to the window: CSS size is the window inner size less
    /// the fixed margins, and the backing store scales by the resolution
    /// factor.
    #[must_use]
    pub fn compute(inner_width: f64, inner_height: f64, resolution: f64) -> Self {
        let css_width = inner_width - SURFACE_MARGIN_X;
        let css_height = inner_height - SURFACE_MARGIN_Y;
        Self {
            css_width,
            css_height,
            device_width: css_width * resolution,
            device_height: css_height * resolution,
        }
    }
}
