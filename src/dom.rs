//! DOM helpers: window acquisition, canvas sizing, pointer-event reads.
//!
//! A thin typed layer over web-sys. Every fallible call surfaces as
//! `Result<_, JsValue>` for callers to propagate.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, PointerEvent, Window};

use crate::input::PointerInput;
use crate::surface::{FitPlan, SurfaceState};

/// The global window.
///
/// # Errors
///
/// Returns `Err` outside a browser context.
pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window available"))
}

/// The element's 2d rendering context.
///
/// # Errors
///
/// Returns `Err` if the canvas cannot produce a `2d` context.
pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?;
    Ok(ctx.dyn_into::<CanvasRenderingContext2d>()?)
}

/// Size `canvas` to the window and refresh `surface` from the resulting
/// layout: CSS size on the element style, backing store in device pixels,
/// then the element offset re-read from the settled layout.
///
/// # Errors
///
/// Returns `Err` if the window dimensions are unavailable or the element
/// style cannot be written.
pub fn fit_canvas(
    window: &Window,
    canvas: &HtmlCanvasElement,
    surface: &mut SurfaceState,
) -> Result<(), JsValue> {
    let inner_width = window
        .inner_width()?
        .as_f64()
        .ok_or_else(|| JsValue::from_str("window.innerWidth is not a number"))?;
    let inner_height = window
        .inner_height()?
        .as_f64()
        .ok_or_else(|| JsValue::from_str("window.innerHeight is not a number"))?;

    let plan = FitPlan::compute(inner_width, inner_height, surface.resolution);

    let style = canvas.style();
    style.set_property("width", &format!("{}px", plan.css_width))?;
    style.set_property("height", &format!("{}px", plan.css_height))?;
    canvas.set_width(to_pixels(plan.device_width));
    canvas.set_height(to_pixels(plan.device_height));

    // Re-read last: the sizing above may have reflowed the element.
    surface.offset_x = f64::from(canvas.offset_left());
    surface.offset_y = f64::from(canvas.offset_top());
    Ok(())
}

/// Page-space pointer coordinates from a DOM pointer event.
#[must_use]
pub fn pointer_input(event: &PointerEvent) -> PointerInput {
    PointerInput::new(f64::from(event.page_x()), f64::from(event.page_y()))
}

/// Device-pixel dimension as the canvas attribute integer.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_pixels(value: f64) -> u32 {
    value.round().max(0.0) as u32
}
