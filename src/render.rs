//! Rendering: replays the stroke scene onto a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`]
//! for drawing. It receives a read-only view of the path store and produces
//! pixels; it does not mutate any application state.
//!
//! Stroke points are already in backing-store pixels (the pointer transform
//! applies the resolution on the way in), so everything draws under the
//! identity transform.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::STROKE_WIDTH;
use crate::scene::{PathStore, Stroke};

/// Clear the backing store and draw every stroke, oldest first.
///
/// `width` and `height` are the canvas backing-store dimensions in device
/// pixels.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    store: &PathStore,
    width: f64,
    height: f64,
) -> Result<(), JsValue> {
    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, width, height);

    for stroke in store.strokes() {
        draw_stroke(ctx, stroke);
    }
    Ok(())
}

/// Draw one stroke as a round-capped polyline in its own colour.
fn draw_stroke(ctx: &CanvasRenderingContext2d, stroke: &Stroke) {
    let [first, rest @ ..] = stroke.points.as_slice() else {
        return;
    };

    ctx.set_stroke_style_str(&stroke.style.colour);
    ctx.set_line_width(STROKE_WIDTH);
    ctx.set_line_cap("round");
    ctx.set_line_join("round");

    ctx.begin_path();
    ctx.move_to(first.x, first.y);
    for point in rest {
        ctx.line_to(point.x, point.y);
    }
    ctx.stroke();
}
