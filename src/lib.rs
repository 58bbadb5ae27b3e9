//! Pointer-drawn vector strokes on an HTML canvas.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! full lifecycle of a drawing surface: sizing the canvas element to the
//! window, translating page-space pointer events into surface coordinates,
//! running the stroke state machine through pluggable pens, simplifying
//! finished strokes, and repainting the scene. The host JavaScript layer only
//! constructs a [`board::Board`] around a canvas element; event wiring and
//! teardown happen here.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`board`] | Browser-facing [`board::Board`] and testable [`board::BoardCore`] |
//! | [`pen`] | Pen behaviours: stroke styling and per-move append policy |
//! | [`scene`] | Path store, stroke types, and simplification |
//! | [`surface`] | Surface geometry: offset, resolution, fit-to-window |
//! | [`input`] | Pointer input data and the stroke state machine |
//! | [`render`] | Scene rendering onto the 2d context |
//! | [`dom`] | Thin web-sys helpers (window, context, sizing) |
//! | [`consts`] | Shared numeric and style constants |

use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;

pub mod board;
pub mod consts;
pub mod dom;
pub mod input;
pub mod pen;
pub mod render;
pub mod scene;
pub mod surface;

/// Module entry point: install the panic hook and the console logger.
///
/// # Errors
///
/// Returns `Err` if a logger was already installed.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug)
        .map_err(|err| JsValue::from_str(&err.to_string()))?;
    Ok(())
}
