//! Input model: plain pointer event data and the stroke gesture state machine.
//!
//! `PointerInput` carries the page-relative coordinates extracted from a DOM
//! pointer event, so the state machine never sees browser types. `InputState`
//! is the gesture being tracked between pointer-down and pointer-up.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::scene::PathId;

/// Page-relative coordinates of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    pub page_x: f64,
    pub page_y: f64,
}

impl PointerInput {
    #[must_use]
    pub fn new(page_x: f64, page_y: f64) -> Self {
        Self { page_x, page_y }
    }
}

/// Internal state for the stroke state machine.
///
/// The active variant carries the scene path currently receiving points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputState {
    /// No stroke in progress; waiting for the next pointer-down.
    Idle,
    /// The user is drawing: points flow into the referenced path until
    /// pointer-up.
    Stroking {
        /// Id of the in-progress path in the scene.
        path: PathId,
    },
}

impl Default for InputState {
    fn default() -> Self {
        Self::Idle
    }
}
