use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Event, EventTarget, HtmlCanvasElement, PointerEvent};

use crate::consts::SIMPLIFY_TOLERANCE;
use crate::dom;
use crate::input::{InputState, PointerInput};
use crate::pen::{self, ColouredPen, Pen, PenSpec};
use crate::render;
use crate::scene::{PathStore, Scene};
use crate::surface::SurfaceState;

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    RenderNeeded,
}

/// Core board state — the pen and the stroke lifecycle.
///
/// Separated from `Board` so it can be tested without WASM/browser
/// dependencies, and generic over [`Scene`] so strokes can live in any
/// vector-path collaborator.
pub struct BoardCore<S: Scene> {
    pub surface: SurfaceState,
    pub scene: S,
    pub input: InputState,
    pen: Box<dyn Pen>,
}

impl<S: Scene + Default> Default for BoardCore<S> {
    fn default() -> Self {
        Self {
            surface: SurfaceState::default(),
            scene: S::default(),
            input: InputState::default(),
            pen: Box::new(ColouredPen::default()),
        }
    }
}

impl<S: Scene> BoardCore<S> {
    #[must_use]
    pub fn new() -> Self
    where
        S: Default,
    {
        Self::default()
    }

    // --- Pointer events ---

    /// Begin a stroke: create an empty path styled by the active pen.
    ///
    /// A pointer-down while a stroke is already in progress abandons that
    /// stroke where it stands and opens a fresh one.
    pub fn on_pointer_down(&mut self, input: PointerInput) -> Action {
        let path = self.scene.create_path(self.pen.options());
        self.input = InputState::Stroking { path };
        log::debug!("stroke {path} started at page ({}, {})", input.page_x, input.page_y);
        Action::RenderNeeded
    }

    /// Route a movement to the active pen. Movements while idle are ignored.
    pub fn on_pointer_move(&mut self, input: PointerInput) -> Action {
        let InputState::Stroking { path } = self.input else {
            return Action::None;
        };
        self.pen.stroke(input, &mut self.scene, &path, &self.surface);
        Action::RenderNeeded
    }

    /// Complete the in-progress stroke: simplify it and return to idle.
    ///
    /// Both `pointerup` and `pointercancel` land here. A release while idle
    /// is ignored.
    pub fn on_pointer_up(&mut self) -> Action {
        let InputState::Stroking { path } = self.input else {
            return Action::None;
        };
        let before = self.scene.point_count(&path);
        self.scene.simplify(&path, SIMPLIFY_TOLERANCE);
        let after = self.scene.point_count(&path);
        log::debug!("stroke {path} finished: {before} -> {after} points");
        self.input = InputState::Idle;
        Action::RenderNeeded
    }

    // --- Pen ---

    /// Select the pen used for subsequent strokes.
    ///
    /// A stroke already in progress keeps the style it was created with;
    /// its remaining movements follow the new pen's append policy.
    pub fn set_pen(&mut self, pen: Box<dyn Pen>) {
        self.pen = pen;
    }

    // --- Queries ---

    /// Whether a stroke is currently in progress.
    #[must_use]
    pub fn is_stroking(&self) -> bool {
        matches!(self.input, InputState::Stroking { .. })
    }

    /// The active pen's colour.
    #[must_use]
    pub fn pen_colour(&self) -> &str {
        self.pen.colour()
    }
}

/// The browser-facing drawing surface. Wraps [`BoardCore`] and owns the
/// canvas element, its 2d context, and the event listeners.
///
/// Listeners registered in [`Board::new`] are scoped to the instance:
/// dropping the board (calling `free()` from JS) removes them all.
#[wasm_bindgen]
pub struct Board {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    core: Rc<RefCell<BoardCore<PathStore>>>,
    listeners: Vec<ListenerGuard>,
}

#[wasm_bindgen]
impl Board {
    /// Bind a board to a canvas element: read the device pixel ratio, size
    /// the canvas to the window, and start listening for pointer, resize,
    /// and context-menu events.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the element has no 2d context or a listener cannot
    /// be registered.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<Board, JsValue> {
        let ctx = dom::context_2d(&canvas)?;
        let core = Rc::new(RefCell::new(BoardCore::new()));
        core.borrow_mut().surface.resolution = dom::window()?.device_pixel_ratio();

        let mut board = Board { canvas, ctx, core, listeners: Vec::new() };
        board.fit_to_window()?;
        board.wire_listeners()?;
        Ok(board)
    }

    /// Size the canvas to the window, re-read the element offset, and
    /// repaint. Call again after any layout change that moves the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the window or its dimensions are unavailable.
    pub fn fit_to_window(&self) -> Result<(), JsValue> {
        refit(&self.canvas, &self.core)?;
        redraw(&self.canvas, &self.ctx, &self.core);
        Ok(())
    }

    /// Repaint every stroke.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let core = self.core.borrow();
        render::draw(
            &self.ctx,
            &core.scene,
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        )
    }

    /// Select the pen for subsequent strokes from a JSON description, e.g.
    /// `{"kind": "spaced", "colour": "red", "spacing": 6}`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the JSON does not parse or names an unknown kind.
    pub fn set_pen_spec(&self, json: &str) -> Result<(), JsValue> {
        let spec: PenSpec =
            serde_json::from_str(json).map_err(|err| JsValue::from_str(&err.to_string()))?;
        let pen = pen::build(&spec).ok_or_else(|| JsValue::from_str("unknown pen kind"))?;
        self.core.borrow_mut().set_pen(pen);
        Ok(())
    }

    /// Whether a stroke is currently in progress.
    #[must_use]
    pub fn is_stroking(&self) -> bool {
        self.core.borrow().is_stroking()
    }

    /// Number of strokes on the board.
    #[must_use]
    pub fn stroke_count(&self) -> usize {
        self.core.borrow().scene.len()
    }

    /// The active pen's colour.
    #[must_use]
    pub fn pen_colour(&self) -> String {
        self.core.borrow().pen_colour().to_string()
    }

    /// Attach an extra event listener to the canvas element, scoped to this
    /// board: the handler is removed again when the board is dropped.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the listener cannot be registered.
    pub fn add_listener(&mut self, name: &str, handler: &js_sys::Function) -> Result<(), JsValue> {
        self.listeners.push(ListenerGuard::from_function(self.canvas.as_ref(), name, handler)?);
        Ok(())
    }
}

impl Board {
    fn wire_listeners(&mut self) -> Result<(), JsValue> {
        // pointerdown: capture the pointer and open a stroke.
        {
            let canvas = self.canvas.clone();
            let ctx = self.ctx.clone();
            let core = Rc::clone(&self.core);
            let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
                let event: PointerEvent = event.unchecked_into();
                if let Err(err) = canvas.set_pointer_capture(event.pointer_id()) {
                    log::warn!("pointer capture failed: {err:?}");
                }
                let action = core.borrow_mut().on_pointer_down(dom::pointer_input(&event));
                if action == Action::RenderNeeded {
                    redraw(&canvas, &ctx, &core);
                }
            });
            self.listeners.push(ListenerGuard::from_closure(self.canvas.as_ref(), "pointerdown", closure)?);
        }

        // pointermove: extend the stroke through the active pen.
        {
            let canvas = self.canvas.clone();
            let ctx = self.ctx.clone();
            let core = Rc::clone(&self.core);
            let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
                let event: PointerEvent = event.unchecked_into();
                let action = core.borrow_mut().on_pointer_move(dom::pointer_input(&event));
                if action == Action::RenderNeeded {
                    redraw(&canvas, &ctx, &core);
                }
            });
            self.listeners.push(ListenerGuard::from_closure(self.canvas.as_ref(), "pointermove", closure)?);
        }

        // pointerup / pointercancel: both complete the stroke.
        for name in ["pointerup", "pointercancel"] {
            let canvas = self.canvas.clone();
            let ctx = self.ctx.clone();
            let core = Rc::clone(&self.core);
            let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
                let action = core.borrow_mut().on_pointer_up();
                if action == Action::RenderNeeded {
                    redraw(&canvas, &ctx, &core);
                }
            });
            self.listeners.push(ListenerGuard::from_closure(self.canvas.as_ref(), name, closure)?);
        }

        // contextmenu: keep right-click from interrupting a stroke.
        {
            let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
                event.prevent_default();
            });
            self.listeners.push(ListenerGuard::from_closure(self.canvas.as_ref(), "contextmenu", closure)?);
        }

        // resize: refit the canvas and repaint.
        {
            let window = dom::window()?;
            let canvas = self.canvas.clone();
            let ctx = self.ctx.clone();
            let core = Rc::clone(&self.core);
            let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
                if let Err(err) = refit(&canvas, &core) {
                    log::warn!("refit after resize failed: {err:?}");
                }
                redraw(&canvas, &ctx, &core);
            });
            self.listeners.push(ListenerGuard::from_closure(window.as_ref(), "resize", closure)?);
        }

        Ok(())
    }
}

/// An event listener bound to its target, removed again on drop.
struct ListenerGuard {
    target: EventTarget,
    name: String,
    handler: js_sys::Function,
    /// Keeps an internally created closure alive for the handler's lifetime.
    _closure: Option<Closure<dyn FnMut(Event)>>,
}

impl ListenerGuard {
    fn from_closure(
        target: &EventTarget,
        name: &str,
        closure: Closure<dyn FnMut(Event)>,
    ) -> Result<Self, JsValue> {
        let handler = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
        target.add_event_listener_with_callback(name, &handler)?;
        Ok(Self {
            target: target.clone(),
            name: name.to_string(),
            handler,
            _closure: Some(closure),
        })
    }

    fn from_function(
        target: &EventTarget,
        name: &str,
        handler: &js_sys::Function,
    ) -> Result<Self, JsValue> {
        target.add_event_listener_with_callback(name, handler)?;
        Ok(Self {
            target: target.clone(),
            name: name.to_string(),
            handler: handler.clone(),
            _closure: None,
        })
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let removed = self
            .target
            .remove_event_listener_with_callback(&self.name, &self.handler);
        if let Err(err) = removed {
            log::warn!("failed to remove {} listener: {err:?}", self.name);
        }
    }
}

/// Re-read window geometry into the canvas and the cached surface state.
fn refit(canvas: &HtmlCanvasElement, core: &Rc<RefCell<BoardCore<PathStore>>>) -> Result<(), JsValue> {
    let window = dom::window()?;
    let mut core = core.borrow_mut();
    dom::fit_canvas(&window, canvas, &mut core.surface)
}

/// Repaint the whole scene, logging instead of propagating on failure so
/// event closures stay infallible.
fn redraw(
    canvas: &HtmlCanvasElement,
    ctx: &CanvasRenderingContext2d,
    core: &Rc<RefCell<BoardCore<PathStore>>>,
) {
    let core = core.borrow();
    let result = render::draw(ctx, &core.scene, f64::from(canvas.width()), f64::from(canvas.height()));
    if let Err(err) = result {
        log::warn!("render failed: {err:?}");
    }
}
