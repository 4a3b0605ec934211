//! Editor engine: routes pointer and keyboard input to the geometry engines
//! and stores the results in the radius state.
//!
//! [`EngineCore`] holds all logic and is testable without a browser. Its
//! handlers return [`Action`]s describing what the host must do next:
//! register or release the window-level drag listeners, and re-render.
//! [`Engine`] is the browser wrapper; it owns the preview element, reads its
//! bounds on every event, and realises the listener actions with a guard
//! that removes its listeners when dropped.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event, HtmlElement, KeyboardEvent, MouseEvent, TouchEvent, Window};

use crate::appearance::PreviewAppearance;
use crate::coords::{Point, PointerSample, Rect, normalized_pointer_position};
use crate::error::EngineError;
use crate::handles::{HandleId, HandleView};
use crate::input::{InputState, Key};
use crate::preset::{Preset, presets_for_mode};
use crate::radius::{ControlMode, RadiusState, Unit};
use crate::{corner, edge};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A drag session began; window move/release listeners must be registered.
    AttachDragListeners,
    /// The drag session ended; its listeners must be released.
    DetachDragListeners,
    /// A handle's stored value changed.
    ValueChanged { handle: HandleId, value: f64 },
    /// Derived output (CSS, handle positions) must be re-read.
    RenderNeeded,
}

/// Core engine state: all logic that does not depend on the DOM.
#[derive(Debug, Clone, Default)]
pub struct EngineCore {
    pub state: RadiusState,
    pub input: InputState,
    /// Current screen bounds of the preview element.
    pub bounds: Rect,
    pub appearance: PreviewAppearance,
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_state(state: RadiusState) -> Self {
        Self { state, ..Self::default() }
    }

    // --- Data inputs ---

    /// Record the preview element's latest screen bounds.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    pub fn set_mode(&mut self, mode: ControlMode) {
        self.state.set_mode(mode);
    }

    pub fn set_unit(&mut self, unit: Unit) {
        self.state.set_unit(unit);
    }

    pub fn apply_preset(&mut self, preset: &Preset) {
        self.state.apply_preset(preset);
    }

    // --- Input events ---

    /// Begin dragging `handle`. Any session already in progress is ended
    /// first, so its listeners are released before new ones are attached.
    pub fn on_pointer_down(&mut self, handle: HandleId) -> Vec<Action> {
        let mut actions = Vec::with_capacity(2);
        if let Some(previous) = self.input.dragging() {
            tracing::debug!(%previous, "drag superseded by new press");
            actions.push(Action::DetachDragListeners);
        }
        tracing::debug!(%handle, "drag started");
        self.input = InputState::Dragging { handle };
        actions.push(Action::AttachDragListeners);
        actions
    }

    /// Recompute the dragged handle's value from a pointer sample.
    ///
    /// Ignored while idle or while the preview bounds are degenerate.
    pub fn on_pointer_move(&mut self, sample: &PointerSample) -> Vec<Action> {
        let Some(handle) = self.input.dragging() else {
            return Vec::new();
        };
        if self.bounds.is_degenerate() {
            tracing::debug!(%handle, "move ignored: preview has no area");
            return Vec::new();
        }
        let position = normalized_pointer_position(sample, &self.bounds);
        let value = compute_value(handle, position);
        self.store(handle, value)
    }

    /// End the drag session, if one is active.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        match self.input.dragging() {
            Some(handle) => {
                tracing::debug!(%handle, "drag ended");
                self.input = InputState::Idle;
                vec![Action::DetachDragListeners]
            }
            None => Vec::new(),
        }
    }

    /// Step a focused handle with the arrow keys. Other keys are ignored.
    pub fn on_key_down(&mut self, handle: HandleId, key: &Key) -> Vec<Action> {
        let Some(step) = key.step() else {
            return Vec::new();
        };
        let current = self.state.handle_value(handle);
        let value = match handle {
            HandleId::Edge(_) => edge::adjust_by_keyboard(current, step),
            HandleId::Corner(..) => corner::adjust_by_keyboard(current, step),
        };
        self.store(handle, value)
    }

    #[allow(clippy::float_cmp)]
    fn store(&mut self, handle: HandleId, value: f64) -> Vec<Action> {
        if self.state.handle_value(handle) == value {
            return Vec::new();
        }
        self.state.set_handle_value(handle, value);
        vec![Action::ValueChanged { handle, value }, Action::RenderNeeded]
    }

    // --- Queries ---

    #[must_use]
    pub fn dragging(&self) -> Option<HandleId> {
        self.input.dragging()
    }

    #[must_use]
    pub fn css_value(&self) -> String {
        self.state.compute_css_value()
    }

    #[must_use]
    pub fn css_declaration(&self) -> String {
        self.state.compute_css_declaration()
    }

    /// Handle view models for the active mode.
    #[must_use]
    pub fn handles(&self) -> Vec<HandleView> {
        self.state.handles()
    }

    /// Presets offered for the active mode.
    #[must_use]
    pub fn presets(&self) -> &'static [Preset] {
        presets_for_mode(self.state.mode)
    }

    #[must_use]
    pub fn preview_css(&self) -> String {
        self.appearance.preview_css(&self.state)
    }
}

/// Percentage for `handle` at a normalized pointer position.
#[must_use]
pub fn compute_value(handle: HandleId, position: Point) -> f64 {
    match handle {
        HandleId::Edge(e) => edge::compute_value(e, position),
        HandleId::Corner(c, a) => corner::compute_value(c, a, position),
    }
}

// =============================================================================
// BROWSER WRAPPER
// =============================================================================

struct Shared {
    core: RefCell<EngineCore>,
    preview: HtmlElement,
    listeners: RefCell<Option<DragListeners>>,
    on_change: Box<dyn Fn()>,
}

/// The browser engine. Wraps `EngineCore` and owns the preview element.
pub struct Engine {
    shared: Rc<Shared>,
}

impl Engine {
    /// Create an engine bound to `preview`. `on_change` runs after every
    /// event that changed a value.
    #[must_use]
    pub fn new(preview: HtmlElement, on_change: impl Fn() + 'static) -> Self {
        let shared = Shared {
            core: RefCell::new(EngineCore::new()),
            preview,
            listeners: RefCell::new(None),
            on_change: Box::new(on_change),
        };
        Self { shared: Rc::new(shared) }
    }

    /// Pointer-down (mouse or touch) on a handle element.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] if the window listeners cannot be registered.
    pub fn start_drag(&self, handle: HandleId, event: &Event) -> Result<(), EngineError> {
        event.prevent_default();
        refresh_bounds(&self.shared);
        let actions = self.shared.core.borrow_mut().on_pointer_down(handle);
        dispatch(&self.shared, actions)
    }

    /// Keydown on a focused handle element.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] if a resulting action cannot be carried out.
    pub fn key_down(&self, handle: HandleId, event: &KeyboardEvent) -> Result<(), EngineError> {
        let key = Key::new(event.key());
        let actions = self.shared.core.borrow_mut().on_key_down(handle, &key);
        if key.step().is_some() {
            event.prevent_default();
        }
        dispatch(&self.shared, actions)
    }

    /// Mutate the state outside of pointer input (mode, unit, preset) and
    /// notify the host.
    pub fn update<R>(&self, f: impl FnOnce(&mut EngineCore) -> R) -> R {
        let out = f(&mut self.shared.core.borrow_mut());
        (self.shared.on_change)();
        out
    }

    /// Read the current state.
    pub fn read<R>(&self, f: impl FnOnce(&EngineCore) -> R) -> R {
        f(&self.shared.core.borrow())
    }

    #[must_use]
    pub fn css_declaration(&self) -> String {
        self.read(EngineCore::css_declaration)
    }

    #[must_use]
    pub fn handles(&self) -> Vec<HandleView> {
        self.read(EngineCore::handles)
    }
}

fn refresh_bounds(shared: &Shared) {
    let r = shared.preview.get_bounding_client_rect();
    shared.core.borrow_mut().set_bounds(Rect::new(r.left(), r.top(), r.width(), r.height()));
}

fn dispatch(shared: &Rc<Shared>, actions: Vec<Action>) -> Result<(), EngineError> {
    let mut render = false;
    for action in actions {
        match action {
            Action::AttachDragListeners => {
                let listeners = DragListeners::attach(shared)?;
                let stale = shared.listeners.borrow_mut().replace(listeners);
                drop(stale);
            }
            Action::DetachDragListeners => {
                let stale = shared.listeners.borrow_mut().take();
                drop(stale);
            }
            Action::ValueChanged { .. } | Action::RenderNeeded => render = true,
        }
    }
    if render {
        (shared.on_change)();
    }
    Ok(())
}

fn on_drag_move(shared: &Rc<Shared>, sample: &PointerSample) {
    refresh_bounds(shared);
    let actions = shared.core.borrow_mut().on_pointer_move(sample);
    if let Err(err) = dispatch(shared, actions) {
        tracing::warn!(%err, "drag move not applied");
    }
}

fn on_drag_release(shared: &Rc<Shared>) {
    let actions = shared.core.borrow_mut().on_pointer_up();
    if let Err(err) = dispatch(shared, actions) {
        tracing::warn!(%err, "drag release not applied");
    }
}

fn mouse_sample(ev: &MouseEvent) -> PointerSample {
    PointerSample::Mouse(Point::new(f64::from(ev.client_x()), f64::from(ev.client_y())))
}

fn touch_sample(ev: &TouchEvent) -> PointerSample {
    let first = ev.touches().get(0).map(|t| Point::new(f64::from(t.client_x()), f64::from(t.client_y())));
    PointerSample::Touch(first.into_iter().collect())
}

/// Window listeners for one drag session. Registered on construction,
/// removed on drop.
struct DragListeners {
    window: Window,
    mouse_move: Closure<dyn FnMut(MouseEvent)>,
    touch_move: Closure<dyn FnMut(TouchEvent)>,
    release: Closure<dyn FnMut(Event)>,
}

impl DragListeners {
    fn attach(shared: &Rc<Shared>) -> Result<Self, EngineError> {
        let window = web_sys::window().ok_or(EngineError::NoWindow)?;
        let weak: Weak<Shared> = Rc::downgrade(shared);

        let mouse_move = {
            let weak = weak.clone();
            Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
                ev.prevent_default();
                if let Some(shared) = weak.upgrade() {
                    on_drag_move(&shared, &mouse_sample(&ev));
                }
            })
        };
        let touch_move = {
            let weak = weak.clone();
            Closure::<dyn FnMut(TouchEvent)>::new(move |ev: TouchEvent| {
                ev.prevent_default();
                if let Some(shared) = weak.upgrade() {
                    on_drag_move(&shared, &touch_sample(&ev));
                }
            })
        };
        let release = Closure::<dyn FnMut(Event)>::new(move |_ev: Event| {
            if let Some(shared) = weak.upgrade() {
                on_drag_release(&shared);
            }
        });

        let listeners = Self { window, mouse_move, touch_move, release };
        listeners.register()?;
        Ok(listeners)
    }

    fn bindings(&self) -> [(&'static str, &js_sys::Function); 4] {
        [
            ("mousemove", self.mouse_move.as_ref().unchecked_ref()),
            ("touchmove", self.touch_move.as_ref().unchecked_ref()),
            ("mouseup", self.release.as_ref().unchecked_ref()),
            ("touchend", self.release.as_ref().unchecked_ref()),
        ]
    }

    fn register(&self) -> Result<(), EngineError> {
        // touchmove must be non-passive so it can suppress page scrolling.
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        for (event, callback) in self.bindings() {
            let added = if event == "touchmove" {
                self.window
                    .add_event_listener_with_callback_and_add_event_listener_options(event, callback, &options)
            } else {
                self.window.add_event_listener_with_callback(event, callback)
            };
            added.map_err(|err| EngineError::Listener { event, message: format!("{err:?}") })?;
        }
        Ok(())
    }
}

impl Drop for DragListeners {
    fn drop(&mut self) {
        for (event, callback) in self.bindings() {
            if let Err(err) = self.window.remove_event_listener_with_callback(event, callback) {
                tracing::warn!(event, ?err, "failed to remove drag listener");
            }
        }
    }
}
