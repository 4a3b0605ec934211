//! Input model: keyboard keys, step directions, and the drag-session state
//! machine.
//!
//! `InputState` is the gesture tracked between pointer-down and pointer-up.
//! It only ever names one handle; a new press overwrites it, and every move
//! is applied to whichever handle it currently names.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::consts::KEY_STEP;
use crate::coords::clamp_percent;
use crate::handles::HandleId;

/// A keyboard key as reported by the browser (e.g. `"ArrowUp"`, `"Tab"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The step this key applies to a focused handle, if any.
    ///
    /// Up and Right increase; Down and Left decrease.
    #[must_use]
    pub fn step(&self) -> Option<Step> {
        match self.0.as_str() {
            "ArrowUp" | "ArrowRight" => Some(Step::Increase),
            "ArrowDown" | "ArrowLeft" => Some(Step::Decrease),
            _ => None,
        }
    }
}

/// Direction of a single keyboard adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Increase,
    Decrease,
}

impl Step {
    /// Move `current` one step and clamp to `[0, 100]`.
    #[must_use]
    pub fn apply(self, current: f64) -> f64 {
        match self {
            Self::Increase => clamp_percent(current + KEY_STEP),
            Self::Decrease => clamp_percent(current - KEY_STEP),
        }
    }
}

/// Drag-session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputState {
    /// No drag in progress; moves are ignored.
    #[default]
    Idle,
    /// A handle is being dragged; moves recompute its value.
    Dragging {
        /// The handle every move event is applied to.
        handle: HandleId,
    },
}

impl InputState {
    /// The handle under drag, if any.
    #[must_use]
    pub fn dragging(&self) -> Option<HandleId> {
        match self {
            Self::Idle => None,
            Self::Dragging { handle } => Some(*handle),
        }
    }
}
