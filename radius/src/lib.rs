//! Border-radius editing core.
//!
//! This crate is compiled to WebAssembly and runs in the browser alongside the
//! editor UI. It owns the radius state for all three control modes, turns raw
//! pointer and keyboard input on the preview handles into percentage values,
//! and serializes the active mode to a CSS `border-radius` declaration. The
//! host layer only wires DOM events to the [`engine::Engine`] and renders the
//! values and CSS it reads back.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`radius`] | Value sets, control mode, unit, and CSS serialization |
//! | [`handles`] | Handle identities, descriptor tables, and view models |
//! | [`edge`] | Edge4 pointer/keyboard geometry |
//! | [`corner`] | Corner8 pointer/keyboard geometry |
//! | [`coords`] | Points, the reference rectangle, pointer normalization |
//! | [`input`] | Keys, step directions, and the drag state machine |
//! | [`preset`] | Preset catalog and applier |
//! | [`appearance`] | Preview size and background |
//! | [`consts`] | Shared constants (defaults, ranges, handle styling) |
//! | [`error`] | Parse and engine errors |

pub mod appearance;
pub mod consts;
pub mod coords;
pub mod corner;
pub mod edge;
pub mod engine;
pub mod error;
pub mod handles;
pub mod input;
pub mod preset;
pub mod radius;

pub use error::{EngineError, ParseError};
pub use handles::HandleId;
pub use preset::{Preset, PresetValues};
pub use radius::{Axis, ControlMode, Corner, Edge, RadiusState, Unit};

use wasm_bindgen::prelude::*;

/// Route Rust panics to the browser console when the
/// `console_error_panic_hook` feature is enabled.
#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
