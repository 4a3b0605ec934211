//! Error types for the radius crate.
//!
//! Geometry and state updates never fail; out-of-range input is clamped.
//! Errors only arise at the edges: parsing identifiers handed over by a host
//! as text, and wiring browser listeners.

/// Error returned when a textual identifier does not name a known value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown control mode: {0}")]
    Mode(String),
    #[error("unknown unit: {0}")]
    Unit(String),
    #[error("unknown corner: {0}")]
    Corner(String),
    #[error("unknown axis: {0}")]
    Axis(String),
    #[error("unknown edge: {0}")]
    Edge(String),
    #[error("unknown handle: {0}")]
    Handle(String),
}

/// Error raised by the browser [`crate::engine::Engine`] wrapper.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// There is no global `window` (not running in a browser main thread).
    #[error("no global window available")]
    NoWindow,
    /// The browser rejected an event listener registration.
    #[error("failed to attach `{event}` listener: {message}")]
    Listener { event: &'static str, message: String },
}
