//! Coordinate utilities: client-space points, the preview reference rectangle,
//! and the conversion from raw pointer samples to normalized `[0, 1]`
//! positions inside that rectangle.

#[cfg(test)]
#[path = "coords_test.rs"]
mod coords_test;

use serde::{Deserialize, Serialize};

use crate::consts::{PERCENT_MAX, PERCENT_MIN};

/// A point in client space (CSS pixels) or, after normalization, a fraction
/// of the reference rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Screen bounds of the preview element, as reported by the host layout.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// A zero-width or zero-height rectangle cannot be normalized against.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !(self.width.abs() > 0.0 && self.height.abs() > 0.0)
    }
}

/// A pointer-like input sample.
///
/// Mouse and pen events carry a single client point; touch events carry the
/// list of active touches, of which only the first is used.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerSample {
    Mouse(Point),
    Pen(Point),
    Touch(Vec<Point>),
}

impl PointerSample {
    /// The client-space coordinate this sample reports, if it has one.
    #[must_use]
    pub fn client_point(&self) -> Option<Point> {
        match self {
            Self::Mouse(p) | Self::Pen(p) => Some(*p),
            Self::Touch(touches) => touches.first().copied(),
        }
    }
}

/// Normalize a pointer sample against `rect`, clamping each axis to `[0, 1]`.
///
/// A sample without a usable coordinate (an empty touch list) maps to the
/// origin. Callers must not pass a degenerate rectangle; see
/// [`Rect::is_degenerate`].
#[must_use]
pub fn normalized_pointer_position(sample: &PointerSample, rect: &Rect) -> Point {
    let Some(client) = sample.client_point() else {
        return Point::default();
    };
    Point {
        x: clamp_unit((client.x - rect.left) / rect.width),
        y: clamp_unit((client.y - rect.top) / rect.height),
    }
}

/// Clamp a value to `[0, 100]`. NaN and negative zero come back as 0.
#[must_use]
pub fn clamp_percent(v: f64) -> f64 {
    if v.is_nan() || v <= PERCENT_MIN {
        return PERCENT_MIN;
    }
    v.min(PERCENT_MAX)
}

fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() || v <= 0.0 {
        return 0.0;
    }
    v.min(1.0)
}
