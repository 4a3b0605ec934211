//! Corner8 geometry: pointer position and arrow keys to per-corner, per-axis
//! percentages.
//!
//! Each corner measures its radii from its own nearest edges. Horizontal
//! values of the right-hand corners and vertical values of the bottom corners
//! therefore count from the far end of the axis:
//!
//! | corner      | horizontal  | vertical    |
//! |-------------|-------------|-------------|
//! | topLeft     | x·100       | y·100       |
//! | topRight    | (1−x)·100   | y·100       |
//! | bottomRight | (1−x)·100   | (1−y)·100   |
//! | bottomLeft  | x·100       | (1−y)·100   |
//!
//! The table lives in [`crate::handles::CORNER_HANDLES`] as the `inverted`
//! flag; [`compute_value`] is the single evaluator over it.

#[cfg(test)]
#[path = "corner_test.rs"]
mod corner_test;

use crate::consts::PERCENT_MAX;
use crate::coords::{Point, clamp_percent};
use crate::handles::{CornerHandleDescriptor, corner_descriptor};
use crate::input::Step;
use crate::radius::{Axis, Corner};

/// Evaluate one descriptor row against a normalized pointer position.
#[must_use]
pub fn evaluate(d: &CornerHandleDescriptor, position: Point) -> f64 {
    let along = d.axis.component(position);
    let raw = if d.inverted { (1.0 - along) * PERCENT_MAX } else { along * PERCENT_MAX };
    clamp_percent(raw).round()
}

/// Percentage for the `(corner, axis)` handle given a normalized pointer
/// position, clamped to `[0, 100]` and rounded to the nearest integer.
#[must_use]
pub fn compute_value(corner: Corner, axis: Axis, position: Point) -> f64 {
    evaluate(corner_descriptor(corner, axis), position)
}

/// Apply one arrow-key step to a corner value.
#[must_use]
pub fn adjust_by_keyboard(current: f64, step: Step) -> f64 {
    step.apply(current)
}
