//! Edge4 geometry: pointer position and arrow keys to edge percentages.
//!
//! All four edge handles slide along their own edge, so each one reads the
//! axis *orthogonal* to the edge it belongs to: `top`/`bottom` read the
//! horizontal coordinate, `left`/`right` the vertical one. That cross-axis
//! mapping is what yields the diagonal teardrop family of shapes.

#[cfg(test)]
#[path = "edge_test.rs"]
mod edge_test;

use crate::consts::PERCENT_MAX;
use crate::coords::{Point, clamp_percent};
use crate::input::Step;
use crate::radius::{Axis, Edge};

/// The pointer axis that drives `edge`.
#[must_use]
pub fn driving_axis(edge: Edge) -> Axis {
    match edge {
        Edge::Top | Edge::Bottom => Axis::Horizontal,
        Edge::Left | Edge::Right => Axis::Vertical,
    }
}

/// Percentage for `edge` given a normalized pointer position, clamped to
/// `[0, 100]` and rounded to the nearest integer.
#[must_use]
pub fn compute_value(edge: Edge, position: Point) -> f64 {
    let raw = driving_axis(edge).component(position) * PERCENT_MAX;
    clamp_percent(raw).round()
}

/// Apply one arrow-key step to an edge value.
#[must_use]
pub fn adjust_by_keyboard(current: f64, step: Step) -> f64 {
    step.apply(current)
}
