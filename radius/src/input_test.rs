#![allow(clippy::float_cmp)]

use super::*;
use crate::radius::{Axis, Corner, Edge};

// --- Key ---

#[test]
fn up_and_right_increase() {
    assert_eq!(Key::new("ArrowUp").step(), Some(Step::Increase));
    assert_eq!(Key::new("ArrowRight").step(), Some(Step::Increase));
}

#[test]
fn down_and_left_decrease() {
    assert_eq!(Key::new("ArrowDown").step(), Some(Step::Decrease));
    assert_eq!(Key::new("ArrowLeft").step(), Some(Step::Decrease));
}

#[test]
fn other_keys_do_nothing() {
    for name in ["Tab", "Enter", " ", "arrowup", "Up", ""] {
        assert_eq!(Key::new(name).step(), None, "{name:?}");
    }
}

// --- Step ---

#[test]
fn step_moves_by_one_and_clamps() {
    assert_eq!(Step::Increase.apply(10.0), 11.0);
    assert_eq!(Step::Decrease.apply(10.0), 9.0);
    assert_eq!(Step::Increase.apply(100.0), 100.0);
    assert_eq!(Step::Decrease.apply(0.0), 0.0);
}

#[test]
fn step_pulls_out_of_range_values_back() {
    assert_eq!(Step::Decrease.apply(150.0), 100.0);
    assert_eq!(Step::Increase.apply(-20.0), 0.0);
}

#[test]
fn step_keeps_fractional_part() {
    assert_eq!(Step::Increase.apply(10.5), 11.5);
}

// --- InputState ---

#[test]
fn default_state_is_idle() {
    assert_eq!(InputState::default(), InputState::Idle);
    assert_eq!(InputState::default().dragging(), None);
}

#[test]
fn dragging_reports_handle() {
    let handle = HandleId::Corner(Corner::BottomLeft, Axis::Horizontal);
    assert_eq!(InputState::Dragging { handle }.dragging(), Some(handle));
    let edge = HandleId::Edge(Edge::Top);
    assert_eq!(InputState::Dragging { handle: edge }.dragging(), Some(edge));
}
