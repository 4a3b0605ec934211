#![allow(clippy::float_cmp)]

use super::*;
use crate::handles::CORNER_HANDLES;

#[test]
fn top_left_horizontal_reads_x_directly() {
    assert_eq!(compute_value(Corner::TopLeft, Axis::Horizontal, Point::new(0.2, 0.5)), 20.0);
}

#[test]
fn top_right_horizontal_reads_x_from_the_right() {
    assert_eq!(compute_value(Corner::TopRight, Axis::Horizontal, Point::new(0.2, 0.5)), 80.0);
}

#[test]
fn full_inversion_table() {
    let p = Point::new(0.2, 0.3);
    let cases = [
        (Corner::TopLeft, Axis::Horizontal, 20.0),
        (Corner::TopLeft, Axis::Vertical, 30.0),
        (Corner::TopRight, Axis::Horizontal, 80.0),
        (Corner::TopRight, Axis::Vertical, 30.0),
        (Corner::BottomRight, Axis::Horizontal, 80.0),
        (Corner::BottomRight, Axis::Vertical, 70.0),
        (Corner::BottomLeft, Axis::Horizontal, 20.0),
        (Corner::BottomLeft, Axis::Vertical, 70.0),
    ];
    for (corner, axis, expected) in cases {
        assert_eq!(compute_value(corner, axis, p), expected, "{corner}-{axis}");
    }
}

#[test]
fn evaluate_agrees_with_lookup() {
    let p = Point::new(0.37, 0.81);
    for d in &CORNER_HANDLES {
        assert_eq!(evaluate(d, p), compute_value(d.corner, d.axis, p));
    }
}

#[test]
fn box_corners_give_extremes() {
    assert_eq!(compute_value(Corner::BottomRight, Axis::Vertical, Point::new(1.0, 1.0)), 0.0);
    assert_eq!(compute_value(Corner::BottomRight, Axis::Vertical, Point::new(0.0, 0.0)), 100.0);
    assert_eq!(compute_value(Corner::TopLeft, Axis::Horizontal, Point::new(1.0, 0.0)), 100.0);
}

#[test]
fn out_of_range_positions_clamp() {
    assert_eq!(compute_value(Corner::TopRight, Axis::Horizontal, Point::new(-1.0, 0.0)), 100.0);
    assert_eq!(compute_value(Corner::TopLeft, Axis::Vertical, Point::new(0.0, 2.0)), 100.0);
    assert_eq!(compute_value(Corner::BottomLeft, Axis::Vertical, Point::new(0.0, 2.0)), 0.0);
}

#[test]
fn values_stay_in_range_and_integral() {
    for d in &CORNER_HANDLES {
        for i in -10..=110 {
            let t = f64::from(i) / 100.0;
            let v = evaluate(d, Point::new(t, 1.0 - t));
            assert!((0.0..=100.0).contains(&v));
            assert_eq!(v, v.round());
        }
    }
}

#[test]
fn keyboard_steps_are_not_mirrored() {
    // Up always increases the stored value, even on inverted rows.
    assert_eq!(adjust_by_keyboard(70.0, Step::Increase), 71.0);
    assert_eq!(adjust_by_keyboard(70.0, Step::Decrease), 69.0);
    assert_eq!(adjust_by_keyboard(0.0, Step::Decrease), 0.0);
}
