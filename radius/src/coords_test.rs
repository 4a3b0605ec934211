#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn rect() -> Rect {
    Rect::new(100.0, 50.0, 400.0, 200.0)
}

// --- Point / Rect ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_default_is_origin() {
    assert_eq!(Point::default(), Point::new(0.0, 0.0));
}

#[test]
fn rect_with_area_is_not_degenerate() {
    assert!(!rect().is_degenerate());
}

#[test]
fn rect_zero_width_or_height_is_degenerate() {
    assert!(Rect::new(0.0, 0.0, 0.0, 10.0).is_degenerate());
    assert!(Rect::new(0.0, 0.0, 10.0, 0.0).is_degenerate());
    assert!(Rect::default().is_degenerate());
}

#[test]
fn rect_nan_dimension_is_degenerate() {
    assert!(Rect::new(0.0, 0.0, f64::NAN, 10.0).is_degenerate());
}

// --- PointerSample ---

#[test]
fn mouse_and_pen_report_their_point() {
    let p = Point::new(1.0, 2.0);
    assert_eq!(PointerSample::Mouse(p).client_point(), Some(p));
    assert_eq!(PointerSample::Pen(p).client_point(), Some(p));
}

#[test]
fn touch_reports_first_touch_only() {
    let sample = PointerSample::Touch(vec![Point::new(5.0, 6.0), Point::new(7.0, 8.0)]);
    assert_eq!(sample.client_point(), Some(Point::new(5.0, 6.0)));
}

#[test]
fn empty_touch_list_has_no_point() {
    assert_eq!(PointerSample::Touch(Vec::new()).client_point(), None);
}

// --- normalized_pointer_position ---

#[test]
fn normalizes_against_rect_origin_and_size() {
    let p = normalized_pointer_position(&PointerSample::Mouse(Point::new(200.0, 100.0)), &rect());
    assert!(approx_eq(p.x, 0.25));
    assert!(approx_eq(p.y, 0.25));
}

#[test]
fn rect_corners_map_to_unit_square_corners() {
    let tl = normalized_pointer_position(&PointerSample::Mouse(Point::new(100.0, 50.0)), &rect());
    let br = normalized_pointer_position(&PointerSample::Mouse(Point::new(500.0, 250.0)), &rect());
    assert_eq!(tl, Point::new(0.0, 0.0));
    assert_eq!(br, Point::new(1.0, 1.0));
}

#[test]
fn positions_outside_rect_are_clamped() {
    let before = normalized_pointer_position(&PointerSample::Mouse(Point::new(-300.0, 0.0)), &rect());
    let after = normalized_pointer_position(&PointerSample::Mouse(Point::new(9000.0, 9000.0)), &rect());
    assert_eq!(before, Point::new(0.0, 0.0));
    assert_eq!(after, Point::new(1.0, 1.0));
}

#[test]
fn touch_sample_uses_first_touch() {
    let sample = PointerSample::Touch(vec![Point::new(300.0, 150.0), Point::new(100.0, 50.0)]);
    let p = normalized_pointer_position(&sample, &rect());
    assert!(approx_eq(p.x, 0.5));
    assert!(approx_eq(p.y, 0.5));
}

#[test]
fn empty_touch_list_maps_to_origin() {
    let p = normalized_pointer_position(&PointerSample::Touch(Vec::new()), &rect());
    assert_eq!(p, Point::new(0.0, 0.0));
}

#[test]
fn normalized_components_stay_in_unit_range() {
    for cx in (-500..=1500).step_by(37) {
        for cy in (-500..=1500).step_by(41) {
            let sample = PointerSample::Pen(Point::new(f64::from(cx), f64::from(cy)));
            let p = normalized_pointer_position(&sample, &rect());
            assert!((0.0..=1.0).contains(&p.x), "x out of range for {cx}");
            assert!((0.0..=1.0).contains(&p.y), "y out of range for {cy}");
        }
    }
}

// --- clamp_percent ---

#[test]
fn clamp_percent_passes_in_range_values() {
    assert_eq!(clamp_percent(0.0), 0.0);
    assert_eq!(clamp_percent(42.5), 42.5);
    assert_eq!(clamp_percent(100.0), 100.0);
}

#[test]
fn clamp_percent_limits_out_of_range_values() {
    assert_eq!(clamp_percent(-1.0), 0.0);
    assert_eq!(clamp_percent(100.5), 100.0);
    assert_eq!(clamp_percent(f64::INFINITY), 100.0);
    assert_eq!(clamp_percent(f64::NEG_INFINITY), 0.0);
}

#[test]
fn clamp_percent_treats_nan_as_zero() {
    assert_eq!(clamp_percent(f64::NAN), 0.0);
}

#[test]
fn clamp_percent_normalizes_negative_zero() {
    assert!(clamp_percent(-0.0).is_sign_positive());
}

#[test]
fn clamp_percent_is_idempotent() {
    let mut v = -250.0;
    while v <= 250.0 {
        let once = clamp_percent(v);
        assert_eq!(clamp_percent(once), once, "not idempotent at {v}");
        v += 0.75;
    }
}
