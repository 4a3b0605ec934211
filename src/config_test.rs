#![allow(clippy::float_cmp)]

use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    move |key| vars.get(key).cloned()
}

/// # Safety
/// Only `from_env_reads_process_environment` touches these variables.
unsafe fn clear_radius_env() {
    unsafe {
        std::env::remove_var("RADIUS_MODE");
        std::env::remove_var("RADIUS_UNIT");
        std::env::remove_var("RADIUS_PREVIEW_WIDTH");
        std::env::remove_var("RADIUS_PREVIEW_HEIGHT");
    }
}

#[test]
fn empty_source_gives_defaults() {
    let cfg = StudioConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, StudioConfig::default());
    assert_eq!(cfg.mode, ControlMode::Basic);
    assert_eq!(cfg.unit, Unit::Px);
    assert_eq!(cfg.preview_width, DEFAULT_PREVIEW_SIZE);
}

#[test]
fn parses_overrides() {
    let cfg = StudioConfig::from_lookup(lookup(&[
        ("RADIUS_MODE", "corner8"),
        ("RADIUS_UNIT", "rem"),
        ("RADIUS_PREVIEW_WIDTH", "640"),
        ("RADIUS_PREVIEW_HEIGHT", " 360.5 "),
    ]))
    .unwrap();
    assert_eq!(cfg.mode, ControlMode::Corner8);
    assert_eq!(cfg.unit, Unit::Rem);
    assert_eq!(cfg.preview_width, 640.0);
    assert_eq!(cfg.preview_height, 360.5);
}

#[test]
fn accepts_legacy_mode_names() {
    let cfg = StudioConfig::from_lookup(lookup(&[("RADIUS_MODE", "advanced4")])).unwrap();
    assert_eq!(cfg.mode, ControlMode::Edge4);
}

#[test]
fn unknown_mode_is_an_error() {
    let err = StudioConfig::from_lookup(lookup(&[("RADIUS_MODE", "wobbly")])).unwrap_err();
    assert_eq!(err, ConfigError { var: "RADIUS_MODE", value: "wobbly".into() });
    assert_eq!(err.to_string(), "invalid RADIUS_MODE: wobbly");
}

#[test]
fn unknown_unit_is_an_error() {
    let err = StudioConfig::from_lookup(lookup(&[("RADIUS_UNIT", "vw")])).unwrap_err();
    assert_eq!(err.var, "RADIUS_UNIT");
}

#[test]
fn bad_sizes_fall_back_to_default() {
    for raw in ["", "wide", "-10", "0", "NaN", "inf"] {
        let cfg = StudioConfig::from_lookup(lookup(&[("RADIUS_PREVIEW_WIDTH", raw)])).unwrap();
        assert_eq!(cfg.preview_width, DEFAULT_PREVIEW_SIZE, "{raw:?}");
    }
}

#[test]
fn from_env_reads_process_environment() {
    unsafe {
        clear_radius_env();
        std::env::set_var("RADIUS_MODE", "edge4");
        std::env::set_var("RADIUS_PREVIEW_HEIGHT", "300");
    }

    let cfg = StudioConfig::from_env().unwrap();
    assert_eq!(cfg.mode, ControlMode::Edge4);
    assert_eq!(cfg.unit, Unit::Px);
    assert_eq!(cfg.preview_height, 300.0);

    unsafe { clear_radius_env() };
}
