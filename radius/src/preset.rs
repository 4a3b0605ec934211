//! Preset catalog and applier.
//!
//! Presets are immutable reference data: a name plus a value set tagged with
//! its mode. Applying one copies its values into the matching slot of a
//! [`RadiusState`] (and, for basic presets, the unit) without touching the
//! active mode or the other two value sets.

#[cfg(test)]
#[path = "preset_test.rs"]
mod preset_test;

use serde::Serialize;

use crate::radius::{ControlMode, CornerRadii, RadiusBasic, RadiusCorner8, RadiusEdge4, RadiusState, Unit};

/// A preset's value set. The variant fixes the mode, so a value set can
/// never disagree with the mode it is declared for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum PresetValues {
    Basic { values: RadiusBasic, unit: Unit },
    Edge4 { values: RadiusEdge4 },
    Corner8 { values: RadiusCorner8 },
}

/// A named, mode-tagged snapshot of values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Preset {
    pub name: &'static str,
    #[serde(flatten)]
    pub values: PresetValues,
}

impl Preset {
    #[must_use]
    pub fn mode(&self) -> ControlMode {
        match self.values {
            PresetValues::Basic { .. } => ControlMode::Basic,
            PresetValues::Edge4 { .. } => ControlMode::Edge4,
            PresetValues::Corner8 { .. } => ControlMode::Corner8,
        }
    }
}

const fn basic(name: &'static str, v: f64, unit: Unit) -> Preset {
    Preset { name, values: PresetValues::Basic { values: RadiusBasic::uniform(v), unit } }
}

const fn edge4(name: &'static str, top: f64, right: f64, bottom: f64, left: f64) -> Preset {
    Preset { name, values: PresetValues::Edge4 { values: RadiusEdge4::new(top, right, bottom, left) } }
}

/// Corners in shorthand order, each as `(horizontal, vertical)`.
const fn corner8(name: &'static str, c: [(f64, f64); 4]) -> Preset {
    Preset {
        name,
        values: PresetValues::Corner8 {
            values: RadiusCorner8 {
                top_left: CornerRadii::new(c[0].0, c[0].1),
                top_right: CornerRadii::new(c[1].0, c[1].1),
                bottom_right: CornerRadii::new(c[2].0, c[2].1),
                bottom_left: CornerRadii::new(c[3].0, c[3].1),
            },
        },
    }
}

pub static BASIC_PRESETS: [Preset; 6] = [
    basic("None", 0.0, Unit::Px),
    basic("Small", 4.0, Unit::Px),
    basic("Medium", 8.0, Unit::Px),
    basic("Large", 16.0, Unit::Px),
    basic("Pill", 100.0, Unit::Percent),
    basic("Card", 12.0, Unit::Percent),
];

pub static EDGE4_PRESETS: [Preset; 6] = [
    edge4("Organic", 75.0, 25.0, 60.0, 40.0),
    edge4("Teardrop", 90.0, 10.0, 40.0, 60.0),
    edge4("Leaf", 85.0, 15.0, 15.0, 85.0),
    edge4("Pebble", 65.0, 35.0, 50.0, 50.0),
    edge4("Fluid", 30.0, 70.0, 80.0, 20.0),
    edge4("Cloud", 55.0, 45.0, 70.0, 30.0),
];

pub static CORNER8_PRESETS: [Preset; 6] = [
    corner8("Blob 1", [(30.0, 70.0), (70.0, 30.0), (70.0, 70.0), (30.0, 30.0)]),
    corner8("Blob 2", [(80.0, 20.0), (30.0, 70.0), (60.0, 40.0), (20.0, 80.0)]),
    corner8("Flower", [(75.0, 25.0), (25.0, 75.0), (75.0, 25.0), (25.0, 75.0)]),
    corner8("Star-like", [(30.0, 70.0), (70.0, 30.0), (30.0, 70.0), (70.0, 30.0)]),
    corner8("Abstract", [(85.0, 15.0), (40.0, 60.0), (15.0, 85.0), (60.0, 40.0)]),
    corner8("Stone", [(65.0, 35.0), (45.0, 55.0), (55.0, 45.0), (35.0, 65.0)]),
];

/// The catalog slice for `mode`, in display order.
#[must_use]
pub fn presets_for_mode(mode: ControlMode) -> &'static [Preset] {
    match mode {
        ControlMode::Basic => &BASIC_PRESETS,
        ControlMode::Edge4 => &EDGE4_PRESETS,
        ControlMode::Corner8 => &CORNER8_PRESETS,
    }
}

/// Catalog lookup by textual mode name. Unknown names yield an empty list.
#[must_use]
pub fn presets_for_mode_name(mode: &str) -> &'static [Preset] {
    match mode.parse::<ControlMode>() {
        Ok(mode) => presets_for_mode(mode),
        Err(_) => &[],
    }
}

/// Find a preset of `mode` by exact name.
#[must_use]
pub fn find_preset(mode: ControlMode, name: &str) -> Option<&'static Preset> {
    presets_for_mode(mode).iter().find(|p| p.name == name)
}

impl RadiusState {
    /// Overwrite the value set for `preset`'s mode (and the unit, for basic
    /// presets). The active mode is left alone.
    pub fn apply_preset(&mut self, preset: &Preset) {
        match preset.values {
            PresetValues::Basic { values, unit } => {
                self.basic = values;
                self.unit = unit;
            }
            PresetValues::Edge4 { values } => self.edge4 = values,
            PresetValues::Corner8 { values } => self.corner8 = values,
        }
        tracing::debug!(preset = preset.name, mode = %preset.mode(), "preset applied");
    }
}
