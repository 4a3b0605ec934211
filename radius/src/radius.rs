//! Radius state model: the three value sets, the active mode and unit, and
//! the CSS they serialize to.
//!
//! All three value sets live side by side in [`RadiusState`]. Switching the
//! active [`ControlMode`] only changes which one feeds
//! [`RadiusState::compute_css_value`]; the others keep their values until the
//! user switches back. Writers (the geometry engines, the preset applier,
//! direct setters) clamp before storing, so every field stays in range.

#[cfg(test)]
#[path = "radius_test.rs"]
mod radius_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_BASIC_RADIUS, DEFAULT_CORNER8_FAR, DEFAULT_CORNER8_NEAR, DEFAULT_EDGE4, PERCENT_MAX};
use crate::coords::{Point, clamp_percent};
use crate::error::ParseError;
use crate::handles::{self, HandleId, HandleView};

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// Which value set drives the rendered shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlMode {
    /// Four corners, one magnitude each, in the active unit.
    #[default]
    Basic,
    /// Four edge percentages feeding the 8-slot organic shorthand.
    #[serde(alias = "advanced4")]
    Edge4,
    /// Two percentages (horizontal, vertical) per corner.
    #[serde(alias = "advanced8")]
    Corner8,
}

impl ControlMode {
    pub const ALL: [Self; 3] = [Self::Basic, Self::Edge4, Self::Corner8];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Edge4 => "edge4",
            Self::Corner8 => "corner8",
        }
    }
}

impl fmt::Display for ControlMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ControlMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(Self::Basic),
            "edge4" | "advanced4" => Ok(Self::Edge4),
            "corner8" | "advanced8" => Ok(Self::Corner8),
            other => Err(ParseError::Mode(other.to_string())),
        }
    }
}

/// CSS length unit for basic-mode values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Unit {
    #[default]
    #[serde(rename = "px")]
    Px,
    #[serde(rename = "%")]
    Percent,
    #[serde(rename = "em")]
    Em,
    #[serde(rename = "rem")]
    Rem,
}

impl Unit {
    pub const ALL: [Self; 4] = [Self::Px, Self::Percent, Self::Em, Self::Rem];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Percent => "%",
            Self::Em => "em",
            Self::Rem => "rem",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "px" => Ok(Self::Px),
            "%" | "percent" => Ok(Self::Percent),
            "em" => Ok(Self::Em),
            "rem" => Ok(Self::Rem),
            other => Err(ParseError::Unit(other.to_string())),
        }
    }
}

/// One of the four corners, in CSS shorthand order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    /// Shorthand order: top-left, top-right, bottom-right, bottom-left.
    pub const ALL: [Self; 4] = [Self::TopLeft, Self::TopRight, Self::BottomRight, Self::BottomLeft];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TopLeft => "topLeft",
            Self::TopRight => "topRight",
            Self::BottomRight => "bottomRight",
            Self::BottomLeft => "bottomLeft",
        }
    }

    /// Whether the corner sits on the right edge of the box.
    #[must_use]
    pub fn is_right(self) -> bool {
        matches!(self, Self::TopRight | Self::BottomRight)
    }

    /// Whether the corner sits on the bottom edge of the box.
    #[must_use]
    pub fn is_bottom(self) -> bool {
        matches!(self, Self::BottomRight | Self::BottomLeft)
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Corner {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ParseError::Corner(s.to_string()))
    }
}

/// Radius axis within a corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub const ALL: [Self; 2] = [Self::Horizontal, Self::Vertical];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }

    /// The component of `p` that runs along this axis.
    #[must_use]
    pub fn component(self, p: Point) -> f64 {
        match self {
            Self::Horizontal => p.x,
            Self::Vertical => p.y,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Axis {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "horizontal" => Ok(Self::Horizontal),
            "vertical" => Ok(Self::Vertical),
            other => Err(ParseError::Axis(other.to_string())),
        }
    }
}

/// One of the four box edges, the handle identities of edge4 mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Edge {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| ParseError::Edge(s.to_string()))
    }
}

// =============================================================================
// VALUE SETS
// =============================================================================

/// Basic mode: one non-negative magnitude per corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadiusBasic {
    pub top_left: f64,
    pub top_right: f64,
    pub bottom_right: f64,
    pub bottom_left: f64,
}

impl RadiusBasic {
    #[must_use]
    pub const fn uniform(v: f64) -> Self {
        Self { top_left: v, top_right: v, bottom_right: v, bottom_left: v }
    }

    #[must_use]
    pub fn get(&self, corner: Corner) -> f64 {
        match corner {
            Corner::TopLeft => self.top_left,
            Corner::TopRight => self.top_right,
            Corner::BottomRight => self.bottom_right,
            Corner::BottomLeft => self.bottom_left,
        }
    }

    pub fn set(&mut self, corner: Corner, v: f64) {
        let slot = match corner {
            Corner::TopLeft => &mut self.top_left,
            Corner::TopRight => &mut self.top_right,
            Corner::BottomRight => &mut self.bottom_right,
            Corner::BottomLeft => &mut self.bottom_left,
        };
        *slot = v;
    }

    /// Values in shorthand order.
    #[must_use]
    pub fn to_array(&self) -> [f64; 4] {
        Corner::ALL.map(|c| self.get(c))
    }
}

impl Default for RadiusBasic {
    fn default() -> Self {
        Self::uniform(DEFAULT_BASIC_RADIUS)
    }
}

/// Edge4 mode: one percentage per edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadiusEdge4 {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl RadiusEdge4 {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }

    #[must_use]
    pub fn get(&self, edge: Edge) -> f64 {
        match edge {
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
        }
    }

    pub fn set(&mut self, edge: Edge, v: f64) {
        let slot = match edge {
            Edge::Top => &mut self.top,
            Edge::Right => &mut self.right,
            Edge::Bottom => &mut self.bottom,
            Edge::Left => &mut self.left,
        };
        *slot = v;
    }
}

impl Default for RadiusEdge4 {
    fn default() -> Self {
        let [top, right, bottom, left] = DEFAULT_EDGE4;
        Self::new(top, right, bottom, left)
    }
}

/// Horizontal and vertical radius of a single corner, as percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CornerRadii {
    pub horizontal: f64,
    pub vertical: f64,
}

impl CornerRadii {
    #[must_use]
    pub const fn new(horizontal: f64, vertical: f64) -> Self {
        Self { horizontal, vertical }
    }

    #[must_use]
    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
        }
    }

    pub fn set(&mut self, axis: Axis, v: f64) {
        match axis {
            Axis::Horizontal => self.horizontal = v,
            Axis::Vertical => self.vertical = v,
        }
    }
}

/// Corner8 mode: two percentages per corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadiusCorner8 {
    pub top_left: CornerRadii,
    pub top_right: CornerRadii,
    pub bottom_right: CornerRadii,
    pub bottom_left: CornerRadii,
}

impl RadiusCorner8 {
    #[must_use]
    pub fn corner(&self, corner: Corner) -> CornerRadii {
        match corner {
            Corner::TopLeft => self.top_left,
            Corner::TopRight => self.top_right,
            Corner::BottomRight => self.bottom_right,
            Corner::BottomLeft => self.bottom_left,
        }
    }

    pub fn corner_mut(&mut self, corner: Corner) -> &mut CornerRadii {
        match corner {
            Corner::TopLeft => &mut self.top_left,
            Corner::TopRight => &mut self.top_right,
            Corner::BottomRight => &mut self.bottom_right,
            Corner::BottomLeft => &mut self.bottom_left,
        }
    }

    /// One axis of all four corners, in shorthand order.
    #[must_use]
    pub fn axis_values(&self, axis: Axis) -> [f64; 4] {
        Corner::ALL.map(|c| self.corner(c).get(axis))
    }
}

impl Default for RadiusCorner8 {
    fn default() -> Self {
        let (near, far) = (DEFAULT_CORNER8_NEAR, DEFAULT_CORNER8_FAR);
        Self {
            top_left: CornerRadii::new(near, near),
            top_right: CornerRadii::new(far, near),
            bottom_right: CornerRadii::new(far, far),
            bottom_left: CornerRadii::new(near, far),
        }
    }
}

// =============================================================================
// SERIALIZATION
// =============================================================================

/// Basic shorthand: a single value when all corners agree, otherwise four.
#[allow(clippy::float_cmp)]
#[must_use]
pub fn basic_css_value(radius: &RadiusBasic, unit: Unit) -> String {
    let [tl, tr, br, bl] = radius.to_array();
    if tl == tr && tr == br && br == bl {
        return format!("{tl}{unit}");
    }
    format!("{tl}{unit} {tr}{unit} {br}{unit} {bl}{unit}")
}

/// Edge4 shorthand. Horizontal radii are `top, 100-top, 100-bottom, bottom`;
/// vertical radii are `left, right, 100-right, 100-left`.
#[must_use]
pub fn edge4_css_value(radius: &RadiusEdge4) -> String {
    let RadiusEdge4 { top, right, bottom, left } = *radius;
    let m = PERCENT_MAX;
    format!(
        "{top}% {}% {}% {bottom}% / {left}% {right}% {}% {}%",
        m - top,
        m - bottom,
        m - right,
        m - left
    )
}

/// Corner8 shorthand; the slash form is used only when the horizontal and
/// vertical lists differ textually.
#[must_use]
pub fn corner8_css_value(radius: &RadiusCorner8) -> String {
    let horizontal = percent_list(&radius.axis_values(Axis::Horizontal));
    let vertical = percent_list(&radius.axis_values(Axis::Vertical));
    if horizontal == vertical {
        horizontal
    } else {
        format!("{horizontal} / {vertical}")
    }
}

fn percent_list(values: &[f64]) -> String {
    values.iter().map(|v| format!("{v}%")).collect::<Vec<_>>().join(" ")
}

// =============================================================================
// STATE
// =============================================================================

/// The live editor state: every mode's values plus the active mode and unit.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadiusState {
    pub basic: RadiusBasic,
    pub edge4: RadiusEdge4,
    pub corner8: RadiusCorner8,
    pub mode: ControlMode,
    pub unit: Unit,
}

impl RadiusState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The `border-radius` value for the active mode.
    #[must_use]
    pub fn compute_css_value(&self) -> String {
        match self.mode {
            ControlMode::Basic => basic_css_value(&self.basic, self.unit),
            ControlMode::Edge4 => edge4_css_value(&self.edge4),
            ControlMode::Corner8 => corner8_css_value(&self.corner8),
        }
    }

    /// The full `border-radius: ...;` declaration for the active mode.
    #[must_use]
    pub fn compute_css_declaration(&self) -> String {
        format!("border-radius: {};", self.compute_css_value())
    }

    pub fn set_mode(&mut self, mode: ControlMode) {
        if self.mode != mode {
            tracing::debug!(from = %self.mode, to = %mode, "control mode switched");
        }
        self.mode = mode;
    }

    pub fn set_unit(&mut self, unit: Unit) {
        self.unit = unit;
    }

    /// Set one basic-mode corner. Negative values are raised to 0.
    pub fn set_basic_corner(&mut self, corner: Corner, v: f64) {
        self.basic.set(corner, non_negative(v));
    }

    /// Set all four basic-mode corners to the same magnitude.
    pub fn set_basic_all(&mut self, v: f64) {
        self.basic = RadiusBasic::uniform(non_negative(v));
    }

    /// Current value behind a draggable handle.
    #[must_use]
    pub fn handle_value(&self, handle: HandleId) -> f64 {
        match handle {
            HandleId::Edge(edge) => self.edge4.get(edge),
            HandleId::Corner(corner, axis) => self.corner8.corner(corner).get(axis),
        }
    }

    /// Store a value behind a handle, clamped to `[0, 100]`.
    pub fn set_handle_value(&mut self, handle: HandleId, v: f64) {
        let v = clamp_percent(v);
        match handle {
            HandleId::Edge(edge) => self.edge4.set(edge, v),
            HandleId::Corner(corner, axis) => self.corner8.corner_mut(corner).set(axis, v),
        }
    }

    /// Handle view models for the active mode (empty in basic mode).
    #[must_use]
    pub fn handles(&self) -> Vec<HandleView> {
        handles::views(self, self.mode)
    }
}

fn non_negative(v: f64) -> f64 {
    if v.is_nan() || v <= 0.0 { 0.0 } else { v }
}
