//! Draggable handle identities and the static descriptor tables behind them.
//!
//! Edge4 mode has four handles, one per box edge; corner8 mode has eight, one
//! per (corner, axis) pair. Each mode is described by a constant table, and a
//! single generic function turns a table row plus the current value into a
//! [`HandleView`] for the host's visual layer.

#[cfg(test)]
#[path = "handles_test.rs"]
mod handles_test;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::consts::{CENTER_X_TRANSFORM, CENTER_XY_TRANSFORM, CENTER_Y_TRANSFORM, EDGE_HANDLE_OFFSET, PERCENT_MAX};
use crate::coords::Point;
use crate::error::ParseError;
use crate::radius::{Axis, ControlMode, Corner, Edge, RadiusState};

/// Identity of a single draggable handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleId {
    /// An edge4 handle.
    Edge(Edge),
    /// A corner8 handle: one axis of one corner.
    Corner(Corner, Axis),
}

impl HandleId {
    /// The control mode whose value set this handle edits.
    #[must_use]
    pub fn mode(self) -> ControlMode {
        match self {
            Self::Edge(_) => ControlMode::Edge4,
            Self::Corner(..) => ControlMode::Corner8,
        }
    }

    /// Stable textual key: `top`, `left`, ..., or `topRight-horizontal`, ...
    #[must_use]
    pub fn key(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for HandleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Edge(edge) => write!(f, "{edge}"),
            Self::Corner(corner, axis) => write!(f, "{corner}-{axis}"),
        }
    }
}

impl FromStr for HandleId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let handle = match s.split_once('-') {
            Some((corner, axis)) => corner
                .parse::<Corner>()
                .and_then(|c| axis.parse::<Axis>().map(|a| Self::Corner(c, a))),
            None => s.parse::<Edge>().map(Self::Edge),
        };
        handle.map_err(|_| ParseError::Handle(s.to_string()))
    }
}

impl Serialize for HandleId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// =============================================================================
// DESCRIPTOR TABLES
// =============================================================================

/// Which CSS offset property carries an edge handle's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionKey {
    Left,
    Top,
}

/// Static description of one edge4 handle.
#[derive(Debug, Clone, Copy)]
pub struct EdgeHandleDescriptor {
    pub edge: Edge,
    /// The handle slides along this offset property as the value changes.
    pub position_key: PositionKey,
    /// Fixed centering transform.
    pub transform: &'static str,
    pub aria_label: &'static str,
}

/// Static description of one corner8 handle.
#[derive(Debug, Clone, Copy)]
pub struct CornerHandleDescriptor {
    pub corner: Corner,
    pub axis: Axis,
    /// The value is measured from the far end of `axis` (right or bottom edge).
    pub inverted: bool,
    pub aria_label: &'static str,
}

/// Any handle descriptor.
#[derive(Debug, Clone, Copy)]
pub enum HandleDescriptor {
    Edge(&'static EdgeHandleDescriptor),
    Corner(&'static CornerHandleDescriptor),
}

impl HandleDescriptor {
    #[must_use]
    pub fn id(&self) -> HandleId {
        match self {
            Self::Edge(d) => HandleId::Edge(d.edge),
            Self::Corner(d) => HandleId::Corner(d.corner, d.axis),
        }
    }

    #[must_use]
    pub fn aria_label(&self) -> &'static str {
        match self {
            Self::Edge(d) => d.aria_label,
            Self::Corner(d) => d.aria_label,
        }
    }
}

pub static EDGE_HANDLES: [EdgeHandleDescriptor; 4] = [
    EdgeHandleDescriptor {
        edge: Edge::Top,
        position_key: PositionKey::Left,
        transform: CENTER_X_TRANSFORM,
        aria_label: "Adjust top edge radius value",
    },
    EdgeHandleDescriptor {
        edge: Edge::Right,
        position_key: PositionKey::Top,
        transform: CENTER_Y_TRANSFORM,
        aria_label: "Adjust right edge radius value",
    },
    EdgeHandleDescriptor {
        edge: Edge::Bottom,
        position_key: PositionKey::Left,
        transform: CENTER_X_TRANSFORM,
        aria_label: "Adjust bottom edge radius value",
    },
    EdgeHandleDescriptor {
        edge: Edge::Left,
        position_key: PositionKey::Top,
        transform: CENTER_Y_TRANSFORM,
        aria_label: "Adjust left edge radius value",
    },
];

pub static CORNER_HANDLES: [CornerHandleDescriptor; 8] = [
    CornerHandleDescriptor {
        corner: Corner::TopLeft,
        axis: Axis::Horizontal,
        inverted: false,
        aria_label: "Adjust top left horizontal radius",
    },
    CornerHandleDescriptor {
        corner: Corner::TopLeft,
        axis: Axis::Vertical,
        inverted: false,
        aria_label: "Adjust top left vertical radius",
    },
    CornerHandleDescriptor {
        corner: Corner::TopRight,
        axis: Axis::Horizontal,
        inverted: true,
        aria_label: "Adjust top right horizontal radius",
    },
    CornerHandleDescriptor {
        corner: Corner::TopRight,
        axis: Axis::Vertical,
        inverted: false,
        aria_label: "Adjust top right vertical radius",
    },
    CornerHandleDescriptor {
        corner: Corner::BottomRight,
        axis: Axis::Horizontal,
        inverted: true,
        aria_label: "Adjust bottom right horizontal radius",
    },
    CornerHandleDescriptor {
        corner: Corner::BottomRight,
        axis: Axis::Vertical,
        inverted: true,
        aria_label: "Adjust bottom right vertical radius",
    },
    CornerHandleDescriptor {
        corner: Corner::BottomLeft,
        axis: Axis::Horizontal,
        inverted: false,
        aria_label: "Adjust bottom left horizontal radius",
    },
    CornerHandleDescriptor {
        corner: Corner::BottomLeft,
        axis: Axis::Vertical,
        inverted: true,
        aria_label: "Adjust bottom left vertical radius",
    },
];

/// Look up the edge4 descriptor for `edge`.
#[must_use]
pub fn edge_descriptor(edge: Edge) -> &'static EdgeHandleDescriptor {
    match edge {
        Edge::Top => &EDGE_HANDLES[0],
        Edge::Right => &EDGE_HANDLES[1],
        Edge::Bottom => &EDGE_HANDLES[2],
        Edge::Left => &EDGE_HANDLES[3],
    }
}

/// Look up the corner8 descriptor for `(corner, axis)`.
#[must_use]
pub fn corner_descriptor(corner: Corner, axis: Axis) -> &'static CornerHandleDescriptor {
    let row = match corner {
        Corner::TopLeft => 0,
        Corner::TopRight => 2,
        Corner::BottomRight => 4,
        Corner::BottomLeft => 6,
    };
    match axis {
        Axis::Horizontal => &CORNER_HANDLES[row],
        Axis::Vertical => &CORNER_HANDLES[row + 1],
    }
}

/// Look up the descriptor row for any handle.
#[must_use]
pub fn descriptor(handle: HandleId) -> HandleDescriptor {
    match handle {
        HandleId::Edge(edge) => HandleDescriptor::Edge(edge_descriptor(edge)),
        HandleId::Corner(corner, axis) => HandleDescriptor::Corner(corner_descriptor(corner, axis)),
    }
}

/// Descriptors for the handles shown in `mode`, in display order.
#[must_use]
pub fn descriptors_for_mode(mode: ControlMode) -> Vec<HandleDescriptor> {
    match mode {
        ControlMode::Basic => Vec::new(),
        ControlMode::Edge4 => EDGE_HANDLES.iter().map(HandleDescriptor::Edge).collect(),
        ControlMode::Corner8 => CORNER_HANDLES.iter().map(HandleDescriptor::Corner).collect(),
    }
}

// =============================================================================
// VIEW MODEL
// =============================================================================

/// Inline style for a handle element. Offsets are CSS strings; unset sides
/// are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct HandleStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<String>,
    pub transform: &'static str,
}

impl HandleStyle {
    /// Render as an inline `style` attribute value.
    #[must_use]
    pub fn to_css(&self) -> String {
        let sides = [("left", &self.left), ("top", &self.top), ("right", &self.right), ("bottom", &self.bottom)];
        let mut parts: Vec<String> = sides
            .iter()
            .filter_map(|(name, v)| v.as_ref().map(|v| format!("{name}: {v};")))
            .collect();
        parts.push(format!("transform: {};", self.transform));
        parts.join(" ")
    }
}

/// Everything the host needs to render one handle.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HandleView {
    pub id: HandleId,
    pub key: String,
    pub value: f64,
    pub style: HandleStyle,
    pub aria_label: &'static str,
}

/// Screen position of a corner8 handle, as percentages of the preview box.
///
/// The coordinate along the handle's axis is the value, mirrored for inverted
/// rows; the other coordinate pins the handle to its corner's edge.
#[must_use]
pub fn corner_handle_position(d: &CornerHandleDescriptor, value: f64) -> Point {
    let along = if d.inverted { PERCENT_MAX - value } else { value };
    match d.axis {
        Axis::Horizontal => Point::new(along, if d.corner.is_bottom() { PERCENT_MAX } else { 0.0 }),
        Axis::Vertical => Point::new(if d.corner.is_right() { PERCENT_MAX } else { 0.0 }, along),
    }
}

fn edge_handle_style(d: &EdgeHandleDescriptor, value: f64) -> HandleStyle {
    let mut style = HandleStyle { transform: d.transform, ..HandleStyle::default() };
    let offset = Some(EDGE_HANDLE_OFFSET.to_string());
    match d.edge {
        Edge::Top => style.top = offset,
        Edge::Right => style.right = offset,
        Edge::Bottom => style.bottom = offset,
        Edge::Left => style.left = offset,
    }
    let position = Some(format!("{value}%"));
    match d.position_key {
        PositionKey::Left => style.left = position,
        PositionKey::Top => style.top = position,
    }
    style
}

fn corner_handle_style(d: &CornerHandleDescriptor, value: f64) -> HandleStyle {
    let at = corner_handle_position(d, value);
    HandleStyle {
        left: Some(format!("{}%", at.x)),
        top: Some(format!("{}%", at.y)),
        transform: CENTER_XY_TRANSFORM,
        ..HandleStyle::default()
    }
}

/// Build the view model for one descriptor row against the current state.
#[must_use]
pub fn view(state: &RadiusState, descriptor: HandleDescriptor) -> HandleView {
    let id = descriptor.id();
    let value = state.handle_value(id);
    let style = match descriptor {
        HandleDescriptor::Edge(d) => edge_handle_style(d, value),
        HandleDescriptor::Corner(d) => corner_handle_style(d, value),
    };
    HandleView { id, key: id.key(), value, style, aria_label: descriptor.aria_label() }
}

/// View models for every handle of `mode`.
#[must_use]
pub fn views(state: &RadiusState, mode: ControlMode) -> Vec<HandleView> {
    descriptors_for_mode(mode).into_iter().map(|d| view(state, d)).collect()
}
