//! Shared numeric and style constants for the radius crate.

// ── Ranges ──────────────────────────────────────────────────────

/// Upper bound for every percentage value (edge4 and corner8 modes).
pub const PERCENT_MAX: f64 = 100.0;

/// Lower bound for every stored value.
pub const PERCENT_MIN: f64 = 0.0;

/// Amount a single arrow-key press moves a handle value.
pub const KEY_STEP: f64 = 1.0;

// ── Defaults ────────────────────────────────────────────────────

/// Initial magnitude for every basic-mode corner.
pub const DEFAULT_BASIC_RADIUS: f64 = 8.0;

/// Initial edge4 values: top, right, bottom, left.
pub const DEFAULT_EDGE4: [f64; 4] = [61.0, 39.0, 32.0, 68.0];

/// Near-edge value in the symmetric corner8 default pattern.
pub const DEFAULT_CORNER8_NEAR: f64 = 30.0;

/// Far-edge value in the symmetric corner8 default pattern.
pub const DEFAULT_CORNER8_FAR: f64 = 70.0;

/// Default preview element width in CSS pixels.
pub const DEFAULT_PREVIEW_WIDTH: f64 = 420.0;

/// Default preview element height in CSS pixels.
pub const DEFAULT_PREVIEW_HEIGHT: f64 = 420.0;

// ── Handle styling ──────────────────────────────────────────────

/// How far edge handles sit outside the preview border.
pub const EDGE_HANDLE_OFFSET: &str = "-1rem";

/// Centering transform for handles positioned along the horizontal axis.
pub const CENTER_X_TRANSFORM: &str = "translateX(-50%)";

/// Centering transform for handles positioned along the vertical axis.
pub const CENTER_Y_TRANSFORM: &str = "translateY(-50%)";

/// Centering transform for corner handles placed by both coordinates.
pub const CENTER_XY_TRANSFORM: &str = "translate(-50%, -50%)";
