//! Studio configuration parsed from environment variables.

use radius::{ControlMode, Unit};

pub const DEFAULT_PREVIEW_SIZE: f64 = 420.0;

/// An environment variable held a value that does not name a mode or unit.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("invalid {var}: {value}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StudioConfig {
    pub mode: ControlMode,
    pub unit: Unit,
    pub preview_width: f64,
    pub preview_height: f64,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            mode: ControlMode::Basic,
            unit: Unit::Px,
            preview_width: DEFAULT_PREVIEW_SIZE,
            preview_height: DEFAULT_PREVIEW_SIZE,
        }
    }
}

impl StudioConfig {
    /// Build typed studio config from environment variables.
    ///
    /// Optional:
    /// - `RADIUS_MODE`: `basic` (default), `edge4`, or `corner8`
    /// - `RADIUS_UNIT`: `px` (default), `%`, `em`, or `rem`
    /// - `RADIUS_PREVIEW_WIDTH`: default 420
    /// - `RADIUS_PREVIEW_HEIGHT`: default 420
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] over an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mode = match lookup("RADIUS_MODE") {
            Some(raw) => raw
                .parse::<ControlMode>()
                .map_err(|_| ConfigError { var: "RADIUS_MODE", value: raw })?,
            None => ControlMode::Basic,
        };
        let unit = match lookup("RADIUS_UNIT") {
            Some(raw) => raw
                .parse::<Unit>()
                .map_err(|_| ConfigError { var: "RADIUS_UNIT", value: raw })?,
            None => Unit::Px,
        };
        Ok(Self {
            mode,
            unit,
            preview_width: parse_size(lookup("RADIUS_PREVIEW_WIDTH")),
            preview_height: parse_size(lookup("RADIUS_PREVIEW_HEIGHT")),
        })
    }
}

/// Positive finite sizes only; anything else falls back to the default.
fn parse_size(raw: Option<String>) -> f64 {
    raw.and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v > 0.0)
        .unwrap_or(DEFAULT_PREVIEW_SIZE)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
