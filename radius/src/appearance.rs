//! Preview element appearance: its size and optional background image.

#[cfg(test)]
#[path = "appearance_test.rs"]
mod appearance_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_PREVIEW_HEIGHT, DEFAULT_PREVIEW_WIDTH};
use crate::coords::Rect;
use crate::radius::RadiusState;

/// Size and background of the preview box the handles are laid out on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewAppearance {
    pub width: f64,
    pub height: f64,
    pub background_url: Option<String>,
}

impl Default for PreviewAppearance {
    fn default() -> Self {
        Self { width: DEFAULT_PREVIEW_WIDTH, height: DEFAULT_PREVIEW_HEIGHT, background_url: None }
    }
}

impl PreviewAppearance {
    /// Reference rectangle for a preview placed with its top-left at the
    /// client origin.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Inline style for the preview element, including the active
    /// `border-radius` declaration.
    #[must_use]
    pub fn preview_css(&self, state: &RadiusState) -> String {
        let mut parts = vec![format!("width: {}px;", self.width), format!("height: {}px;", self.height)];
        if let Some(url) = self.background_url.as_deref().filter(|u| !u.is_empty()) {
            parts.push(format!("background-image: url(\"{url}\");"));
            parts.push("background-size: cover;".to_string());
        }
        parts.push(state.compute_css_declaration());
        parts.join(" ")
    }
}
