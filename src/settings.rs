//! Host presentation settings
//!
//! Gameplay constants are compiled in (`crate::consts`); these only affect
//! how the window and frame look.

use serde::{Deserialize, Serialize};

use crate::consts::WINDOW_TITLE;
use crate::platform::{Color, colors};

/// Window and presentation options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window title
    pub title: String,
    /// Let the user resize the window (logical layout stays 1280x960)
    pub resizable: bool,
    /// Sync presentation to the display refresh
    pub vsync: bool,
    /// Paddle, ball and text color
    pub foreground: Color,
    /// Clear color
    pub background: Color,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE.to_string(),
            resizable: true,
            vsync: true,
            foreground: colors::WHITE,
            background: colors::BLACK,
        }
    }
}

impl Settings {
    /// Compiled-in defaults; nothing is read from disk or the environment
    pub fn load() -> Self {
        log::info!("Using default settings");
        Self::default()
    }

    /// Parse settings from JSON; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
