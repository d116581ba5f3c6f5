//! User settings and preferences for Markpad
//!
//! This module defines the theme flag and the `Settings` struct that holds
//! presentation preferences, with serde support for JSON persistence.
//! The theme flag is stored on its own under the `theme` key (see
//! `persistence`), not inside `Settings`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Theme Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Color theme of the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Switch between light and dark.
    pub fn toggle(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Whether this is the dark theme.
    pub fn is_dark(&self) -> bool {
        *self == Theme::Dark
    }

    /// Value written to the store.
    pub fn as_stored(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Read the stored value. Anything other than `"dark"` is light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// Icon for the toggle button: the theme a click switches to.
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Window Size Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Window dimensions and position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowSize {
    /// Window width in pixels
    pub width: f32,
    /// Window height in pixels
    pub height: f32,
    /// Window X position (optional, for restoring position)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    /// Window Y position (optional, for restoring position)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
    /// Whether the window was maximized
    #[serde(default)]
    pub maximized: bool,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: 1100.0,
            height: 720.0,
            x: None,
            y: None,
            maximized: false,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Main Settings Struct
// ─────────────────────────────────────────────────────────────────────────────

/// Presentation preferences, persisted as `config.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Editor font size in points
    pub font_size: f32,

    /// Wrap long lines in the editor pane
    pub word_wrap: bool,

    /// Fraction of the width given to the editor pane
    pub split_ratio: f32,

    /// Window size and position
    pub window_size: WindowSize,

    /// Directory of the last export, used as the dialog's starting point
    pub last_export_directory: Option<PathBuf>,

    /// Open exported files with the system handler
    pub open_after_export: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            word_wrap: true,
            split_ratio: 0.5,
            window_size: WindowSize::default(),
            last_export_directory: None,
            open_after_export: false,
        }
    }
}

impl Settings {
    // ─────────────────────────────────────────────────────────────────────────
    // Validation Constants and Sanitization
    // ─────────────────────────────────────────────────────────────────────────

    /// Minimum allowed font size.
    pub const MIN_FONT_SIZE: f32 = 8.0;
    /// Maximum allowed font size.
    pub const MAX_FONT_SIZE: f32 = 72.0;
    /// Minimum window dimension.
    pub const MIN_WINDOW_SIZE: f32 = 200.0;
    /// Maximum window dimension.
    pub const MAX_WINDOW_SIZE: f32 = 10000.0;
    /// Minimum editor share of the split.
    pub const MIN_SPLIT_RATIO: f32 = 0.1;
    /// Maximum editor share of the split.
    pub const MAX_SPLIT_RATIO: f32 = 0.9;

    /// Sanitize settings by clamping values to valid ranges.
    ///
    /// This is useful after loading settings from a file that might have
    /// been manually edited with invalid values.
    pub fn sanitize(&mut self) {
        self.font_size = self
            .font_size
            .clamp(Self::MIN_FONT_SIZE, Self::MAX_FONT_SIZE);

        self.window_size.width = self
            .window_size
            .width
            .clamp(Self::MIN_WINDOW_SIZE, Self::MAX_WINDOW_SIZE);
        self.window_size.height = self
            .window_size
            .height
            .clamp(Self::MIN_WINDOW_SIZE, Self::MAX_WINDOW_SIZE);

        self.split_ratio = self
            .split_ratio
            .clamp(Self::MIN_SPLIT_RATIO, Self::MAX_SPLIT_RATIO);
    }

    /// Load settings and sanitize them to ensure validity.
    ///
    /// This is a convenience method that deserializes and then sanitizes.
    pub fn from_json_sanitized(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Self = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();

        assert_eq!(settings.font_size, 14.0);
        assert!(settings.word_wrap);
        assert_eq!(settings.split_ratio, 0.5);
        assert_eq!(settings.window_size.width, 1100.0);
        assert!(settings.last_export_directory.is_none());
        assert!(!settings.open_after_export);
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert!(Theme::Dark.is_dark());
        assert!(!Theme::Light.is_dark());
    }

    #[test]
    fn test_theme_stored_values() {
        assert_eq!(Theme::Dark.as_stored(), "dark");
        assert_eq!(Theme::Light.as_stored(), "light");
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("DARK")), Theme::Light);
        assert_eq!(Theme::from_stored(None), Theme::Light);
    }

    #[test]
    fn test_theme_toggle_icon() {
        assert_eq!(Theme::Light.toggle_icon(), "🌙");
        assert_eq!(Theme::Dark.toggle_icon(), "☀");
    }

    #[test]
    fn test_theme_serialization() {
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    }

    #[test]
    fn test_sanitize_clamps_values() {
        let mut settings = Settings {
            font_size: 2.0,
            split_ratio: 1.5,
            window_size: WindowSize {
                width: 50.0,
                height: 50_000.0,
                ..WindowSize::default()
            },
            ..Settings::default()
        };
        settings.sanitize();

        assert_eq!(settings.font_size, Settings::MIN_FONT_SIZE);
        assert_eq!(settings.split_ratio, Settings::MAX_SPLIT_RATIO);
        assert_eq!(settings.window_size.width, Settings::MIN_WINDOW_SIZE);
        assert_eq!(settings.window_size.height, Settings::MAX_WINDOW_SIZE);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json_sanitized(r#"{"font_size": 18.0}"#).unwrap();
        assert_eq!(settings.font_size, 18.0);
        assert!(settings.word_wrap);
        assert_eq!(settings.window_size, WindowSize::default());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let result = Settings::from_json_sanitized(r#"{"word_wrap": false, "future": 1}"#);
        assert!(!result.unwrap().word_wrap);
    }

    #[test]
    fn test_wrong_types_rejected() {
        assert!(Settings::from_json_sanitized(r#"{"font_size": "big"}"#).is_err());
    }

    #[test]
    fn test_settings_roundtrip() {
        let original = Settings {
            font_size: 20.0,
            word_wrap: false,
            split_ratio: 0.4,
            last_export_directory: Some(PathBuf::from("/tmp/exports")),
            open_after_export: true,
            ..Settings::default()
        };
        let json = serde_json::to_string_pretty(&original).unwrap();
        let loaded = Settings::from_json_sanitized(&json).unwrap();
        assert_eq!(original, loaded);
    }
}
