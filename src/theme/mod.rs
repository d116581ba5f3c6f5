//! Theme System for Markpad
//!
//! Maps the persisted `Theme` flag to egui `Visuals` and to the few colors
//! the panes draw themselves. The flag affects presentation only.
//!
//! # Usage
//!
//! ```ignore
//! let mut manager = ThemeManager::new(session.theme());
//! manager.apply_if_needed(ctx);
//! let colors = manager.colors();
//! ```

pub mod manager;

pub use manager::ThemeManager;

use crate::config::Theme;
use eframe::egui::{Color32, Rounding, Stroke, Visuals};

// ─────────────────────────────────────────────────────────────────────────────
// Theme Colors
// ─────────────────────────────────────────────────────────────────────────────

/// Colors used by the editor and preview panes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeColors {
    /// Window and panel background
    pub background: Color32,
    /// Background of the editor and preview panes
    pub pane_background: Color32,
    /// Primary text
    pub text: Color32,
    /// Secondary text (status bar, hints)
    pub text_muted: Color32,
    /// Pane borders and separators
    pub border: Color32,
    /// Buttons and selection
    pub accent: Color32,
    /// Success feedback (copied label)
    pub success: Color32,
}

impl ThemeColors {
    /// Palette for the given theme.
    pub fn from_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::light(),
            Theme::Dark => Self::dark(),
        }
    }

    /// Light palette.
    pub fn light() -> Self {
        Self {
            background: Color32::from_rgb(245, 245, 245),
            pane_background: Color32::WHITE,
            text: Color32::from_rgb(51, 51, 51),
            text_muted: Color32::from_rgb(110, 110, 110),
            border: Color32::from_rgb(221, 221, 221),
            accent: Color32::from_rgb(0, 102, 204),
            success: Color32::from_rgb(40, 160, 70),
        }
    }

    /// Dark palette.
    pub fn dark() -> Self {
        Self {
            background: Color32::from_rgb(30, 30, 30),
            pane_background: Color32::from_rgb(37, 37, 38),
            text: Color32::from_rgb(220, 220, 220),
            text_muted: Color32::from_rgb(150, 150, 150),
            border: Color32::from_rgb(60, 60, 60),
            accent: Color32::from_rgb(86, 156, 214),
            success: Color32::from_rgb(90, 200, 120),
        }
    }

    /// Whether this is a dark palette, judged by background luminance.
    pub fn is_dark(&self) -> bool {
        let [r, g, b, _] = self.background.to_array();
        (u32::from(r) + u32::from(g) + u32::from(b)) / 3 < 128
    }
}

/// Create egui Visuals for the given theme.
pub fn create_visuals(theme: Theme) -> Visuals {
    let colors = ThemeColors::from_theme(theme);
    let mut visuals = if theme.is_dark() {
        Visuals::dark()
    } else {
        Visuals::light()
    };

    visuals.panel_fill = colors.background;
    visuals.window_fill = colors.background;
    visuals.extreme_bg_color = colors.pane_background;
    visuals.hyperlink_color = colors.accent;

    visuals.selection.stroke = Stroke::new(1.0, colors.accent);
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, colors.border);
    visuals.widgets.inactive.rounding = Rounding::same(4.0);
    visuals.widgets.hovered.rounding = Rounding::same(4.0);
    visuals.widgets.active.rounding = Rounding::same(4.0);

    visuals
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_match_theme() {
        assert!(!ThemeColors::from_theme(Theme::Light).is_dark());
        assert!(ThemeColors::from_theme(Theme::Dark).is_dark());
    }

    #[test]
    fn test_text_contrasts_with_background() {
        for colors in [ThemeColors::light(), ThemeColors::dark()] {
            assert_ne!(colors.text, colors.pane_background);
            assert_ne!(colors.text, colors.background);
        }
    }

    #[test]
    fn test_create_visuals_dark_mode_flag() {
        assert!(create_visuals(Theme::Dark).dark_mode);
        assert!(!create_visuals(Theme::Light).dark_mode);
    }

    #[test]
    fn test_create_visuals_uses_palette() {
        let visuals = create_visuals(Theme::Dark);
        assert_eq!(visuals.panel_fill, ThemeColors::dark().background);
        assert_eq!(visuals.extreme_bg_color, ThemeColors::dark().pane_background);
    }
}
