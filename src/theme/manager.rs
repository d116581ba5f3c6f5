//! Theme Manager for Markpad
//!
//! Tracks the active theme and applies its visuals to the egui context only
//! when the theme changes.

use eframe::egui::{Context, Visuals};
use log::{debug, info};

use super::{create_visuals, ThemeColors};
use crate::config::Theme;

// ─────────────────────────────────────────────────────────────────────────────
// Theme Manager
// ─────────────────────────────────────────────────────────────────────────────

/// Manages theme state and applies themes to the egui context.
#[derive(Debug, Clone)]
pub struct ThemeManager {
    /// Current theme
    current_theme: Theme,
    /// Cached visuals for the current theme
    cached_visuals: Option<Visuals>,
    /// Whether the theme needs to be reapplied
    needs_apply: bool,
}

impl ThemeManager {
    /// Create a new ThemeManager with the given initial theme.
    pub fn new(theme: Theme) -> Self {
        info!("ThemeManager initialized with theme: {:?}", theme);
        Self {
            current_theme: theme,
            cached_visuals: None,
            needs_apply: true,
        }
    }

    /// Get the current theme.
    pub fn current_theme(&self) -> Theme {
        self.current_theme
    }

    /// Set the theme and mark for reapplication.
    ///
    /// This doesn't apply the theme immediately - call `apply_if_needed()` to update the UI.
    pub fn set_theme(&mut self, theme: Theme) {
        if self.current_theme != theme {
            debug!("Theme changed from {:?} to {:?}", self.current_theme, theme);
            self.current_theme = theme;
            self.cached_visuals = None;
            self.needs_apply = true;
        }
    }

    /// Check if the theme needs to be reapplied.
    pub fn needs_apply(&self) -> bool {
        self.needs_apply
    }

    /// Apply the current theme to the egui context.
    pub fn apply(&mut self, ctx: &Context) {
        ctx.set_visuals(self.visuals());
        self.needs_apply = false;
        debug!("Applied theme: {:?}", self.current_theme);
    }

    /// Apply the theme only if it changed. Returns `true` if the theme was applied.
    pub fn apply_if_needed(&mut self, ctx: &Context) -> bool {
        if self.needs_apply {
            self.apply(ctx);
            true
        } else {
            false
        }
    }

    /// Visuals for the current theme, created on first use.
    pub fn visuals(&mut self) -> Visuals {
        let theme = self.current_theme;
        self.cached_visuals
            .get_or_insert_with(|| create_visuals(theme))
            .clone()
    }

    /// Colors for the current theme.
    pub fn colors(&self) -> ThemeColors {
        ThemeColors::from_theme(self.current_theme)
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_needs_apply() {
        let manager = ThemeManager::new(Theme::Dark);
        assert_eq!(manager.current_theme(), Theme::Dark);
        assert!(manager.needs_apply());
    }

    #[test]
    fn test_apply_clears_flag() {
        let ctx = Context::default();
        let mut manager = ThemeManager::new(Theme::Dark);

        assert!(manager.apply_if_needed(&ctx));
        assert!(!manager.needs_apply());
        assert!(!manager.apply_if_needed(&ctx));
        assert!(ctx.style().visuals.dark_mode);
    }

    #[test]
    fn test_set_same_theme_is_noop() {
        let ctx = Context::default();
        let mut manager = ThemeManager::new(Theme::Light);
        manager.apply(&ctx);

        manager.set_theme(Theme::Light);
        assert!(!manager.needs_apply());

        manager.set_theme(Theme::Dark);
        assert!(manager.needs_apply());
        assert!(manager.visuals().dark_mode);
    }

    #[test]
    fn test_colors_follow_theme() {
        let mut manager = ThemeManager::default();
        assert_eq!(manager.colors(), ThemeColors::light());
        manager.set_theme(Theme::Dark);
        assert_eq!(manager.colors(), ThemeColors::dark());
    }
}
