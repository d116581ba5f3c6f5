//! Preview pane: the rendered fragment markup, read-only.

use crate::theme::ThemeColors;
use crate::ui::toolbar::BROWSER_ICON;
use eframe::egui::{FontId, RichText, ScrollArea, TextEdit, Ui};

/// Caption above the markup, pointing at the browser preview button.
pub const PREVIEW_CAPTION: &str = "HTML source (🌐 opens the rendered page)";

/// Render the preview pane.
pub fn show_preview_pane(ui: &mut Ui, colors: &ThemeColors, html: &str, font_size: f32) {
    ui.label(
        RichText::new(PREVIEW_CAPTION)
            .size(12.0)
            .color(colors.text_muted),
    );
    ui.separator();

    let mut html = html;
    ScrollArea::vertical()
        .id_source("preview_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            // A `&str` buffer keeps the view read-only
            ui.add(
                TextEdit::multiline(&mut html)
                    .font(FontId::monospace(font_size))
                    .desired_width(f32::INFINITY)
                    .frame(false),
            );
        });
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caption_names_source_view() {
        assert!(PREVIEW_CAPTION.starts_with("HTML source"));
    }

    #[test]
    fn test_caption_refers_to_browser_button() {
        assert!(PREVIEW_CAPTION.contains(BROWSER_ICON));
    }
}
