//! Status bar: document statistics and transient messages.

use crate::editor::TextStats;
use crate::theme::ThemeColors;
use eframe::egui::{self, RichText, Ui};

/// Render the status bar.
pub fn show_status_bar(ui: &mut Ui, colors: &ThemeColors, stats: &TextStats, toast: Option<&str>) {
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(stats.word_label())
                .size(12.0)
                .color(colors.text_muted),
        );
        ui.label(
            RichText::new(format!("{} chars", stats.characters))
                .size(12.0)
                .color(colors.text_muted),
        );

        if let Some(message) = toast {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(message).size(12.0).color(colors.text));
            });
        }
    });
}
