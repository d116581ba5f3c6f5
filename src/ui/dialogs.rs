//! Modal dialogs: clear confirmation and error messages.

use crate::markdown::CLEAR_PROMPT;
use crate::theme::ThemeColors;
use eframe::egui::{self, Color32, Key, RichText};

/// Answer from a confirmation dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmResult {
    /// Dialog is still open
    Pending,
    /// User confirmed
    Confirmed,
    /// User cancelled (button or Escape)
    Cancelled,
}

/// Show the clear confirmation dialog.
pub fn show_clear_dialog(ctx: &egui::Context, colors: &ThemeColors) -> ConfirmResult {
    if ctx.input(|i| i.key_pressed(Key::Escape)) {
        return ConfirmResult::Cancelled;
    }

    let mut result = ConfirmResult::Pending;

    modal_window(ctx, "🗑 Clear", colors).show(ctx, |ui| {
        ui.set_min_width(280.0);
        ui.add_space(8.0);
        ui.label(CLEAR_PROMPT);
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let clear_button = egui::Button::new(RichText::new("Clear").color(Color32::WHITE))
                    .fill(Color32::from_rgb(200, 60, 60));
                if ui.add(clear_button).clicked() {
                    result = ConfirmResult::Confirmed;
                }

                ui.add_space(8.0);

                if ui.button("Cancel").clicked() {
                    result = ConfirmResult::Cancelled;
                }
            });
        });

        ui.add_space(4.0);
    });

    result
}

/// Show an error message. Returns `true` once dismissed.
pub fn show_error_dialog(ctx: &egui::Context, colors: &ThemeColors, message: &str) -> bool {
    let mut dismissed = ctx.input(|i| i.key_pressed(Key::Escape));

    modal_window(ctx, "⚠ Error", colors).show(ctx, |ui| {
        ui.set_min_width(320.0);
        ui.add_space(8.0);
        ui.label(message);
        ui.add_space(12.0);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });
    });

    dismissed
}

fn modal_window<'a>(ctx: &egui::Context, title: &'a str, colors: &ThemeColors) -> egui::Window<'a> {
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .frame(
            egui::Frame::window(&ctx.style())
                .fill(colors.pane_background)
                .stroke(egui::Stroke::new(1.0, colors.border))
                .rounding(8.0),
        )
}
