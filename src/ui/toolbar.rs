//! Toolbar UI Component for Markpad
//!
//! One icon button per formatting action, followed by the document actions
//! (theme, copy, downloads, browser preview).

use crate::config::Theme;
use crate::markdown::FormatAction;
use crate::theme::ThemeColors;
use eframe::egui::{self, Color32, Response, RichText, Ui, Vec2};

/// Height of the toolbar.
const TOOLBAR_HEIGHT: f32 = 36.0;

/// Size of icon buttons.
const ICON_BUTTON_SIZE: Vec2 = Vec2::new(32.0, 28.0);

/// Icon of the browser preview button.
pub(crate) const BROWSER_ICON: &str = "🌐";

/// Actions that can be triggered from the toolbar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToolbarAction {
    /// Apply a formatting action at the selection
    Format(FormatAction),
    /// Switch between light and dark
    ToggleTheme,
    /// Copy the rendered fragment markup
    CopyHtml,
    /// Save the buffer as `document.md`
    DownloadMarkdown,
    /// Save the rendered document as `document.html`
    DownloadHtml,
    /// Open the rendered document in the system browser
    PreviewInBrowser,
}

/// Render the toolbar and return any triggered action.
///
/// `copy_label` is the current label of the copy button.
pub fn show_toolbar(
    ui: &mut Ui,
    colors: &ThemeColors,
    theme: Theme,
    copy_label: &str,
) -> Option<ToolbarAction> {
    let mut action = None;
    let is_dark = colors.is_dark();

    ui.horizontal(|ui| {
        ui.set_height(TOOLBAR_HEIGHT);
        ui.spacing_mut().item_spacing.x = 2.0;

        for (index, format) in FormatAction::ALL.iter().enumerate() {
            // Group separators: inline styles | headings | inserts | blocks | clear
            if matches!(index, 3 | 6 | 9 | 13) {
                ui.add_space(4.0);
                ui.separator();
                ui.add_space(4.0);
            }
            if icon_button(ui, format.icon(), &format.tooltip(), is_dark).clicked() {
                action = Some(ToolbarAction::Format(*format));
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if icon_button(ui, theme.toggle_icon(), "Toggle theme", is_dark).clicked() {
                action = Some(ToolbarAction::ToggleTheme);
            }

            let copied = copy_label != crate::state::COPY_LABEL;
            let copy_text = if copied {
                RichText::new(copy_label).color(colors.success)
            } else {
                RichText::new(copy_label)
            };
            if ui
                .button(copy_text)
                .on_hover_text("Copy rendered HTML")
                .clicked()
            {
                action = Some(ToolbarAction::CopyHtml);
            }

            if ui
                .button("⬇ HTML")
                .on_hover_text("Download document.html")
                .clicked()
            {
                action = Some(ToolbarAction::DownloadHtml);
            }

            if ui
                .button("⬇ MD")
                .on_hover_text("Download document.md")
                .clicked()
            {
                action = Some(ToolbarAction::DownloadMarkdown);
            }

            if icon_button(ui, BROWSER_ICON, "Preview in browser", is_dark).clicked() {
                action = Some(ToolbarAction::PreviewInBrowser);
            }
        });
    });

    action
}

/// A frameless button showing `icon`, highlighted on hover.
fn icon_button(ui: &mut Ui, icon: &str, tooltip: &str, is_dark: bool) -> Response {
    let text_color = if is_dark {
        Color32::from_rgb(220, 220, 220)
    } else {
        Color32::from_rgb(50, 50, 50)
    };
    let hover_bg = if is_dark {
        Color32::from_rgb(60, 60, 60)
    } else {
        Color32::from_rgb(220, 220, 220)
    };

    let btn = ui.add(
        egui::Button::new(RichText::new(" ").size(16.0))
            .frame(false)
            .min_size(ICON_BUTTON_SIZE),
    );

    if btn.hovered() {
        ui.painter()
            .rect_filled(btn.rect, egui::Rounding::same(3.0), hover_bg);
    }

    ui.painter().text(
        btn.rect.center(),
        egui::Align2::CENTER_CENTER,
        icon,
        egui::FontId::proportional(15.0),
        text_color,
    );

    btn.on_hover_text(tooltip)
}
