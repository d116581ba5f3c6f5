//! Main application module for Markpad
//!
//! This module implements the eframe App trait: it lays out the toolbar,
//! the editor and preview panes and the status bar, and routes toolbar
//! buttons and keyboard shortcuts into `AppState`.

use crate::config::{Settings, WindowSize};
use crate::editor::EditorWidget;
use crate::export::{copy_html_to_clipboard, preview_in_browser, write_export, ExportFormat};
use crate::files::save_export_dialog;
use crate::markdown::FormatAction;
use crate::state::{AppState, COPIED_DURATION};
use crate::theme::ThemeManager;
use crate::ui::{
    show_clear_dialog, show_error_dialog, show_preview_pane, show_status_bar, show_toolbar,
    ConfirmResult, ToolbarAction,
};
use eframe::egui;
use log::{debug, info, warn};
use std::time::Duration;

/// The main application struct that implements eframe::App.
pub struct MarkpadApp {
    /// Application state
    state: AppState,
    /// Theme manager for handling theme switching
    theme_manager: ThemeManager,
    /// Last known window size (for detecting changes)
    last_window_size: Option<egui::Vec2>,
    /// Last known window position (for detecting changes)
    last_window_pos: Option<egui::Pos2>,
    /// Application start time for timing toast messages
    start_time: std::time::Instant,
}

impl MarkpadApp {
    /// Create a new MarkpadApp instance.
    ///
    /// This restores the session and settings and applies the saved theme.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        info!("Initializing Markpad");

        let state = AppState::new();

        let mut theme_manager = ThemeManager::new(state.session.theme());
        theme_manager.apply(&cc.egui_ctx);

        Self {
            state,
            theme_manager,
            last_window_size: None,
            last_window_pos: None,
            start_time: std::time::Instant::now(),
        }
    }

    /// Get elapsed time since app start in seconds.
    fn get_app_time(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }

    /// Update window size in settings if changed.
    fn update_window_state(&mut self, ctx: &egui::Context) {
        let Some(rect) = ctx.input(|i| i.viewport().outer_rect) else {
            return;
        };
        let current_size = rect.size();
        let current_pos = rect.min;

        let size_changed = self
            .last_window_size
            .map(|s| (s - current_size).length() > 1.0)
            .unwrap_or(true);
        let pos_changed = self
            .last_window_pos
            .map(|p| (p - current_pos).length() > 1.0)
            .unwrap_or(true);

        if size_changed || pos_changed {
            self.last_window_size = Some(current_size);
            self.last_window_pos = Some(current_pos);
            let maximized = ctx.input(|i| i.viewport().maximized.unwrap_or(false));

            self.state.update_settings(|settings| {
                settings.window_size = WindowSize {
                    width: current_size.x,
                    height: current_size.y,
                    x: Some(current_pos.x),
                    y: Some(current_pos.y),
                    maximized,
                };
            });
            debug!(
                "Window state updated: {}x{} at ({}, {}), maximized: {}",
                current_size.x, current_size.y, current_pos.x, current_pos.y, maximized
            );
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Input
    // ─────────────────────────────────────────────────────────────────────────

    /// Take the formatting shortcuts out of the input queue before the
    /// editor handles this frame's events.
    fn consume_shortcuts(&self, ctx: &egui::Context) -> Option<FormatAction> {
        ctx.input_mut(|i| {
            if i.consume_key(egui::Modifiers::COMMAND, egui::Key::B) {
                debug!("Keyboard shortcut: Ctrl+B (Bold)");
                Some(FormatAction::Bold)
            } else if i.consume_key(egui::Modifiers::COMMAND, egui::Key::I) {
                debug!("Keyboard shortcut: Ctrl+I (Italic)");
                Some(FormatAction::Italic)
            } else {
                None
            }
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Layout
    // ─────────────────────────────────────────────────────────────────────────

    /// Render the main UI content.
    /// Returns the toolbar action clicked this frame, if any.
    fn render_ui(&mut self, ctx: &egui::Context) -> Option<ToolbarAction> {
        let colors = self.theme_manager.colors();
        let current_time = self.get_app_time();
        let mut action = None;

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            action = show_toolbar(
                ui,
                &colors,
                self.state.session.theme(),
                self.state.copy_label(current_time),
            );
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            let stats = self.state.session.stats();
            show_status_bar(ui, &colors, &stats, self.state.ui.toast_message.as_deref());
        });

        let total_width = ctx.screen_rect().width().max(1.0);
        let split_ratio = self.state.settings.split_ratio;
        let font_size = self.state.settings.font_size;
        let word_wrap = self.state.settings.word_wrap;

        let editor_panel = egui::SidePanel::left("editor_pane")
            .resizable(true)
            .default_width(total_width * split_ratio)
            .width_range(
                total_width * Settings::MIN_SPLIT_RATIO..=total_width * Settings::MAX_SPLIT_RATIO,
            )
            .frame(egui::Frame::none().fill(colors.pane_background).inner_margin(8.0))
            .show(ctx, |ui| {
                let session = &mut self.state.session;
                let pending = session.take_pending_selection();
                let selection = session.selection();
                let output = EditorWidget::new(session.buffer_mut(), selection)
                    .font_size(font_size)
                    .word_wrap(word_wrap)
                    .place_selection(pending)
                    .show(ui);
                session.record_edit(output.changed, output.selection);
            });

        let new_ratio = editor_panel.response.rect.width() / total_width;
        if (new_ratio - split_ratio).abs() > 0.01 {
            self.state.update_settings(|settings| {
                settings.split_ratio =
                    new_ratio.clamp(Settings::MIN_SPLIT_RATIO, Settings::MAX_SPLIT_RATIO);
            });
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(colors.pane_background).inner_margin(8.0))
            .show(ctx, |ui| {
                let html = self.state.session.html();
                show_preview_pane(ui, &colors, html, font_size);
            });

        action
    }

    /// Render the modal dialogs.
    fn render_dialogs(&mut self, ctx: &egui::Context) {
        let colors = self.theme_manager.colors();

        if self.state.ui.show_clear_confirm {
            match show_clear_dialog(ctx, &colors) {
                ConfirmResult::Pending => {}
                ConfirmResult::Confirmed => self.state.resolve_clear(true),
                ConfirmResult::Cancelled => self.state.resolve_clear(false),
            }
        }

        if self.state.ui.show_error_modal
            && show_error_dialog(ctx, &colors, &self.state.ui.error_message)
        {
            self.state.dismiss_error();
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Actions
    // ─────────────────────────────────────────────────────────────────────────

    fn handle_toolbar_action(&mut self, action: ToolbarAction, ctx: &egui::Context) {
        match action {
            ToolbarAction::Format(format) => self.state.handle_action(format),
            ToolbarAction::ToggleTheme => {
                let theme = self.state.session.toggle_theme();
                self.theme_manager.set_theme(theme);
                self.theme_manager.apply_if_needed(ctx);
            }
            ToolbarAction::CopyHtml => self.handle_copy_html(ctx),
            ToolbarAction::DownloadMarkdown => self.handle_download(ExportFormat::Markdown),
            ToolbarAction::DownloadHtml => self.handle_download(ExportFormat::Html),
            ToolbarAction::PreviewInBrowser => self.handle_preview_in_browser(),
        }
    }

    /// Copy the rendered fragment markup to the clipboard.
    fn handle_copy_html(&mut self, ctx: &egui::Context) {
        let time = self.get_app_time();
        match copy_html_to_clipboard(self.state.session.html()) {
            Ok(()) => {
                self.state.mark_copied(time);
                ctx.request_repaint_after(Duration::from_secs_f64(COPIED_DURATION));
            }
            Err(e) => {
                warn!("Failed to copy HTML to clipboard: {}", e);
                self.state
                    .show_toast(format!("Copy failed: {}", e), time, 3.0);
            }
        }
    }

    /// Ask for a location and write the document in `format`.
    fn handle_download(&mut self, format: ExportFormat) {
        let initial_dir = self.state.settings.last_export_directory.clone();
        let Some(path) = save_export_dialog(format, initial_dir.as_deref()) else {
            debug!("{} download cancelled", format.file_name());
            return;
        };

        let fragment = self.state.session.html().to_owned();
        let time = self.get_app_time();
        match write_export(&path, format, self.state.session.buffer(), &fragment) {
            Ok(()) => {
                if let Some(parent) = path.parent() {
                    let parent = parent.to_path_buf();
                    self.state
                        .update_settings(|settings| settings.last_export_directory = Some(parent));
                }
                self.state
                    .show_toast(format!("Exported to {}", path.display()), time, 2.5);

                if self.state.settings.open_after_export {
                    if let Err(e) = open::that(&path) {
                        warn!("Failed to open exported file: {}", e);
                    }
                }
            }
            Err(e) => {
                warn!("Export failed: {}", e);
                self.state.show_error(format!("Export failed: {}", e));
            }
        }
    }

    /// Open the rendered document in the system browser.
    fn handle_preview_in_browser(&mut self) {
        let fragment = self.state.session.html().to_owned();
        match preview_in_browser(&fragment) {
            Ok(path) => info!("Opened browser preview at {}", path.display()),
            Err(e) => {
                warn!("Browser preview failed: {}", e);
                self.state.show_error(format!("Preview failed: {}", e));
            }
        }
    }
}

impl eframe::App for MarkpadApp {
    /// Called each time the UI needs repainting.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.theme_manager.apply_if_needed(ctx);

        let current_time = self.get_app_time();
        self.state.update_toast(current_time);
        self.update_window_state(ctx);

        // Shortcuts are consumed before the editor sees them but applied after
        // render, so the selection they act on is this frame's
        let shortcut = self.consume_shortcuts(ctx);
        let toolbar_action = self.render_ui(ctx);
        self.render_dialogs(ctx);

        if !self.state.ui.show_clear_confirm {
            if let Some(format) = shortcut {
                self.state.handle_action(format);
            }
            if let Some(action) = toolbar_action {
                self.handle_toolbar_action(action, ctx);
            }
        }

        // The editor places a new selection on its next frame
        if self.state.session.has_pending_selection() {
            ctx.request_repaint();
        }

        self.state.session.flush();
    }

    /// Called when the application is about to close.
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application exiting");
        self.state.flush();
    }

    /// Save persistent state.
    fn save(&mut self, _storage: &mut dyn eframe::Storage) {
        debug!("Saving application state");
        self.state.save_settings_if_dirty();
    }

    /// Auto-save interval in seconds.
    fn auto_save_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(30)
    }
}
