//! Application state management for Markpad
//!
//! This module defines the host-owned state that the core functions operate
//! on: the `Session` (document buffer, selection, theme flag and the store they
//! persist to) and the `AppState` that adds settings and UI flags.
//!
//! The renderer and the formatting engine stay pure; everything mutable lives
//! here and is passed to them explicitly.

use crate::config::{
    load_config, save_config_silent, FileStore, KeyValueStore, MemoryStore, Settings, Theme,
    MARKDOWN_KEY, THEME_KEY,
};
use crate::editor::TextStats;
use crate::error::ResultExt;
use crate::markdown::{apply_action, render, EditKind, FormatAction, FormatError};
use crate::string_utils::char_count;
use log::{debug, info, warn};

/// Copy button label.
pub const COPY_LABEL: &str = "📋 Copy HTML";

/// Copy button label shortly after a successful copy.
pub const COPIED_LABEL: &str = "✅ Copied!";

/// Seconds the copy button shows [`COPIED_LABEL`].
pub const COPIED_DURATION: f64 = 2.0;

// ─────────────────────────────────────────────────────────────────────────────
// Session
// ─────────────────────────────────────────────────────────────────────────────

/// The document being edited and the durable state around it.
///
/// Buffer changes only mark the session dirty; [`Session::flush`] writes the
/// buffer to the store. The theme flag is written as soon as it changes.
pub struct Session {
    /// Raw markdown source
    buffer: String,
    /// Selection as `(start, end)` char offsets, `start <= end`
    selection: (usize, usize),
    /// Selection the editor widget should adopt on its next frame
    pending_selection: Option<(usize, usize)>,
    /// Presentation theme
    theme: Theme,
    /// Where the buffer and theme are persisted
    store: Box<dyn KeyValueStore>,
    /// Whether the buffer changed since the last flush
    buffer_dirty: bool,
    /// Rendered fragment for the current buffer
    rendered: Option<String>,
}

impl Session {
    /// Restore a session from `store`.
    ///
    /// A missing buffer is the empty document; a missing or unknown theme is light.
    pub fn load(store: Box<dyn KeyValueStore>) -> Self {
        let buffer = store.get(MARKDOWN_KEY).unwrap_or_default();
        let theme = Theme::from_stored(store.get(THEME_KEY).as_deref());
        info!(
            "Session restored ({} chars, {:?} theme)",
            char_count(&buffer),
            theme
        );

        Self {
            buffer,
            selection: (0, 0),
            pending_selection: None,
            theme,
            store,
            buffer_dirty: false,
            rendered: None,
        }
    }

    /// The raw markdown source.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Mutable access for the editor widget.
    ///
    /// Call [`Session::record_edit`] afterwards so the change is rendered and persisted.
    pub fn buffer_mut(&mut self) -> &mut String {
        &mut self.buffer
    }

    /// Current selection in char offsets.
    pub fn selection(&self) -> (usize, usize) {
        self.selection
    }

    /// Current theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Read access to the backing store.
    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    /// Whether the buffer has unsaved changes.
    pub fn is_dirty(&self) -> bool {
        self.buffer_dirty
    }

    /// Whether the editor has a selection to place on its next frame.
    pub fn has_pending_selection(&self) -> bool {
        self.pending_selection.is_some()
    }

    /// Take the selection the editor should place on its next frame.
    pub fn take_pending_selection(&mut self) -> Option<(usize, usize)> {
        self.pending_selection.take()
    }

    /// Record the editor's state after a frame.
    pub fn record_edit(&mut self, changed: bool, selection: (usize, usize)) {
        if changed {
            self.mark_buffer_changed();
        }
        self.selection = self.clamp_selection(selection);
    }

    /// Apply a formatting action at the current selection.
    ///
    /// `confirm` is asked before [`FormatAction::Clear`] empties the buffer.
    /// A confirmed clear removes the stored buffer immediately.
    pub fn apply<F>(&mut self, action: FormatAction, confirm: F) -> Result<EditKind, FormatError>
    where
        F: FnOnce(&str) -> bool,
    {
        let (start, end) = self.selection;
        let edit = apply_action(&self.buffer, start, end, action, confirm)?;
        debug!(
            "Applied {} at {}..{}, caret now {}",
            action,
            start,
            end,
            edit.cursor()
        );

        match edit.kind {
            EditKind::Inserted => {
                self.buffer = edit.text;
                self.mark_buffer_changed();
            }
            EditKind::Cleared => {
                self.buffer = edit.text;
                self.rendered = None;
                self.buffer_dirty = false;
                self.store
                    .remove(MARKDOWN_KEY)
                    .unwrap_or_warn_default((), "Failed to remove stored document");
                info!("Document cleared");
            }
            EditKind::Unchanged => {}
        }
        self.place_selection(edit.selection);

        Ok(edit.kind)
    }

    /// Flip the theme and persist it.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggle();
        self.store
            .set(THEME_KEY, self.theme.as_stored())
            .unwrap_or_warn_default((), "Failed to save theme");
        info!("Theme switched to {:?}", self.theme);
        self.theme
    }

    /// Write the buffer to the store if it changed. Returns `true` if a write happened.
    pub fn flush(&mut self) -> bool {
        if !self.buffer_dirty {
            return false;
        }
        match self.store.set(MARKDOWN_KEY, &self.buffer) {
            Ok(()) => {
                self.buffer_dirty = false;
                debug!("Persisted document ({} bytes)", self.buffer.len());
                true
            }
            Err(e) => {
                warn!("Failed to persist document: {}", e);
                false
            }
        }
    }

    /// Rendered fragment of the current buffer, cached until the next change.
    pub fn html(&mut self) -> &str {
        let buffer = &self.buffer;
        self.rendered.get_or_insert_with(|| render(buffer))
    }

    /// Statistics for the status bar.
    pub fn stats(&self) -> TextStats {
        TextStats::from_text(&self.buffer)
    }

    fn mark_buffer_changed(&mut self) {
        self.buffer_dirty = true;
        self.rendered = None;
    }

    fn place_selection(&mut self, selection: (usize, usize)) {
        self.selection = self.clamp_selection(selection);
        self.pending_selection = Some(self.selection);
    }

    fn clamp_selection(&self, (start, end): (usize, usize)) -> (usize, usize) {
        let len = char_count(&self.buffer);
        let end = end.min(len);
        (start.min(end), end)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// UI State
// ─────────────────────────────────────────────────────────────────────────────

/// UI-related state flags.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Whether the clear confirmation dialog is open
    pub show_clear_confirm: bool,
    /// When the last successful copy happened (app time in seconds)
    pub copied_at: Option<f64>,
    /// Temporary toast message (shown in the status bar)
    pub toast_message: Option<String>,
    /// When the toast message should expire (app time in seconds)
    pub toast_expires_at: Option<f64>,
    /// Whether to show error modal
    pub show_error_modal: bool,
    /// Error message for modal
    pub error_message: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Application State
// ─────────────────────────────────────────────────────────────────────────────

/// Central application state struct.
///
/// # Example
///
/// ```ignore
/// let mut state = AppState::new();
/// state.handle_action(FormatAction::Bold);
/// state.flush();
/// ```
pub struct AppState {
    /// The open document
    pub session: Session,
    /// User settings (loaded from config)
    pub settings: Settings,
    /// UI-related state
    pub ui: UiState,
    /// Whether settings have been modified and need saving
    settings_dirty: bool,
}

impl AppState {
    /// Create the state from the config file and the default session store.
    ///
    /// Without a config directory the session lives in memory only.
    pub fn new() -> Self {
        let settings = load_config();
        let store: Box<dyn KeyValueStore> = match FileStore::open_default() {
            Ok(store) => {
                info!("Session storage at {}", store.path().display());
                Box::new(store)
            }
            Err(e) => {
                warn!("{}. Session will not be saved.", e);
                Box::new(MemoryStore::new())
            }
        };
        Self::with_parts(settings, store)
    }

    /// Create the state from explicit settings and store.
    pub fn with_parts(settings: Settings, store: Box<dyn KeyValueStore>) -> Self {
        Self {
            session: Session::load(store),
            settings,
            ui: UiState::default(),
            settings_dirty: false,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Formatting
    // ─────────────────────────────────────────────────────────────────────────

    /// Run a toolbar or shortcut action.
    ///
    /// Clear opens the confirmation dialog instead of applying.
    pub fn handle_action(&mut self, action: FormatAction) {
        if action == FormatAction::Clear {
            self.ui.show_clear_confirm = true;
            return;
        }
        if let Err(e) = self.session.apply(action, |_| false) {
            warn!("Ignoring {}: {}", action, e);
        }
    }

    /// Close the clear dialog with the user's answer.
    pub fn resolve_clear(&mut self, confirmed: bool) {
        self.ui.show_clear_confirm = false;
        if let Err(e) = self.session.apply(FormatAction::Clear, |_| confirmed) {
            warn!("Ignoring clear: {}", e);
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Settings
    // ─────────────────────────────────────────────────────────────────────────

    /// Modify settings and mark them for saving.
    pub fn update_settings<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Settings),
    {
        f(&mut self.settings);
        self.settings_dirty = true;
    }

    /// Save settings to config file if modified.
    ///
    /// Returns `true` if settings were saved.
    pub fn save_settings_if_dirty(&mut self) -> bool {
        if self.settings_dirty {
            if save_config_silent(&self.settings) {
                self.settings_dirty = false;
                info!("Settings saved");
                return true;
            }
            warn!("Failed to save settings");
        }
        false
    }

    /// Persist everything that changed: the document and the settings.
    pub fn flush(&mut self) {
        self.session.flush();
        self.save_settings_if_dirty();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Notifications
    // ─────────────────────────────────────────────────────────────────────────

    /// Record a successful copy at `current_time`.
    pub fn mark_copied(&mut self, current_time: f64) {
        self.ui.copied_at = Some(current_time);
    }

    /// Label of the copy button at `current_time`.
    pub fn copy_label(&self, current_time: f64) -> &'static str {
        match self.ui.copied_at {
            Some(at) if current_time - at < COPIED_DURATION => COPIED_LABEL,
            _ => COPY_LABEL,
        }
    }

    /// Show a temporary toast message (disappears after duration).
    pub fn show_toast(&mut self, message: impl Into<String>, current_time: f64, duration: f64) {
        self.ui.toast_message = Some(message.into());
        self.ui.toast_expires_at = Some(current_time + duration);
    }

    /// Update toast state - clears expired toasts.
    ///
    /// Call this each frame with the current time.
    pub fn update_toast(&mut self, current_time: f64) {
        if let Some(expires_at) = self.ui.toast_expires_at {
            if current_time >= expires_at {
                self.ui.toast_message = None;
                self.ui.toast_expires_at = None;
            }
        }
    }

    /// Show an error message in a modal dialog.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.ui.error_message = message.into();
        self.ui.show_error_modal = true;
    }

    /// Dismiss the error modal.
    pub fn dismiss_error(&mut self) {
        self.ui.show_error_modal = false;
        self.ui.error_message.clear();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
