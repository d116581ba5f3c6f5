//! Text editor widget for Markpad
//!
//! This module wraps egui's multiline `TextEdit` so the host can read the
//! current selection as char offsets after every frame and place the
//! selection after a formatting action rewrites the buffer.

use eframe::egui::{self, FontId, ScrollArea, TextEdit, Ui};
use eframe::egui::text::{CCursor, CCursorRange};
use log::debug;
use std::sync::Arc;

/// Result of showing the editor widget.
pub struct EditorOutput {
    /// Whether the user modified the content this frame.
    pub changed: bool,
    /// Selection as ordered `(start, end)` char offsets.
    pub selection: (usize, usize),
}

/// A text editor widget bound to a buffer and its selection.
///
/// # Example
///
/// ```ignore
/// let output = EditorWidget::new(&mut session.buffer, session.selection)
///     .font_size(settings.font_size)
///     .word_wrap(settings.word_wrap)
///     .place_selection(session.take_pending_selection())
///     .show(ui);
/// ```
pub struct EditorWidget<'a> {
    text: &'a mut String,
    selection: (usize, usize),
    font_size: f32,
    word_wrap: bool,
    place_selection: Option<(usize, usize)>,
}

impl<'a> EditorWidget<'a> {
    /// Create an editor over `text` whose last known selection is `selection`.
    pub fn new(text: &'a mut String, selection: (usize, usize)) -> Self {
        Self {
            text,
            selection,
            font_size: 14.0,
            word_wrap: true,
            place_selection: None,
        }
    }

    /// Set the font size.
    #[must_use]
    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Enable or disable word wrap.
    #[must_use]
    pub fn word_wrap(mut self, wrap: bool) -> Self {
        self.word_wrap = wrap;
        self
    }

    /// Move the selection to `(start, end)` and focus the editor before showing it.
    #[must_use]
    pub fn place_selection(mut self, selection: Option<(usize, usize)>) -> Self {
        self.place_selection = selection;
        self
    }

    /// Show the editor and return the resulting content state.
    pub fn show(self, ui: &mut Ui) -> EditorOutput {
        let id = ui.id().with("editor");
        let char_len = self.text.chars().count();

        if let Some((start, end)) = self.place_selection {
            let start = start.min(char_len);
            let end = end.min(char_len);
            let mut state = TextEdit::load_state(ui.ctx(), id).unwrap_or_default();
            state
                .cursor
                .set_char_range(Some(CCursorRange::two(CCursor::new(start), CCursor::new(end))));
            state.store(ui.ctx(), id);
            ui.memory_mut(|mem| mem.request_focus(id));
            debug!("Placed editor selection at {}..{}", start, end);
        }

        let original_content = self.text.clone();

        let font_size = self.font_size;
        let word_wrap = self.word_wrap;
        let mut layouter = move |ui: &Ui, text: &str, wrap_width: f32| -> Arc<egui::Galley> {
            let font_id = FontId::monospace(font_size);
            let layout_job = if word_wrap {
                egui::text::LayoutJob::simple(
                    text.to_owned(),
                    font_id,
                    ui.visuals().text_color(),
                    wrap_width,
                )
            } else {
                egui::text::LayoutJob::simple_singleline(
                    text.to_owned(),
                    font_id,
                    ui.visuals().text_color(),
                )
            };
            ui.fonts(|f| f.layout_job(layout_job))
        };

        let text = self.text;
        let scroll_output = ScrollArea::vertical()
            .id_source(id.with("scroll"))
            .auto_shrink([false, false])
            .show(ui, |ui| {
                TextEdit::multiline(&mut *text)
                    .id(id)
                    .font(FontId::monospace(font_size))
                    .hint_text("Type markdown here…")
                    .desired_width(f32::INFINITY)
                    .desired_rows(20)
                    .lock_focus(true)
                    .layouter(&mut layouter)
                    .show(ui)
            });

        let text_output = scroll_output.inner;
        let changed = *text != original_content;

        let selection = match text_output.cursor_range {
            Some(range) => ordered(
                range.primary.ccursor.index,
                range.secondary.ccursor.index,
            ),
            None => self.place_selection.unwrap_or(self.selection),
        };
        let char_len = if changed {
            text.chars().count()
        } else {
            char_len
        };

        EditorOutput {
            changed,
            selection: (selection.0.min(char_len), selection.1.min(char_len)),
        }
    }
}

/// Order two cursor offsets as `(start, end)`.
fn ordered(a: usize, b: usize) -> (usize, usize) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
