//! Markdown rendering and formatting module
//!
//! This module holds the two pure cores of the editor:
//!
//! - `renderer` turns markdown into an HTML fragment with an ordered series
//!   of pattern rewrite passes
//! - `formatting` applies toolbar actions to the buffer and places the caret
//!
//! Neither depends on the other; the host feeds the output of `formatting`
//! back into `renderer`.
//!
//! # Example
//! ```ignore
//! use crate::markdown::{apply_action, render, FormatAction};
//!
//! let edit = apply_action("", 0, 0, FormatAction::Bold, |_| false)?;
//! let html = render(&edit.text);
//! assert_eq!(html, "<p><strong>bold text</strong></p>");
//! ```

pub mod formatting;
pub mod renderer;

pub use formatting::{
    apply_action, apply_named_action, Edit, EditKind, FormatAction, FormatError, CLEAR_PROMPT,
};
pub use renderer::render;
