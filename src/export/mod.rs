//! Document Export Module for Markpad
//!
//! This module provides the ways the current document leaves the editor.
//!
//! # Supported Export Formats
//!
//! - **Markdown File**: the raw buffer as `document.md`
//! - **HTML File**: the rendered fragment inside a standalone document as `document.html`
//! - **Clipboard HTML**: the rendered fragment's markup
//!
//! # Architecture
//!
//! - `html.rs` - HTML document template
//! - `file.rs` - Download targets and file writing
//! - `clipboard.rs` - Platform clipboard operations

pub mod clipboard;
pub mod file;
pub mod html;

pub use clipboard::{copy_html_to_clipboard, ClipboardError};
pub use file::{preview_in_browser, write_export, ExportError, ExportFormat};
pub use html::generate_html_document;
