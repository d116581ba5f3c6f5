//! File dialogs for Markpad
//!
//! Native save dialogs for the markdown and HTML downloads.

pub mod dialogs;

pub use dialogs::save_export_dialog;
