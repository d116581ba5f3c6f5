//! UI components for Markpad
//!
//! Thin egui drawing code. Every decision it triggers is made by `state`.

mod dialogs;
mod preview;
mod status_bar;
mod toolbar;

pub use dialogs::{show_clear_dialog, show_error_dialog, ConfirmResult};
pub use preview::show_preview_pane;
pub use status_bar::show_status_bar;
pub use toolbar::{show_toolbar, ToolbarAction};
