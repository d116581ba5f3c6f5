//! Editor module for Markpad
//!
//! This module contains the text editor widget and the status bar statistics.

mod stats;
mod widget;

pub use stats::TextStats;
pub use widget::{EditorOutput, EditorWidget};
