//! Markpad - a lightweight markdown editor with live HTML preview
//!
//! The two core components are pure functions over strings:
//!
//! - [`markdown::render`] turns markdown into an HTML fragment through an
//!   ordered sequence of pattern rewrites.
//! - [`markdown::apply_action`] inserts formatting syntax at a selection and
//!   reports where the caret lands.
//!
//! Everything else (session persistence, exports, the egui host) is plumbing
//! around them.

pub mod app;
pub mod config;
pub mod editor;
pub mod error;
pub mod export;
pub mod files;
pub mod markdown;
pub mod state;
pub mod string_utils;
pub mod theme;
pub mod ui;
