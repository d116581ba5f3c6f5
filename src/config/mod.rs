//! Configuration module for Markpad
//!
//! This module handles user preferences and the session store, including
//! serialization to/from JSON and persistent storage in the
//! platform-specific config directory.

mod persistence;
mod settings;

pub use persistence::*;
pub use settings::*;
