//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events and typed lines into [`crate::types::Token`] and
//! provides blocking token sources for the driver loop.

pub mod map;
pub mod source;

pub use tui_catch_types as types;

pub use map::{handle_key_event, should_quit};
pub use source::{KeySource, LineSource, TokenSource};
