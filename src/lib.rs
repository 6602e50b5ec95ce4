//! TUI Catch (workspace facade crate).
//!
//! Re-exports the member crates as `tui_catch::{core,input,term,types}` and
//! hosts the pieces shared by the binary: environment configuration and the
//! turn-based driver loop.

pub use tui_catch_core as core;
pub use tui_catch_input as input;
pub use tui_catch_term as term;
pub use tui_catch_types as types;

pub mod config;
pub mod session;

pub use config::GameConfig;
pub use session::{Screen, TextScreen};
