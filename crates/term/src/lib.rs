//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids widget/layout libraries and instead renders a
//! [`crate::core::GameSnapshot`] into a simple framebuffer that can be flushed
//! to a terminal backend. A plain-text view is provided for line mode.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Read game state only through snapshots
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per cell)

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod text;

pub use tui_catch_core as core;
pub use tui_catch_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use text::{board_lines, input_prompt, render_text};
