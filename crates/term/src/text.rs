//! Plain-text status screen for line mode.
//!
//! Produces the same information as [`crate::GameView`] without any terminal
//! control sequences, so it can be printed to a pipe or a cooked-mode terminal.

use std::fmt::Write;

use crate::core::GameSnapshot;
use crate::types::GameState;

const RULE_WIDTH: usize = 20;

/// Glyph for the falling object.
pub const OBJECT_GLYPH: char = 'O';
/// Glyph for the paddle.
pub const PADDLE_GLYPH: char = 'P';
/// Glyph for an empty cell.
pub const EMPTY_GLYPH: char = '.';

/// Render the grid rows only, top to bottom, one string per row.
pub fn board_lines(snap: &GameSnapshot) -> Vec<String> {
    (0..snap.height)
        .map(|y| {
            (0..snap.width)
                .map(|x| {
                    if snap.is_object_at(x, y) {
                        OBJECT_GLYPH
                    } else if snap.is_paddle_at(x, y) {
                        PADDLE_GLYPH
                    } else {
                        EMPTY_GLYPH
                    }
                })
                .collect()
        })
        .collect()
}

/// Render the full status screen: state banner, score, grid and prompt.
///
/// The grid is only shown while playing.
pub fn render_text(snap: &GameSnapshot) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::with_capacity(256);

    // Writing to a String cannot fail.
    let _ = writeln!(out);
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "STATE: {}", snap.state.label());
    match snap.state {
        GameState::Idle => {
            let _ = writeln!(out, "Press 's' to start the game.");
        }
        GameState::Playing => {
            let _ = writeln!(out, "Score: {}", snap.score);
            for line in board_lines(snap) {
                let _ = writeln!(out, "{line}");
            }
            let _ = writeln!(out, "Use 'a' to move left, 'd' to move right, 'q' to quit.");
        }
        GameState::GameOver => {
            let _ = writeln!(out, "Final Score: {}", snap.score);
            let _ = writeln!(out, "Press 'r' to reset, 'q' to quit.");
        }
    }
    let _ = writeln!(out, "{rule}");
    out
}

/// Prompt printed before reading the next line.
pub fn input_prompt(state: GameState) -> &'static str {
    match state {
        GameState::Playing => "Move (a/d) or quit (q): ",
        GameState::Idle | GameState::GameOver => "Input: ",
    }
}
