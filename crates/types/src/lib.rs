//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, line-mode play).
//!
//! # Grid Dimensions
//!
//! The default playfield is a small square grid:
//!
//! - **Width**: 8 columns (indexed 0-7)
//! - **Height**: 8 rows (indexed 0-7)
//! - **Paddle row**: always the bottom row (`height - 1`)
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FALL_DELAY_MS` | 500 | Pause the driver honors before each tick |
//!
//! # Examples
//!
//! ```
//! use tui_catch_types::{Flow, GameState, Token, DEFAULT_HEIGHT, DEFAULT_WIDTH};
//!
//! // Parse a token (case-insensitive, full word or single letter)
//! assert_eq!(Token::parse_lossy("start"), Token::Start);
//! assert_eq!(Token::parse_lossy("a"), Token::Left);
//! assert_eq!(Token::parse_lossy("jump"), Token::Unknown);
//!
//! assert_eq!(GameState::Idle.as_str(), "idle");
//! assert!(Flow::Continue.is_continue());
//!
//! assert_eq!(DEFAULT_WIDTH, 8);
//! assert_eq!(DEFAULT_HEIGHT, 8);
//! ```

/// Default grid width in cells (8 columns)
pub const DEFAULT_WIDTH: u16 = 8;

/// Default grid height in cells (8 rows)
pub const DEFAULT_HEIGHT: u16 = 8;

/// Smallest usable grid width (a single column still has a paddle)
pub const MIN_WIDTH: u16 = 1;

/// Smallest usable grid height (one falling row plus the paddle row)
pub const MIN_HEIGHT: u16 = 2;

/// Time between simulation ticks in milliseconds
pub const FALL_DELAY_MS: u32 = 500;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_fits_minimums() {
        assert!(DEFAULT_WIDTH >= MIN_WIDTH);
        assert!(DEFAULT_HEIGHT >= MIN_HEIGHT);
        assert_eq!(FALL_DELAY_MS, 500);
    }

    #[test]
    fn token_parsing_accepts_words_and_letters() {
        assert_eq!(Token::parse_lossy("s"), Token::Start);
        assert_eq!(Token::parse_lossy("START"), Token::Start);
        assert_eq!(Token::parse_lossy("d"), Token::Right);
        assert_eq!(Token::parse_lossy("right"), Token::Right);
        assert_eq!(Token::parse_lossy("r"), Token::Reset);
        assert_eq!(Token::parse_lossy("Q"), Token::Quit);
        assert_eq!(Token::parse_lossy("  left "), Token::Left);
        assert_eq!(Token::parse_lossy(""), Token::Unknown);
        assert_eq!(Token::parse_lossy("sa"), Token::Unknown);
    }

    #[test]
    fn token_as_str_parses_back() {
        for token in [
            Token::Start,
            Token::Left,
            Token::Right,
            Token::Reset,
            Token::Quit,
            Token::Unknown,
        ] {
            assert_eq!(Token::parse_lossy(token.as_str()), token);
        }
    }

    #[test]
    fn only_continue_keeps_the_loop_going() {
        assert!(Flow::Continue.is_continue());
        assert!(!Flow::Stop.is_continue());
    }
}

/// The three phases of a game session
///
/// - **Idle**: waiting for the player to start
/// - **Playing**: the object falls one row per tick
/// - **GameOver**: the object was missed; waiting for reset or quit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    #[default]
    Idle,
    Playing,
    GameOver,
}

impl GameState {
    /// Convert to lowercase string representation
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_catch_types::GameState;
    ///
    /// assert_eq!(GameState::Playing.as_str(), "playing");
    /// assert_eq!(GameState::GameOver.as_str(), "game_over");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            GameState::Idle => "idle",
            GameState::Playing => "playing",
            GameState::GameOver => "game_over",
        }
    }

    /// Upper-case label used by the status screens
    pub fn label(&self) -> &'static str {
        match self {
            GameState::Idle => "IDLE",
            GameState::Playing => "PLAYING",
            GameState::GameOver => "GAME OVER",
        }
    }
}

/// Abstract input symbols fed to the engine
///
/// Tokens are produced by the input layer from raw keys or lines. The engine
/// never sees keystrokes; anything unrecognized becomes [`Token::Unknown`],
/// which is ignored in every state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// Leave Idle and begin falling
    Start,
    /// Move the paddle one column left
    Left,
    /// Move the paddle one column right
    Right,
    /// Return from GameOver to Idle
    Reset,
    /// End the session
    Quit,
    /// Anything else
    Unknown,
}

impl Token {
    /// Parse a token from a word or its single-letter shortcut (case-insensitive)
    ///
    /// Never fails: unrecognized input maps to [`Token::Unknown`].
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_catch_types::Token;
    ///
    /// assert_eq!(Token::parse_lossy("s"), Token::Start);
    /// assert_eq!(Token::parse_lossy("Left"), Token::Left);
    /// assert_eq!(Token::parse_lossy("d"), Token::Right);
    /// assert_eq!(Token::parse_lossy("?"), Token::Unknown);
    /// ```
    pub fn parse_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "s" | "start" => Token::Start,
            "a" | "left" => Token::Left,
            "d" | "right" => Token::Right,
            "r" | "reset" => Token::Reset,
            "q" | "quit" => Token::Quit,
            _ => Token::Unknown,
        }
    }

    /// Convert to lowercase word
    pub fn as_str(&self) -> &'static str {
        match self {
            Token::Start => "start",
            Token::Left => "left",
            Token::Right => "right",
            Token::Reset => "reset",
            Token::Quit => "quit",
            Token::Unknown => "unknown",
        }
    }
}

/// Whether the driver loop should keep going after an input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

impl Flow {
    pub fn is_continue(&self) -> bool {
        matches!(self, Flow::Continue)
    }
}
