//! Key mapping from terminal events to game tokens.

use crate::types::Token;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to a game token.
///
/// Keys with no meaning map to [`Token::Unknown`].
pub fn handle_key_event(key: KeyEvent) -> Token {
    if should_quit(key) {
        return Token::Quit;
    }

    match key.code {
        // Movement
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Token::Left,
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Token::Right,

        // Lifecycle
        KeyCode::Enter | KeyCode::Char('s') | KeyCode::Char('S') => Token::Start,
        KeyCode::Char('r') | KeyCode::Char('R') => Token::Reset,

        _ => Token::Unknown,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
