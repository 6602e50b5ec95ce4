//! Blocking token sources for the driver loop.
//!
//! The game is turn-based: the driver asks for exactly one token per step
//! and waits until the player provides it.

use std::io::BufRead;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::map::handle_key_event;
use crate::types::Token;

/// Something that can produce the next player token.
pub trait TokenSource {
    /// Block until one token is available.
    ///
    /// End of input is reported as [`Token::Quit`].
    fn next_token(&mut self) -> Result<Token>;
}

/// Reads single key presses from a raw-mode terminal.
#[derive(Debug, Default)]
pub struct KeySource;

impl KeySource {
    pub fn new() -> Self {
        Self
    }
}

impl TokenSource for KeySource {
    fn next_token(&mut self) -> Result<Token> {
        loop {
            if let Event::Key(key) = event::read()? {
                // Ignore terminal auto-repeat and release events; one press is one token.
                if key.kind == KeyEventKind::Press {
                    return Ok(handle_key_event(key));
                }
            }
        }
    }
}

/// Reads one token per line from any buffered reader (stdin in line mode).
#[derive(Debug)]
pub struct LineSource<R> {
    reader: R,
    line: String,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::with_capacity(64),
        }
    }
}

impl<R: BufRead> TokenSource for LineSource<R> {
    fn next_token(&mut self) -> Result<Token> {
        self.line.clear();
        if self.reader.read_line(&mut self.line)? == 0 {
            return Ok(Token::Quit);
        }
        Ok(Token::parse_lossy(&self.line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn line_source_maps_each_line() {
        let mut src = LineSource::new(Cursor::new("s\nA\n\nright\nxyz\nq\n"));
        let mut got = Vec::new();
        for _ in 0..6 {
            got.push(src.next_token().unwrap());
        }
        assert_eq!(
            got,
            vec![
                Token::Start,
                Token::Left,
                Token::Unknown,
                Token::Right,
                Token::Unknown,
                Token::Quit
            ]
        );
    }

    #[test]
    fn line_source_quits_on_eof() {
        let mut src = LineSource::new(Cursor::new("d"));
        assert_eq!(src.next_token().unwrap(), Token::Right);
        assert_eq!(src.next_token().unwrap(), Token::Quit);
        assert_eq!(src.next_token().unwrap(), Token::Quit);
    }

    #[test]
    fn line_source_handles_crlf() {
        let mut src = LineSource::new(Cursor::new("reset\r\n"));
        assert_eq!(src.next_token().unwrap(), Token::Reset);
    }
}
