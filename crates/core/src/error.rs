use std::fmt;

use crate::types::{GameState, MIN_HEIGHT, MIN_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Grid too small to hold a paddle and a falling row.
    Construction { width: u16, height: u16 },
    /// `tick` called outside of Playing.
    InvalidState { state: GameState },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Construction { width, height } => write!(
                f,
                "invalid grid {width}x{height}: need width >= {MIN_WIDTH} and height >= {MIN_HEIGHT}"
            ),
            Self::InvalidState { state } => {
                write!(f, "tick is only valid while playing (state: {})", state.as_str())
            }
        }
    }
}

impl std::error::Error for EngineError {}
