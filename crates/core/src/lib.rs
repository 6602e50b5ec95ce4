//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules, state machine, and simulation logic.
//! It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Randomness is injected through [`RandomSource`]
//! - **Portable**: Can run in any environment (raw terminal, line mode, headless)
//!
//! # Module Structure
//!
//! - [`engine`]: The game engine: state machine, paddle movement, falling object
//! - [`snapshot`]: Read-only copy of the engine handed to renderers
//! - [`rng`]: Injectable randomness and a seeded LCG
//! - [`error`]: Construction and invalid-state errors
//!
//! # Game Rules
//!
//! - **Idle**: `start` begins the game
//! - **Playing**: each tick drops the object one row; `left`/`right` move the
//!   paddle on the bottom row, clamped to the grid
//! - **Catch**: object reaches the bottom row over the paddle → +1 score, new object at the top
//! - **Miss**: object reaches the bottom row anywhere else → game over
//! - **GameOver**: `reset` returns to Idle with score 0
//! - `quit` ends the session from any state
//!
//! # Example
//!
//! ```
//! use tui_catch_core::{GameEngine, TickOutcome};
//! use tui_catch_types::{Flow, GameState, Token};
//!
//! let mut game = GameEngine::with_seed(8, 8, 12345).unwrap();
//! assert_eq!(game.handle_input(Token::Start), Flow::Continue);
//! assert_eq!(game.state(), GameState::Playing);
//!
//! game.handle_input(Token::Left);
//! assert_eq!(game.tick().unwrap(), TickOutcome::Fell);
//! assert_eq!(game.snapshot().object_y, 1);
//!
//! assert_eq!(game.handle_input(Token::Quit), Flow::Stop);
//! ```
//!
//! # Timing
//!
//! The engine never sleeps. The driver waits [`GameEngine::fall_delay`]
//! (500ms by default) before each [`GameEngine::tick`].

pub mod engine;
pub mod error;
pub mod rng;
pub mod snapshot;

pub use tui_catch_types as types;

// Re-export commonly used types for convenience
pub use engine::{GameEngine, TickOutcome};
pub use error::EngineError;
pub use rng::{RandomSource, SimpleRng};
pub use snapshot::GameSnapshot;
