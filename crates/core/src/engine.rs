//! Game engine module - owns the complete game state
//!
//! The engine is a small finite-state machine (Idle → Playing → GameOver)
//! with a per-tick simulation of the falling object. It performs no I/O and
//! never sleeps: pacing is exposed as [`GameEngine::fall_delay`] for the
//! driver to honor between ticks.

use std::time::Duration;

use log::{debug, info};

use crate::error::EngineError;
use crate::rng::{RandomSource, SimpleRng};
use crate::snapshot::GameSnapshot;
use crate::types::{Flow, GameState, Token, FALL_DELAY_MS, MIN_HEIGHT, MIN_WIDTH};

/// What a single tick did to the falling object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Moved down one row without reaching the paddle row
    Fell,
    /// Reached the paddle row over the paddle; score went up and a new object spawned
    Caught,
    /// Reached the paddle row elsewhere; the game is over
    Missed,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameEngine<R = SimpleRng> {
    width: u16,
    height: u16,
    state: GameState,
    score: u32,
    paddle_x: u16,
    object_x: u16,
    object_y: u16,
    fall_delay: Duration,
    rng: R,
}

impl GameEngine<SimpleRng> {
    /// Create a new game driven by the built-in LCG
    pub fn with_seed(width: u16, height: u16, seed: u32) -> Result<Self, EngineError> {
        Self::new(width, height, SimpleRng::new(seed))
    }
}

impl<R: RandomSource> GameEngine<R> {
    /// Create a new game in the Idle state
    ///
    /// Fails if the grid cannot hold a paddle row plus at least one falling row.
    pub fn new(width: u16, height: u16, mut rng: R) -> Result<Self, EngineError> {
        if width < MIN_WIDTH || height < MIN_HEIGHT {
            return Err(EngineError::Construction { width, height });
        }

        let object_x = draw_column(&mut rng, width);
        Ok(Self {
            width,
            height,
            state: GameState::Idle,
            score: 0,
            paddle_x: width / 2,
            object_x,
            object_y: 0,
            fall_delay: Duration::from_millis(FALL_DELAY_MS as u64),
            rng,
        })
    }

    /// Override the pacing hint handed to the driver.
    pub fn with_fall_delay(mut self, fall_delay: Duration) -> Self {
        self.fall_delay = fall_delay;
        self
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn paddle_x(&self) -> u16 {
        self.paddle_x
    }

    pub fn object_x(&self) -> u16 {
        self.object_x
    }

    pub fn object_y(&self) -> u16 {
        self.object_y
    }

    /// How long the driver should wait before each tick
    pub fn fall_delay(&self) -> Duration {
        self.fall_delay
    }

    /// Copy out everything a renderer needs
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            state: self.state,
            score: self.score,
            paddle_x: self.paddle_x,
            object_x: self.object_x,
            object_y: self.object_y,
            width: self.width,
            height: self.height,
        }
    }

    /// Return to Idle with a fresh round
    ///
    /// Grid size and fall delay are kept. Callable from any state.
    pub fn reset(&mut self) {
        self.set_state(GameState::Idle);
        self.score = 0;
        self.paddle_x = self.width / 2;
        self.object_x = draw_column(&mut self.rng, self.width);
        self.object_y = 0;
    }

    /// Apply one input token according to the current state
    ///
    /// Tokens that do not apply to the current state are ignored. `Quit` is
    /// honored in every state and leaves the engine untouched.
    pub fn handle_input(&mut self, token: Token) -> Flow {
        if token == Token::Quit {
            debug!("quit requested in state {}", self.state.as_str());
            return Flow::Stop;
        }

        match self.state {
            GameState::Idle => {
                if token == Token::Start {
                    self.set_state(GameState::Playing);
                }
            }
            GameState::Playing => match token {
                Token::Left => {
                    self.paddle_x = self.paddle_x.saturating_sub(1);
                }
                Token::Right => {
                    if self.paddle_x + 1 < self.width {
                        self.paddle_x += 1;
                    }
                }
                _ => {}
            },
            GameState::GameOver => {
                if token == Token::Reset {
                    self.reset();
                }
            }
        }
        Flow::Continue
    }

    /// Advance the falling object by one row
    ///
    /// Only valid while Playing; in any other state nothing changes and
    /// [`EngineError::InvalidState`] is returned.
    pub fn tick(&mut self) -> Result<TickOutcome, EngineError> {
        if self.state != GameState::Playing {
            return Err(EngineError::InvalidState { state: self.state });
        }

        self.object_y += 1;
        if self.object_y < self.height - 1 {
            return Ok(TickOutcome::Fell);
        }

        if self.object_x == self.paddle_x {
            self.score = self.score.saturating_add(1);
            self.object_y = 0;
            self.object_x = draw_column(&mut self.rng, self.width);
            info!("caught at column {}, score {}", self.paddle_x, self.score);
            Ok(TickOutcome::Caught)
        } else {
            info!(
                "missed: object at column {}, paddle at {}, final score {}",
                self.object_x, self.paddle_x, self.score
            );
            self.set_state(GameState::GameOver);
            Ok(TickOutcome::Missed)
        }
    }

    fn set_state(&mut self, next: GameState) {
        if self.state != next {
            debug!("state {} -> {}", self.state.as_str(), next.as_str());
        }
        self.state = next;
    }
}

fn draw_column<R: RandomSource>(rng: &mut R, width: u16) -> u16 {
    rng.next_range(width as u32) as u16
}
