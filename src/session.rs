//! Driver loop shared by the raw-terminal and line-mode frontends.
//!
//! Each turn shows the current state first. While playing the loop then waits
//! `fall_delay` and ticks the engine before blocking for exactly one token; a
//! tick that ends the game skips the read so the game-over screen is shown
//! before the player is asked for input.

use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use log::debug;

use crate::core::{GameEngine, GameSnapshot, RandomSource, TickOutcome};
use crate::input::TokenSource;
use crate::term::{input_prompt, render_text};
use crate::types::GameState;

/// Anything that can present a snapshot to the player.
pub trait Screen {
    fn show(&mut self, snap: &GameSnapshot) -> Result<()>;
}

/// Prints the plain-text status screen and input prompt to a writer.
pub struct TextScreen<W> {
    out: W,
}

impl<W: Write> TextScreen<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Screen for TextScreen<W> {
    fn show(&mut self, snap: &GameSnapshot) -> Result<()> {
        self.out.write_all(render_text(snap).as_bytes())?;
        self.out.write_all(input_prompt(snap.state).as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

/// Run one session until the player quits or input ends.
///
/// `pace` is called with the engine's fall delay before every tick; pass a
/// sleeping closure for real play or a no-op in tests. Returns the snapshot at
/// the moment the session ended.
pub fn run<R, S, I>(
    engine: &mut GameEngine<R>,
    screen: &mut S,
    input: &mut I,
    mut pace: impl FnMut(Duration),
) -> Result<GameSnapshot>
where
    R: RandomSource,
    S: Screen + ?Sized,
    I: TokenSource + ?Sized,
{
    loop {
        screen.show(&engine.snapshot())?;

        if engine.state() == GameState::Playing {
            pace(engine.fall_delay());
            let outcome = engine.tick()?;
            debug!("tick: {:?}", outcome);
            if outcome == TickOutcome::Missed {
                continue;
            }
        }

        let token = input.next_token()?;
        if !engine.handle_input(token).is_continue() {
            return Ok(engine.snapshot());
        }
    }
}
