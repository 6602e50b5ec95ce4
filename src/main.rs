//! Terminal catch game runner (default binary).
//!
//! Raw-terminal play uses crossterm for key presses and the framebuffer
//! renderer. Set `CATCH_LINE_MODE=1` to play with typed lines instead.

use std::io;
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use log::info;

use tui_catch::core::{GameEngine, GameSnapshot, RandomSource};
use tui_catch::input::{KeySource, LineSource};
use tui_catch::session::{self, Screen, TextScreen};
use tui_catch::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_catch::GameConfig;

struct TerminalScreen {
    term: TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
}

impl Screen for TerminalScreen {
    fn show(&mut self, snap: &GameSnapshot) -> Result<()> {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        self.view.render_into(snap, Viewport::new(w, h), &mut self.fb);
        self.term.draw_swap(&mut self.fb)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let config = GameConfig::from_env();
    let seed = config.seed.unwrap_or_else(clock_seed);
    info!("starting {}x{} game, seed {}", config.width, config.height, seed);

    let mut engine = GameEngine::with_seed(config.width, config.height, seed)?
        .with_fall_delay(config.fall_delay());

    let last = if config.line_mode {
        run_lines(&mut engine)?
    } else {
        run_terminal(&mut engine)?
    };

    info!("session ended in {} with score {}", last.state.as_str(), last.score);
    println!("Exiting game. Goodbye!");
    Ok(())
}

fn run_terminal<R: RandomSource>(engine: &mut GameEngine<R>) -> Result<GameSnapshot> {
    let mut screen = TerminalScreen {
        term: TerminalRenderer::new(),
        view: GameView::default(),
        fb: FrameBuffer::new(0, 0),
    };
    screen.term.enter()?;

    let result = session::run(engine, &mut screen, &mut KeySource::new(), thread::sleep);

    // Always try to restore terminal state.
    let _ = screen.term.exit();
    result
}

fn run_lines<R: RandomSource>(engine: &mut GameEngine<R>) -> Result<GameSnapshot> {
    let stdin = io::stdin();
    let mut input = LineSource::new(stdin.lock());
    let mut screen = TextScreen::new(io::stdout());
    session::run(engine, &mut screen, &mut input, thread::sleep)
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
