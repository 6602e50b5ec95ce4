//! Line-mode sessions driven end to end through the shared driver loop.

use std::io::Cursor;

use tui_catch::core::{GameEngine, RandomSource};
use tui_catch::input::LineSource;
use tui_catch::session::{run, TextScreen};
use tui_catch::types::GameState;

struct Fixed(u32);

impl RandomSource for Fixed {
    fn next_u32(&mut self) -> u32 {
        self.0
    }
}

fn play(engine: &mut GameEngine<Fixed>, lines: &str) -> (tui_catch::core::GameSnapshot, String) {
    let mut screen = TextScreen::new(Vec::new());
    let mut input = LineSource::new(Cursor::new(lines.to_string()));
    let last = run(engine, &mut screen, &mut input, |_| {}).unwrap();
    (last, String::from_utf8(screen.into_inner()).unwrap())
}

#[test]
fn catch_then_quit_reports_score() {
    // 4x3 grid, object always at column 1, paddle starts at 2.
    let mut engine = GameEngine::new(4, 3, Fixed(1)).unwrap();
    let (last, transcript) = play(&mut engine, "s\na\nx\nq\n");

    assert_eq!(last.state, GameState::Playing);
    assert_eq!(last.score, 1);
    assert!(transcript.contains("STATE: IDLE"));
    assert!(transcript.contains("Score: 1"));
    assert!(transcript.contains("Move (a/d) or quit (q): "));
}

#[test]
fn miss_shows_game_over_then_reset_returns_to_idle() {
    let mut engine = GameEngine::new(4, 3, Fixed(0)).unwrap();
    let (last, transcript) = play(&mut engine, "start\nright\nr\nq\n");

    assert_eq!(last.state, GameState::Idle);
    assert_eq!(last.score, 0);
    assert!(transcript.contains("STATE: GAME OVER"));
    assert!(transcript.contains("Final Score: 0"));
    assert!(transcript.contains("Press 'r' to reset, 'q' to quit."));
    // The idle screen is shown again after the reset.
    assert_eq!(transcript.matches("STATE: IDLE").count(), 2);
}

#[test]
fn unknown_lines_change_nothing() {
    let mut engine = GameEngine::new(4, 3, Fixed(0)).unwrap();
    let (last, transcript) = play(&mut engine, "hello\n\n?\nq\n");

    assert_eq!(last.state, GameState::Idle);
    assert_eq!(transcript.matches("STATE: IDLE").count(), 4);
}

#[test]
fn first_playing_frame_shows_object_on_top_row() {
    let mut engine = GameEngine::new(4, 4, Fixed(1)).unwrap();
    let (last, transcript) = play(&mut engine, "s\nq\n");

    assert_eq!(last.object_y, 1);
    assert!(transcript.contains("STATE: PLAYING\nScore: 0\n.O..\n....\n....\n..P.\n"));
}

#[test]
fn frame_after_a_catch_shows_the_new_object_on_top_row() {
    let mut engine = GameEngine::new(4, 3, Fixed(1)).unwrap();
    let (_, transcript) = play(&mut engine, "s\na\nx\nq\n");

    assert!(transcript.contains("Score: 1\n.O..\n....\n.P..\n"));
}

#[test]
fn game_over_is_shown_before_the_next_read() {
    let mut engine = GameEngine::new(4, 3, Fixed(0)).unwrap();
    let (last, transcript) = play(&mut engine, "s\nx\nq\n");

    assert_eq!(last.state, GameState::GameOver);
    assert_eq!(transcript.matches("Move (a/d) or quit (q): ").count(), 2);
    let game_over_tail = "Final Score: 0\nPress 'r' to reset, 'q' to quit.\n";
    assert!(transcript.ends_with(&format!("{game_over_tail}====================\nInput: ")));
}
