//! Property tests for engine invariants

use proptest::prelude::*;

use tui_catch::core::{GameEngine, TickOutcome};
use tui_catch::types::{GameState, Token};

fn any_token() -> impl Strategy<Value = Token> {
    prop_oneof![
        Just(Token::Start),
        Just(Token::Left),
        Just(Token::Right),
        Just(Token::Reset),
        Just(Token::Quit),
        Just(Token::Unknown),
    ]
}

fn any_move() -> impl Strategy<Value = Token> {
    prop_oneof![Just(Token::Left), Just(Token::Right)]
}

proptest! {
    #[test]
    fn paddle_stays_on_grid(
        width in 1u16..20,
        seed in any::<u32>(),
        moves in prop::collection::vec(any_move(), 0..200),
    ) {
        let mut game = GameEngine::with_seed(width, 8, seed).unwrap();
        game.handle_input(Token::Start);
        for token in moves {
            game.handle_input(token);
            prop_assert!(game.paddle_x() < width);
        }
    }

    #[test]
    fn coordinates_stay_in_bounds_for_any_session(
        width in 1u16..12,
        height in 2u16..12,
        seed in any::<u32>(),
        steps in prop::collection::vec((any_token(), any::<bool>()), 0..300),
    ) {
        let mut game = GameEngine::with_seed(width, height, seed).unwrap();
        for (token, tick) in steps {
            game.handle_input(token);
            if tick && game.state() == GameState::Playing {
                game.tick().unwrap();
            }
            let snap = game.snapshot();
            prop_assert!(snap.paddle_x < width);
            prop_assert!(snap.object_x < width);
            prop_assert!(snap.object_y < height);
        }
    }

    #[test]
    fn ticks_advance_one_row_until_round_ends(
        width in 1u16..12,
        height in 2u16..16,
        seed in any::<u32>(),
    ) {
        let mut game = GameEngine::with_seed(width, height, seed).unwrap();
        game.handle_input(Token::Start);

        let mut expected_y = 0;
        loop {
            let before_score = game.score();
            match game.tick().unwrap() {
                TickOutcome::Fell => {
                    expected_y += 1;
                    prop_assert_eq!(game.object_y(), expected_y);
                    prop_assert!(expected_y < height - 1);
                }
                TickOutcome::Caught => {
                    prop_assert_eq!(expected_y + 1, height - 1);
                    prop_assert_eq!(game.score(), before_score + 1);
                    prop_assert_eq!(game.object_y(), 0);
                    prop_assert_eq!(game.state(), GameState::Playing);
                    break;
                }
                TickOutcome::Missed => {
                    prop_assert_eq!(expected_y + 1, height - 1);
                    prop_assert_eq!(game.score(), before_score);
                    prop_assert_eq!(game.state(), GameState::GameOver);
                    break;
                }
            }
        }
    }

    #[test]
    fn unknown_token_is_a_no_op_everywhere(
        seed in any::<u32>(),
        prefix in prop::collection::vec(any_token(), 0..20),
        ticks in 0usize..10,
    ) {
        let mut game = GameEngine::with_seed(5, 5, seed).unwrap();
        for token in prefix {
            game.handle_input(token);
        }
        for _ in 0..ticks {
            if game.state() == GameState::Playing {
                game.tick().unwrap();
            }
        }

        let before = game.snapshot();
        game.handle_input(Token::Unknown);
        prop_assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn reset_always_restores_a_fresh_round(
        width in 1u16..20,
        height in 2u16..20,
        seed in any::<u32>(),
        steps in prop::collection::vec(any_token(), 0..100),
    ) {
        let mut game = GameEngine::with_seed(width, height, seed).unwrap();
        for token in steps {
            game.handle_input(token);
            if game.state() == GameState::Playing {
                game.tick().unwrap();
            }
        }

        game.reset();
        let snap = game.snapshot();
        prop_assert_eq!(snap.state, GameState::Idle);
        prop_assert_eq!(snap.score, 0);
        prop_assert_eq!(snap.object_y, 0);
        prop_assert_eq!(snap.paddle_x, width / 2);
    }
}
