use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_catch::core::{GameEngine, GameSnapshot};
use tui_catch::term::{render_text, GameView, Viewport};
use tui_catch::types::{GameState, Token};

fn bench_tick(c: &mut Criterion) {
    let mut game = GameEngine::with_seed(8, 8, 12345).unwrap();
    game.handle_input(Token::Start);

    c.bench_function("engine_tick", |b| {
        b.iter(|| {
            if game.state() != GameState::Playing {
                game.handle_input(Token::Reset);
                game.handle_input(Token::Start);
            }
            black_box(game.tick().ok());
        })
    });
}

fn bench_handle_input(c: &mut Criterion) {
    let mut game = GameEngine::with_seed(8, 8, 12345).unwrap();
    game.handle_input(Token::Start);

    c.bench_function("handle_input_move", |b| {
        b.iter(|| {
            game.handle_input(black_box(Token::Left));
            game.handle_input(black_box(Token::Right));
        })
    });
}

fn sample_snapshot() -> GameSnapshot {
    let mut game = GameEngine::with_seed(8, 8, 12345).unwrap();
    game.handle_input(Token::Start);
    game.tick().ok();
    game.snapshot()
}

fn bench_render(c: &mut Criterion) {
    let snap = sample_snapshot();
    let view = GameView::default();
    let mut fb = view.render(&snap, Viewport::new(80, 24));

    c.bench_function("render_framebuffer_80x24", |b| {
        b.iter(|| {
            view.render_into(black_box(&snap), Viewport::new(80, 24), &mut fb);
        })
    });

    c.bench_function("render_text", |b| {
        b.iter(|| black_box(render_text(black_box(&snap))))
    });
}

criterion_group!(benches, bench_tick, bench_handle_input, bench_render);
criterion_main!(benches);
