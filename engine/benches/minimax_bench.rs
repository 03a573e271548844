use std::time::Duration;

use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};
use gomoku_engine::game::{
    FirstPlayer, GomokuSession, GomokuSessionSettings, Position, SessionRng,
};

fn settings(board_size: usize) -> GomokuSessionSettings {
    GomokuSessionSettings {
        board_size,
        win_length: 5,
        search_depth: 5,
        first_player: FirstPlayer::Computer,
    }
}

fn new_session(board_size: usize) -> GomokuSession {
    let mut rng = SessionRng::new(7);
    GomokuSession::create(&settings(board_size), &mut rng).unwrap()
}

fn bench_reply_to_opening() {
    let mut session = new_session(15);
    session.place_stone(8, 8, false);
    session.computer_reply(Position::new(8, 8)).unwrap();
}

fn bench_reply_mid_game() {
    let mut session = new_session(15);
    // Computer opened at (7, 7); alternate a plausible middle game.
    let moves = [
        (8, 8, false),
        (8, 7, true),
        (6, 6, false),
        (9, 7, true),
        (5, 5, false),
        (6, 7, true),
        (9, 9, false),
        (5, 7, true),
        (7, 8, false),
    ];
    for (x, y, is_computer) in moves {
        assert!(session.place_stone(x, y, is_computer));
    }
    session.computer_reply(Position::new(7, 8)).unwrap();
}

fn bench_short_game() {
    let mut session = new_session(15);
    let human_moves = [(8, 8), (6, 8), (9, 6), (5, 9), (10, 10)];
    for (x, y) in human_moves {
        if !session.place_stone(x, y, false) {
            break;
        }
        if session.did_win(x, y) {
            break;
        }
        let reply = session.computer_reply(Position::new(x, y)).unwrap();
        if session.did_win(reply.pos.x, reply.pos.y) {
            break;
        }
    }
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(10)
        .measurement_time(Duration::from_secs(120));

    group.bench_function("reply_to_opening", |b| b.iter(bench_reply_to_opening));

    group.bench_function("reply_mid_game", |b| b.iter(bench_reply_mid_game));

    group.bench_function("short_game", |b| b.iter(bench_short_game));

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
