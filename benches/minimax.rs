use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use unbeatable_tictactoe::{Board, GameSession, Minimax, Player, Roles};

fn bench_empty_board() {
    let engine = Minimax::new(Roles::default());
    engine.best_move(black_box(&Board::new()), Player::O).ok();
}

fn bench_after_corner_opening() {
    let engine = Minimax::new(Roles::default());
    let board: Board = "X........".parse().unwrap();
    engine.best_move(black_box(&board), Player::O).ok();
}

fn bench_full_game() {
    // Engine plays both sides.
    let mut session = GameSession::default();
    let engine = Minimax::new(*session.roles());
    while !session.outcome().is_over() {
        if session.is_human_turn() {
            let position = engine.best_move(session.board(), session.to_move()).unwrap();
            session.human_move(position).unwrap();
        } else {
            session.computer_move().unwrap();
        }
    }
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");
    group.sample_size(20);

    group.bench_function("empty_board", |b| b.iter(bench_empty_board));
    group.bench_function("after_corner_opening", |b| b.iter(bench_after_corner_opening));
    group.bench_function("full_game", |b| b.iter(bench_full_game));

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
