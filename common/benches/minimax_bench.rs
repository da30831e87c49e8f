use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use tictactoe_common::games::tictactoe::{best_move, best_move_for, outcome, Board, Side};

fn bench_self_play_game() {
    let mut board = Board::new();
    let mut side = Side::Ai;

    while !outcome(&board).is_terminal() {
        match best_move_for(&board, side, board.mark_count()) {
            Some(position) => {
                if board.place(position, side).is_err() {
                    break;
                }
                side = side.opponent();
            }
            None => break,
        }
    }
}

fn bench_single_move_empty_board() {
    let board = Board::new();
    black_box(best_move(&board, 0));
}

fn bench_single_move_mid_game() {
    let board: Board = "X.X/.O./...".parse().unwrap();
    black_box(best_move(&board, board.mark_count()));
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group.bench_function("self_play_game", |b| {
        b.iter(bench_self_play_game)
    });

    group.bench_function("single_move_empty", |b| {
        b.iter(bench_single_move_empty_board)
    });

    group.bench_function("single_move_mid_game", |b| {
        b.iter(bench_single_move_mid_game)
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
