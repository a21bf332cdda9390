use criterion::{black_box, criterion_group, criterion_main, Criterion};
use game_tree_search::{search, DepthLimited};

#[path = "../tests/common/mod.rs"]
mod common;

use common::{Board, Mark, TicTacToe};

fn bench_search(c: &mut Criterion, start: &str) {
    let board = Board::parse(start);
    let player = TicTacToe { me: board.to_move() };

    let mut group = c.benchmark_group(format!("Tic-tac-toe from {}", start));

    group.bench_function("minimax", |b| {
        b.iter(|| search(black_box(&board), &player, false).unwrap())
    });

    group.bench_function("alpha-beta", |b| {
        b.iter(|| search(black_box(&board), &player, true).unwrap())
    });

    group.finish();
}

fn bench_depth_limited(c: &mut Criterion) {
    let board = Board::default();
    let mut group = c.benchmark_group("Tic-tac-toe depth limited");

    for depth in [2, 4, 6] {
        let player = DepthLimited::new(TicTacToe { me: Mark::X }, depth);

        group.bench_function(format!("alpha-beta depth {}", depth), |b| {
            b.iter(|| search(black_box(&board), &player, true).unwrap())
        });
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_search(c, "x...o....");
    bench_search(c, ".........");
    bench_depth_limited(c);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
