//! Performance measurement for move resolution at varying board sizes

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;
use tilefold::{Direction, Grid, Session, apply_move, shift};

/// Deterministic mid-game position reached by replaying a fixed script
fn mid_game_board(size: usize) -> Option<Grid> {
    let Ok(mut session) = Session::new(size, 97) else {
        return None;
    };
    let script = [
        Direction::Left,
        Direction::Down,
        Direction::Right,
        Direction::Up,
    ];
    for _ in 0..(size * 2) {
        for &direction in &script {
            session.apply_move(direction);
        }
    }
    Some(session.grid().clone())
}

/// Measures the pure slide/merge pass as the board grows
fn bench_shift(c: &mut Criterion) {
    let mut group = c.benchmark_group("shift");

    for size in &[4_usize, 8, 16, 32] {
        let Some(board) = mid_game_board(*size) else {
            group.finish();
            return;
        };

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                for direction in Direction::ALL {
                    black_box(shift(black_box(&board), direction));
                }
            });
        });
    }

    group.finish();
}

/// Measures a full move including the random spawn step
fn bench_apply_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_move");

    for size in &[4_usize, 8, 16] {
        let Some(board) = mid_game_board(*size) else {
            group.finish();
            return;
        };
        let base_rng = StdRng::seed_from_u64(1331);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let mut rng = base_rng.clone();
                black_box(apply_move(black_box(&board), Direction::Left, &mut rng));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_shift, bench_apply_move);
criterion_main!(benches);
