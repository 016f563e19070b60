use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use std::hint::black_box;

use topsy_turvy::board::Layout;
use topsy_turvy::game::Game;

/// Play ~30 random drops on a fresh game to create a realistic mid-game
/// position. Uses a fixed seed for reproducibility across benchmark runs.
fn setup_midgame(width: u16, height: u16, layout: Layout) -> Game {
    let mut game = Game::new(4, width, height, layout).expect("valid configuration");
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..30 {
        let col = rng.random_range(0..width);
        game.drop_piece(col);
    }
    game
}

fn bench_drop_piece(c: &mut Criterion) {
    for (name, layout) in [("dense", Layout::Dense), ("packed", Layout::Packed)] {
        let game = setup_midgame(7, 6, layout);
        c.bench_function(&format!("drop_piece_{}", name), |b| {
            b.iter_batched(
                || game.clone(),
                |mut g| {
                    black_box(g.drop_piece(3));
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }
}

fn bench_disarray(c: &mut Criterion) {
    for (name, layout) in [("dense", Layout::Dense), ("packed", Layout::Packed)] {
        let game = setup_midgame(26, 20, layout);
        c.bench_function(&format!("disarray_{}", name), |b| {
            b.iter_batched(
                || game.clone(),
                |mut g| {
                    g.disarray();
                    black_box(g);
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }
}

fn bench_offset(c: &mut Criterion) {
    for (name, layout) in [("dense", Layout::Dense), ("packed", Layout::Packed)] {
        let game = setup_midgame(7, 6, layout);
        c.bench_function(&format!("offset_{}", name), |b| {
            b.iter_batched(
                || game.clone(),
                |mut g| {
                    black_box(g.offset());
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }
}

fn bench_outcome(c: &mut Criterion) {
    for (name, layout) in [("dense", Layout::Dense), ("packed", Layout::Packed)] {
        let game = setup_midgame(7, 6, layout);
        c.bench_function(&format!("outcome_{}", name), |b| {
            b.iter(|| black_box(game.outcome()))
        });
    }
}

criterion_group!(
    benches,
    bench_drop_piece,
    bench_disarray,
    bench_offset,
    bench_outcome
);
criterion_main!(benches);
