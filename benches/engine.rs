//! Benchmarks for the cube permutation engine.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use kube::notation::{parse_sequence, sequence_order};
use kube::{apply_move, AnimationConfig, MoveScheduler, Permutation, PermutationEngine, Slice};

/// Benchmark a single quarter-turn composition.
fn bench_apply_move(c: &mut Criterion) {
    let permutation = Permutation::IDENTITY;
    c.bench_function("apply_move", |b| {
        b.iter(|| apply_move(black_box(&permutation), black_box(Slice::Right)))
    });
}

/// Benchmark one full animated move: 25 ticks including the commit.
fn bench_scheduler_move(c: &mut Criterion) {
    let config = AnimationConfig::new(25, Some(0)).unwrap();
    let mut scheduler = MoveScheduler::new(config);
    c.bench_function("scheduler_move", |b| {
        b.iter(|| {
            for _ in 0..25 {
                black_box(scheduler.tick());
            }
        })
    });
}

/// Benchmark building the render snapshot.
fn bench_snapshot(c: &mut Criterion) {
    let mut engine = PermutationEngine::new();
    engine.turn_slice(Slice::Front, -0.4);
    c.bench_function("snapshot_for_render", |b| {
        b.iter(|| black_box(&engine).snapshot_for_render())
    });
}

/// Benchmark the order computation for a commutator.
fn bench_sequence_order(c: &mut Criterion) {
    let twists = parse_sequence("R U R' U' M2 E S'").unwrap();
    c.bench_function("sequence_order", |b| {
        b.iter(|| sequence_order(black_box(&twists)))
    });
}

criterion_group!(
    benches,
    bench_apply_move,
    bench_scheduler_move,
    bench_snapshot,
    bench_sequence_order
);
criterion_main!(benches);
