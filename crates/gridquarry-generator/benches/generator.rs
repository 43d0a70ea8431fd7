//! Benchmarks for Sudoku puzzle generation.
//!
//! Measures the complete pipeline (grid fill, digging, uniqueness checks)
//! through [`PuzzleSession::generate`] at two difficulty targets.
//!
//! # Test Data
//!
//! Uses three fixed seeds to ensure reproducibility while testing multiple
//! cases; each seed produces a different grid and removal order.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use gridquarry_generator::{PuzzleSeed, PuzzleSession};

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

fn bench_generate_easy(c: &mut Criterion) {
    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = PuzzleSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new("generate_easy", format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || PuzzleSession::with_seed(hint::black_box(*seed)),
                    |mut session| session.generate(40, 1_000),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_generate_hard(c: &mut Criterion) {
    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = PuzzleSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new("generate_hard", format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || PuzzleSession::with_seed(hint::black_box(*seed)),
                    |mut session| session.generate(27, 10_000),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(12));
    targets =
        bench_generate_easy,
        bench_generate_hard
);
criterion_main!(benches);
