//! Benchmarks comparing grouped-sum strategies

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use groupsum::{
    grouped_sum, grouped_sum_indexed_one_pass_unchecked, grouped_totals, GroupSumConfig, Strategy,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

/// Event indicators spread over `n_groups` groups
fn generate_inputs(n: usize, n_groups: usize) -> (Vec<i32>, Vec<i32>) {
    let mut rng = StdRng::seed_from_u64(42);

    let status = (0..n).map(|_| rng.gen_range(0..2)).collect();
    let group = (0..n).map(|_| rng.gen_range(0..n_groups as i32)).collect();
    (status, group)
}

/// Nested vs single pass vs sort-merge as the number of groups grows
fn bench_indexed_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("indexed_strategies");
    group.sample_size(20);

    let n = 10_000;
    for &n_groups in &[2usize, 16, 128] {
        let (status, labels) = generate_inputs(n, n_groups);

        for strategy in Strategy::ALL {
            let config = GroupSumConfig::default().with_strategy(strategy);
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", strategy), n_groups),
                &(&status, &labels),
                |b, (status, labels)| {
                    b.iter(|| {
                        black_box(grouped_sum(&status[..], &labels[..], n_groups, &config))
                    })
                },
            );
        }

        group.bench_with_input(
            BenchmarkId::new("Unchecked", n_groups),
            &(&status, &labels),
            |b, (status, labels)| {
                // SAFETY: generate_inputs keeps every index below n_groups
                b.iter(|| {
                    black_box(unsafe {
                        grouped_sum_indexed_one_pass_unchecked(&status[..], &labels[..], n_groups)
                    })
                })
            },
        );
    }

    group.finish();
}

/// Derived-label strategies on floating-point labels
fn bench_derived_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("derived_strategies");
    group.sample_size(20);

    let (status, labels) = generate_inputs(10_000, 64);
    let labels: Vec<f64> = labels.iter().map(|&g| g as f64 * 0.25).collect();
    let status: Vec<f64> = status.iter().map(|&s| s as f64).collect();

    for strategy in Strategy::ALL {
        let config = GroupSumConfig::default().with_strategy(strategy);
        group.bench_function(format!("{:?}", strategy), |b| {
            b.iter(|| black_box(grouped_totals(&status, &labels, &config)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_indexed_strategies, bench_derived_strategies);
criterion_main!(benches);
