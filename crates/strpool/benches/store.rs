//! Store-path benchmarks.
//!
//! Measures bulk store throughput per placement policy and the
//! leftover-reuse workload where the scanning policies pay for their
//! reverse scan while Greedy stays O(1).

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use strpool::{PlacementPolicy, StringPool};

const POLICIES: [PlacementPolicy; 3] = [
    PlacementPolicy::Greedy,
    PlacementPolicy::Balanced,
    PlacementPolicy::Conservative,
];

fn bench_bulk_store(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulk_store");

    for size in [100, 1_000, 10_000] {
        let strings: Vec<String> = (0..size).map(|i| format!("identifier_{i}")).collect();

        for policy in POLICIES {
            group.bench_with_input(
                BenchmarkId::new(policy.name(), size),
                &strings,
                |b, strings| {
                    b.iter(|| {
                        let mut pool = StringPool::new(policy, 4096);
                        for s in strings {
                            black_box(pool.store(s));
                        }
                        black_box(pool.num_chunks())
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_leftover_reuse(c: &mut Criterion) {
    let mut group = c.benchmark_group("leftover_reuse");

    // Large payloads leave a per-chunk remainder that only the small
    // payloads of the second phase can fill; the scanning policies walk
    // backwards through hundreds of chunks to find it.
    let large = "a".repeat(9);
    let small = "b".repeat(5);

    for policy in POLICIES {
        group.bench_function(policy.name(), |b| {
            b.iter(|| {
                let mut pool = StringPool::new(policy, 16);
                for _ in 0..500 {
                    black_box(pool.store(&large));
                }
                for _ in 0..500 {
                    black_box(pool.store(&small));
                }
                black_box(pool.num_chunks())
            });
        });
    }

    group.finish();
}

fn bench_mixed_lengths(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed_lengths");

    for size in [1_000, 10_000] {
        let strings: Vec<String> = (0..size)
            .map(|i| {
                if i % 3 == 0 {
                    format!("short_{}", i % 10)
                } else if i % 2 == 0 {
                    format!("medium_identifier_{}", i % 100)
                } else {
                    format!("rather_long_identifier_with_padding_{i}")
                }
            })
            .collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &strings,
            |b, strings| {
                b.iter(|| {
                    let mut pool = StringPool::new(PlacementPolicy::Balanced, 1024);
                    for s in strings {
                        black_box(pool.store(s));
                    }
                    black_box(pool.total_allocated())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_bulk_store,
    bench_leftover_reuse,
    bench_mixed_lengths
);
criterion_main!(benches);
