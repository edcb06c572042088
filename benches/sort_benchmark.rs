//! Criterion benchmarks for the radix sort against the std sorts.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;

use decimal_radix_sort::harness::{generate_input, Algorithm};

/// Values below the array size, as in the benchmark harness.
fn generate_data(size: usize) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(size as u64);
    generate_input(size, &mut rng).expect("bench sizes fit in u32")
}

fn bench_sorts(c: &mut Criterion) {
    for algorithm in Algorithm::ALL {
        let mut group = c.benchmark_group(algorithm.name());

        for size_exp in [2, 3, 4, 5, 6] {
            let size = 10usize.pow(size_exp);
            group.throughput(Throughput::Elements(size as u64));

            group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
                b.iter_batched(
                    || generate_data(size),
                    |mut data| {
                        algorithm.sort(black_box(&mut data));
                        data
                    },
                    criterion::BatchSize::LargeInput,
                )
            });
        }

        group.finish();
    }
}

/// A single digit pass, isolated from the orchestration.
fn bench_digit_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("digit_bucket_sort");
    let size = 1usize << 20;
    group.throughput(Throughput::Elements(size as u64));

    for place in [1u32, 1000, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(place), &place, |b, &place| {
            b.iter_batched(
                || generate_data(size),
                |mut data| {
                    decimal_radix_sort::digit_bucket_sort(black_box(&mut data), place);
                    data
                },
                criterion::BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sorts, bench_digit_pass);
criterion_main!(benches);
