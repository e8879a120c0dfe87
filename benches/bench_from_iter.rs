extern crate criterion;

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use fifo_priority_queue::FifoPriorityQueue;

mod generators;
use crate::generators::{gen_random_priorities, gen_random_usizes, get_random_strings};

pub fn bench_from_iter(c: &mut Criterion) {
    let base_values = gen_random_usizes(500_000, 0);
    let base_priorities = gen_random_priorities(500_000, 7);

    let mut group = c.benchmark_group("from_iter_usize");
    for &size in &[100_000, 200_000, 300_000, 400_000, 500_000] {
        assert!(base_values.len() >= size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let pairs: Vec<_> = base_values[..size]
                .iter()
                .cloned()
                .zip(base_priorities[..size].iter().cloned())
                .collect();
            b.iter_batched(
                || pairs.clone(),
                |pairs| pairs.into_iter().collect::<FifoPriorityQueue<usize>>(),
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();

    let mut group = c.benchmark_group("from_iter_string");
    let base_values = get_random_strings(50_000, 0);
    let base_priorities = gen_random_priorities(50_000, 7);

    for &size in &[10_000, 30_000, 50_000] {
        assert!(base_values.len() >= size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let pairs: Vec<_> = base_values[..size]
                .iter()
                .cloned()
                .zip(base_priorities[..size].iter().cloned())
                .collect();
            b.iter_batched(
                || pairs.clone(),
                |pairs| pairs.into_iter().collect::<FifoPriorityQueue<String>>(),
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_from_iter);
criterion_main!(benches);
