extern crate criterion;

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use fifo_priority_queue::FifoPriorityQueue;

mod generators;
use crate::generators::{gen_random_priorities, gen_random_usizes, get_random_strings};

pub fn bench_push(c: &mut Criterion) {
    let base_values = gen_random_usizes(500_000, 0);
    let base_priorities = gen_random_priorities(500_000, 7);

    let extra_values = gen_random_usizes(1000, 8);
    let extra_priorities = gen_random_priorities(1000, 20);
    let extra: Vec<_> = extra_values
        .into_iter()
        .zip(extra_priorities.into_iter())
        .collect();

    let mut group = c.benchmark_group("push_usizes_random");
    for &size in &[100_000, 200_000, 300_000, 400_000, 500_000] {
        assert!(base_values.len() >= size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let base_queue: FifoPriorityQueue<usize> = base_values[..size]
                .iter()
                .cloned()
                .zip(base_priorities[..size].iter().cloned())
                .collect();
            b.iter_batched(
                || base_queue.clone(),
                |mut queue| {
                    for (value, priority) in extra.iter().cloned() {
                        queue.push(value, priority);
                    }
                    queue
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();

    let mut group = c.benchmark_group("push_strings_random");
    let base_values = get_random_strings(50_000, 0);
    let base_priorities = gen_random_priorities(50_000, 7);

    let extra_values = get_random_strings(1000, 8);
    let extra_priorities = gen_random_priorities(1000, 20);
    let extra: Vec<_> = extra_values
        .into_iter()
        .zip(extra_priorities.into_iter())
        .collect();

    for &size in &[10_000, 20_000, 30_000, 40_000, 50_000] {
        assert!(base_values.len() >= size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let base_queue: FifoPriorityQueue<String> = base_values[..size]
                .iter()
                .cloned()
                .zip(base_priorities[..size].iter().cloned())
                .collect();
            b.iter_batched(
                || base_queue.clone(),
                |mut queue| {
                    for (value, priority) in extra.iter().cloned() {
                        queue.push(value, priority);
                    }
                    queue
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_push);
criterion_main!(benches);
