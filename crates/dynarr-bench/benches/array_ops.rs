//! Criterion micro-benchmarks for append, bulk append, reserve, and removal.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use dynarr::DynArr;
use dynarr_bench::{filled, source, REFERENCE_LEN};

fn bench_push(c: &mut Criterion) {
    c.bench_function("push_10k_from_zero", |b| {
        b.iter(|| {
            let mut arr = DynArr::<u64>::new();
            for i in 0..REFERENCE_LEN as u64 {
                arr.push(black_box(i));
            }
            black_box(arr.len())
        });
    });

    c.bench_function("push_10k_preallocated", |b| {
        b.iter(|| {
            let mut arr = DynArr::<u64>::new();
            arr.reserve(REFERENCE_LEN);
            for i in 0..REFERENCE_LEN as u64 {
                arr.push(black_box(i));
            }
            black_box(arr.len())
        });
    });
}

fn bench_bulk_append(c: &mut Criterion) {
    let values = source(REFERENCE_LEN);

    c.bench_function("extend_from_slice_10k", |b| {
        b.iter(|| {
            let mut arr = DynArr::<u64>::new();
            arr.extend_from_slice(black_box(&values));
            black_box(arr.len())
        });
    });

    c.bench_function("extend_from_slice_10k_in_chunks", |b| {
        b.iter(|| {
            let mut arr = DynArr::<u64>::new();
            for chunk in values.chunks(64) {
                arr.extend_from_slice(black_box(chunk));
            }
            black_box(arr.len())
        });
    });
}

fn bench_removal(c: &mut Criterion) {
    c.bench_function("remove_front_1k", |b| {
        b.iter_batched(
            || filled(1000),
            |mut arr| {
                while !arr.is_empty() {
                    black_box(arr.remove(0));
                }
                arr
            },
            BatchSize::SmallInput,
        );
    });

    c.bench_function("remove_range_middle_10k", |b| {
        b.iter_batched(
            || filled(REFERENCE_LEN),
            |mut arr| {
                arr.remove_range(REFERENCE_LEN / 4, 3 * REFERENCE_LEN / 4);
                black_box(arr.len());
                arr
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_shrink(c: &mut Criterion) {
    c.bench_function("shrink_to_fit_after_halving", |b| {
        b.iter_batched(
            || {
                let mut arr = filled(REFERENCE_LEN);
                arr.remove_range(REFERENCE_LEN / 2, REFERENCE_LEN);
                arr
            },
            |mut arr| {
                arr.shrink_to_fit();
                black_box(arr.capacity());
                arr
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_push,
    bench_bulk_append,
    bench_removal,
    bench_shrink
);
criterion_main!(benches);
