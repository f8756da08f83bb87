//! Criterion micro-benchmarks for one-indexed sequence operations.

use array1d::OneIndexedSequence;
use array1d_bench::{ramp, LARGE, SMALL};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

/// Benchmark: Read every element of an hourly-year sequence by logical index.
fn bench_get_all_large(c: &mut Criterion) {
    let s = ramp(LARGE);

    c.bench_function("get_all_8760", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for i in 1..=LARGE as isize {
                sum += *s.get(i).unwrap();
            }
            black_box(sum)
        });
    });
}

/// Benchmark: Overwrite every element with a coerced `f32`.
fn bench_set_coerced_large(c: &mut Criterion) {
    let mut s = ramp(LARGE);

    c.bench_function("set_coerced_8760", |b| {
        b.iter(|| {
            for i in 1..=LARGE as isize {
                s.set(i, black_box(0.5f32)).unwrap();
            }
        });
    });
}

/// Benchmark: Inclusive stepped slice over the whole sequence.
fn bench_slice_step_large(c: &mut Criterion) {
    let s = ramp(LARGE);

    c.bench_function("slice_step24_8760", |b| {
        b.iter(|| black_box(s.slice_step(1, LARGE as isize, 24).unwrap()));
    });
}

/// Benchmark: Append with coercion from `i32` into a fresh sequence.
fn bench_append_small(c: &mut Criterion) {
    c.bench_function("append_i32_64", |b| {
        b.iter(|| {
            let mut s: OneIndexedSequence<f64> = OneIndexedSequence::with_capacity(SMALL);
            for v in 0..SMALL as i32 {
                s.append(v).unwrap();
            }
            black_box(s)
        });
    });
}

/// Benchmark: The allocate / dimension / deallocate cycle.
fn bench_lifecycle_small(c: &mut Criterion) {
    let mut s: OneIndexedSequence<f64> = OneIndexedSequence::new();

    c.bench_function("lifecycle_64", |b| {
        b.iter(|| {
            s.allocate(SMALL);
            s.dimension(SMALL, 1.0f32).unwrap();
            s.resize(SMALL * 2);
            s.deallocate();
            black_box(s.is_allocated())
        });
    });
}

criterion_group!(
    benches,
    bench_get_all_large,
    bench_set_coerced_large,
    bench_slice_step_large,
    bench_append_small,
    bench_lifecycle_small,
);
criterion_main!(benches);
