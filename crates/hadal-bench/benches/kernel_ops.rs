//! Criterion micro-benchmarks for kernel dispatch: serial baseline vs
//! worker-pool fan-out across grid sizes.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hadal_bench::{input_pair, GRID_SIZES, WORKER_COUNTS};
use hadal_dispatch::{ParallelDispatcher, SerialDispatcher};
use hadal_kernels::{Hadamard, Scale};

fn bench_hadamard_serial(c: &mut Criterion) {
    let mut group = c.benchmark_group("hadamard_serial");
    for &len in &GRID_SIZES {
        let (a, b) = input_pair(len);
        let mut out = vec![0.0; len];
        let dispatcher = SerialDispatcher::new();
        group.bench_function(format!("{len}"), |bencher| {
            bencher.iter(|| {
                dispatcher
                    .dispatch(&Hadamard, &[black_box(&a), black_box(&b)], &mut out)
                    .unwrap();
                black_box(out[len / 2])
            });
        });
    }
    group.finish();
}

fn bench_hadamard_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("hadamard_parallel");
    for &len in &GRID_SIZES {
        let (a, b) = input_pair(len);
        let mut out = vec![0.0; len];
        for &workers in &WORKER_COUNTS {
            let dispatcher = ParallelDispatcher::new(workers);
            group.bench_function(format!("{len}x{workers}w"), |bencher| {
                bencher.iter(|| {
                    dispatcher
                        .dispatch(&Hadamard, &[black_box(&a), black_box(&b)], &mut out)
                        .unwrap();
                    black_box(out[len / 2])
                });
            });
        }
    }
    group.finish();
}

fn bench_scale(c: &mut Criterion) {
    let mut group = c.benchmark_group("scale_serial");
    let kernel = Scale::new(1.0625);
    for &len in &GRID_SIZES {
        let (a, _) = input_pair(len);
        let mut out = vec![0.0; len];
        let dispatcher = SerialDispatcher::new();
        group.bench_function(format!("{len}"), |bencher| {
            bencher.iter(|| {
                dispatcher
                    .dispatch(&kernel, &[black_box(&a)], &mut out)
                    .unwrap();
                black_box(out[len / 2])
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_hadamard_serial,
    bench_hadamard_parallel,
    bench_scale
);
criterion_main!(benches);
