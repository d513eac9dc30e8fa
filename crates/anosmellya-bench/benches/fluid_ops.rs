//! Criterion micro-benchmarks for the smell field kernels.

use std::hint::black_box;

use anosmellya_core::FluidKind;
use anosmellya_fluid::{disperse, evaporate, smell_gradient, update};
use anosmellya_engine::{Config, FluidPool};
use anosmellya_test_utils::noise_field;
use criterion::{criterion_group, criterion_main, Criterion};

fn bench_disperse_63k(c: &mut Criterion) {
    let mut grid = noise_field(300, 210, 100.0, 42);
    c.bench_function("disperse_63k", |b| {
        b.iter(|| disperse(black_box(&mut grid), 0.07));
    });
}

fn bench_evaporate_63k(c: &mut Criterion) {
    let mut grid = noise_field(300, 210, 100.0, 42);
    c.bench_function("evaporate_63k", |b| {
        b.iter(|| evaporate(black_box(&mut grid), 0.001));
    });
}

fn bench_gradient_sweep_63k(c: &mut Criterion) {
    let grid = noise_field(300, 210, 100.0, 42);
    c.bench_function("gradient_sweep_63k", |b| {
        b.iter(|| {
            for y in 0..grid.height() {
                for x in 0..grid.width() {
                    black_box(smell_gradient(&grid, x, y));
                }
            }
        });
    });
}

fn bench_all_fields(c: &mut Criterion) {
    let config = Config::default();
    let mut group = c.benchmark_group("all_fields_63k");
    let fields = || {
        FluidKind::ALL.map(|kind| noise_field(300, 210, 100.0, kind.index() as u64))
    };

    let mut sync = fields();
    group.bench_function("sequential", |b| {
        b.iter(|| {
            for kind in FluidKind::ALL {
                update(&mut sync[kind.index()], config.rates(kind));
            }
        });
    });

    let mut pooled = fields();
    let mut pool = FluidPool::new(4);
    group.bench_function("pool", |b| {
        b.iter(|| pool.update(black_box(&mut pooled), &config));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_disperse_63k,
    bench_evaporate_63k,
    bench_gradient_sweep_63k,
    bench_all_fields
);
criterion_main!(benches);
