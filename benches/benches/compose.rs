// Copyright 2026 the Tailor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `tailor_compose`: building and applying composed styles.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use tailor_compose::{Style, compose};

#[derive(Clone, Default)]
struct Probe {
    width: f64,
    radius: f64,
    writes: u32,
}

fn step(value: f64) -> Style<Probe> {
    Style::from_fn(move |p: &mut Probe| {
        p.width = value;
        p.radius = value * 0.5;
        p.writes += 1;
    })
}

fn chain(len: usize) -> Style<Probe> {
    compose((0..len).map(|i| step(i as f64)))
}

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose/build");
    for len in [1_usize, 8, 64] {
        let parts: Vec<Style<Probe>> = (0..len).map(|i| step(i as f64)).collect();
        group.bench_function(BenchmarkId::new("flat", len), |b| {
            b.iter(|| black_box(compose(parts.iter().cloned())));
        });
    }

    // Deeply nested composition flattens, so its apply cost matches the flat case.
    group.bench_function("nested/64", |b| {
        b.iter(|| {
            let mut style = Style::identity();
            for i in 0..64 {
                style = compose([style, step(i as f64)]);
            }
            black_box(style)
        });
    });
    group.finish();

    let mut group = c.benchmark_group("compose/apply");
    for len in [1_usize, 8, 64] {
        let style = chain(len);
        group.bench_function(BenchmarkId::new("run", len), |b| {
            b.iter_batched(
                Probe::default,
                |mut probe| {
                    style.run(&mut probe);
                    black_box(probe.width + probe.radius + f64::from(probe.writes))
                },
                BatchSize::SmallInput,
            );
        });
    }

    let style = chain(8).fallible::<()>();
    group.bench_function("fallible/8", |b| {
        let mut probe = Probe::default();
        b.iter(|| black_box(style.apply(&mut probe)));
    });
    group.finish();
}

criterion_group!(benches, bench_compose);
criterion_main!(benches);
