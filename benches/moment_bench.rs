//! Benchmarks for moment computation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use monomoment::prelude::*;

fn unit_box(n: usize) -> (Vec<i64>, Vec<Rational>, Vec<Rational>) {
    let order = (0..n).map(|i| (i % 5) as i64 + 1).collect();
    let lo = (0..n).map(|i| Rational::from_i64(-(i as i64) - 1, 2)).collect();
    let hi = (0..n).map(|i| Rational::from_i64(i as i64 + 3, 2)).collect();
    (order, lo, hi)
}

fn bench_exact(c: &mut Criterion) {
    let mut group = c.benchmark_group("moment_exact");

    for n in [1, 4, 16, 64] {
        let (order, lo, hi) = unit_box(n);
        group.bench_with_input(BenchmarkId::new("dimensions", n), &n, |b, _| {
            b.iter(|| black_box(moment_exact(&order, &lo, &hi)))
        });
    }

    group.finish();
}

fn bench_symbolic(c: &mut Criterion) {
    let mut group = c.benchmark_group("moment_symbolic");

    for n in [1, 4, 16] {
        let order: Vec<i64> = (0..n).map(|i| (i % 5) as i64 + 1).collect();
        let lo: Vec<Bound> = (0..n).map(|i| Bound::symbol(format!("a{i}"))).collect();
        let hi: Vec<Bound> = (0..n).map(|i| Bound::symbol(format!("b{i}"))).collect();

        for strategy in [MomentStrategy::Factored, MomentStrategy::Iterated] {
            let options = MomentOptions {
                strategy,
                ..Default::default()
            };
            group.bench_with_input(
                BenchmarkId::new(format!("{strategy:?}"), n),
                &n,
                |b, _| {
                    b.iter(|| {
                        let mut arena = ExprArena::new();
                        black_box(moment_with_options(&mut arena, &order, &lo, &hi, options.clone()))
                    })
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_exact, bench_symbolic);
criterion_main!(benches);
