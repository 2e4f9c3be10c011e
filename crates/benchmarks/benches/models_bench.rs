//! Benchmarks for the Holt-Winters engine.
//!
//! Covers: HoltWinters::fit_predict across series lengths and horizons.

use common::SmoothingConfig;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use models::HoltWinters;

fn generate_trend_seasonal(n: usize, period: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            (100.0 + 1.5 * i as f64)
                * (1.0 + 0.3 * (2.0 * std::f64::consts::PI * i as f64 / period as f64).sin())
        })
        .collect()
}

fn bench_hw_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("hw_fit_predict");

    for n in [100, 1000, 10_000] {
        let values = generate_trend_seasonal(n, 12);
        let model = HoltWinters::new(SmoothingConfig::new(0.3, 0.1, 0.3, 12, 12));

        group.bench_with_input(BenchmarkId::from_parameter(n), &values, |b, vals| {
            b.iter(|| model.fit_predict(black_box(vals)))
        });
    }

    group.finish();
}

fn bench_hw_horizon(c: &mut Criterion) {
    let mut group = c.benchmark_group("hw_horizon");
    let values = generate_trend_seasonal(1000, 24);

    for horizon in [1, 12, 24] {
        let model = HoltWinters::new(SmoothingConfig::new(0.3, 0.1, 0.3, 24, horizon));

        group.bench_with_input(BenchmarkId::from_parameter(horizon), &values, |b, vals| {
            b.iter(|| model.fit_predict(black_box(vals)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_hw_length, bench_hw_horizon);
criterion_main!(benches);
