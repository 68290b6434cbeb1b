//! Benchmark of the full transform pipeline with a cheap stub engine.
//!
//! The stub keeps per-group work tiny, so this mostly measures the crate's
//! own overhead: long-format construction, regrouping, and key expansion.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use featurize::testing::StubEngine;
use featurize::{ExtractorConfig, FeatureExtractor};
use ndarray::Array2;

fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");

    for &n_samples in &[50usize, 200] {
        let windows = Array2::from_shape_fn((n_samples * 3, 128), |(i, t)| (i + t) as f32);
        let config = ExtractorConfig::builder()
            .vars_per_sample(3)
            .vocab_size(2)
            .n_threads(1)
            .build()
            .unwrap();
        let extractor = FeatureExtractor::new(config, StubEngine);

        group.bench_with_input(
            BenchmarkId::from_parameter(n_samples),
            &windows,
            |b, windows| {
                b.iter(|| {
                    extractor
                        .transform(black_box(windows.view()), &["price", "volume", "spread"])
                        .unwrap()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_transform);
criterion_main!(benches);
