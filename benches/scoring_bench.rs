//! Criterion benchmarks for risk scoring and region segmentation.
#![allow(missing_docs, unused_results)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use synview::risk::{segment, AggregationScorer};
use synview::sequence::ALPHA_SYNUCLEIN;

fn score_benchmark(c: &mut Criterion) {
    let scorer = AggregationScorer::standard();
    c.bench_function("score_alpha_synuclein", |b| {
        b.iter(|| black_box(scorer.compute_risk_scores(black_box(ALPHA_SYNUCLEIN))))
    });
}

fn region_benchmark(c: &mut Criterion) {
    let scorer = AggregationScorer::standard();
    let scores = scorer.compute_risk_scores(ALPHA_SYNUCLEIN);

    let mut group = c.benchmark_group("segment");
    for threshold in [30.0, 60.0, 90.0] {
        group.bench_function(format!("threshold_{}", threshold as u32), |b| {
            b.iter(|| black_box(segment(black_box(&scores), threshold)))
        });
    }
    group.finish();
}

criterion_group!(benches, score_benchmark, region_benchmark);
criterion_main!(benches);
