// ABOUTME: Criterion benchmarks for the per-interaction dashboard pipeline
// ABOUTME: Measures dataset normalization, per-user aggregation, and both predictor variants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the dashboard pipeline.
//!
//! Every slider change re-runs aggregation and prediction, so these paths
//! bound interaction latency.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use common::fixtures::{activity_model, generate_records, per_user_pair, user_id, DatasetSize};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fitdash::context::DashboardContext;
use fitdash::dashboard::DashboardService;
use fitdash::dataset::Dataset;
use fitdash::intelligence::{
    CaloriePredictor, DirectPredictor, FeatureVectorBuilder, PreprocessedPredictor, SliderInput,
};

const SIZES: [DatasetSize; 2] = [DatasetSize::Small, DatasetSize::Typical];

fn bench_dataset_normalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("dataset_normalization");
    for size in SIZES {
        let records = generate_records(size);
        group.throughput(Throughput::Elements(records.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size.label()),
            &records,
            |b, records| {
                b.iter(|| Dataset::from_records(black_box(records.clone())));
            },
        );
    }
    group.finish();
}

fn bench_user_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("user_aggregate");
    for size in SIZES {
        let Ok(dataset) = Dataset::from_records(generate_records(size)) else {
            continue;
        };
        let user = user_id(0);
        group.bench_with_input(
            BenchmarkId::from_parameter(size.label()),
            &dataset,
            |b, dataset| {
                b.iter(|| dataset.aggregate(black_box(&user)));
            },
        );
    }
    group.finish();
}

fn bench_predictors(c: &mut Criterion) {
    let mut group = c.benchmark_group("predict");
    let sliders = SliderInput::new(9_000, 30, 15, 200, 700);
    let user = user_id(3);

    if let Ok(direct) = DirectPredictor::new(activity_model()) {
        let input = FeatureVectorBuilder::build(sliders);
        group.bench_function("activity_only", |b| {
            b.iter(|| direct.predict(black_box(&input)));
        });
    }

    let (preprocessor, model) = per_user_pair(DatasetSize::Typical);
    if let Ok(per_user) = PreprocessedPredictor::new(preprocessor, model) {
        let input = FeatureVectorBuilder::build_for_user(&user, sliders);
        group.bench_function("per_user", |b| {
            b.iter(|| per_user.predict(black_box(&input)));
        });
    }
    group.finish();
}

fn bench_full_evaluation(c: &mut Criterion) {
    let (preprocessor, model) = per_user_pair(DatasetSize::Typical);
    let (Ok(dataset), Ok(predictor)) = (
        Dataset::from_records(generate_records(DatasetSize::Typical)),
        PreprocessedPredictor::new(preprocessor, model),
    ) else {
        return;
    };
    let context = DashboardContext::new(dataset, Box::new(predictor));
    let service = DashboardService::new(&context);
    let user = user_id(7);

    c.bench_function("evaluate_dashboard", |b| {
        b.iter(|| service.evaluate(black_box(&user), None));
    });
}

criterion_group!(
    benches,
    bench_dataset_normalization,
    bench_user_aggregate,
    bench_predictors,
    bench_full_evaluation
);
criterion_main!(benches);
