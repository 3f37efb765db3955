// ABOUTME: Criterion benchmarks for the workout metrics engine
// ABOUTME: Measures weekly summary, exercise history, progress and record rebuilds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for read-time aggregation.
//!
//! Every view is recomputed from the full log on each query, so these track
//! how that cost grows with the size of the log.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use common::fixtures::{generate_workouts, reference_now, LogSize};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use liftlog::intelligence::{
    exercise_history, progress_series, weekly_summary, PersonalRecordTracker,
};

const SIZES: [LogSize; 3] = [LogSize::Small, LogSize::Medium, LogSize::Large];

fn bench_weekly_summary(c: &mut Criterion) {
    let mut group = c.benchmark_group("weekly_summary");
    let now = reference_now();

    for size in SIZES {
        let workouts = generate_workouts(size);
        group.throughput(Throughput::Elements(size.count() as u64));
        group.bench_with_input(
            BenchmarkId::new("current_week", size.count()),
            &workouts,
            |b, workouts| b.iter(|| weekly_summary(black_box(workouts), black_box(&now))),
        );
    }

    group.finish();
}

fn bench_exercise_history(c: &mut Criterion) {
    let mut group = c.benchmark_group("exercise_history");

    for size in SIZES {
        let workouts = generate_workouts(size);
        group.throughput(Throughput::Elements(size.count() as u64));
        group.bench_with_input(
            BenchmarkId::new("history_and_series", size.count()),
            &workouts,
            |b, workouts| {
                b.iter(|| {
                    let history = exercise_history(black_box(workouts), "Bench Press");
                    progress_series(&history)
                });
            },
        );
    }

    group.finish();
}

fn bench_record_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("personal_records");

    for size in SIZES {
        let workouts = generate_workouts(size);
        group.throughput(Throughput::Elements(size.count() as u64));
        group.bench_with_input(
            BenchmarkId::new("rebuild", size.count()),
            &workouts,
            |b, workouts| {
                b.iter(|| {
                    let mut tracker = PersonalRecordTracker::new();
                    tracker.rebuild(black_box(workouts));
                    tracker
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_weekly_summary,
    bench_exercise_history,
    bench_record_rebuild,
);
criterion_main!(benches);
