// ABOUTME: Criterion benchmarks for the derived dashboard metrics
// ABOUTME: Measures plan compliance, goal board, and race countdown over realistic payload sizes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for derived metrics.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]
#![allow(clippy::unwrap_used)]

use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pulse_core::models::{KeyExercise, OverloadAction, OverloadSuggestion, PlanComplianceDay};
use pulse_intelligence::{
    compliance_summary, days_to_race_date, goal_board, goal_progress, weekly_compliance,
    LIFTING_GOALS,
};

const EXERCISE_NAMES: [&str; 6] = [
    "Bench Press (Barbell)",
    "Squat (Barbell)",
    "Deadlift (Barbell)",
    "Pull Up",
    "Overhead Press (Barbell)",
    "Lateral Raise (Dumbbell)",
];

#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
fn generate_plan_days(count: usize) -> Vec<PlanComplianceDay> {
    let start = Utc.with_ymd_and_hms(2026, 1, 5, 0, 0, 0).unwrap();
    (0..count)
        .map(|index| {
            let planned = (index % 7 != 6).then_some(3.0 + (index % 4) as f64);
            let completed = index % 5 != 0;
            PlanComplianceDay {
                date: (start + Duration::days(index as i64))
                    .format("%Y-%m-%d")
                    .to_string(),
                planned_summary: planned.map(|miles| format!("Easy {miles}")),
                planned_miles: planned,
                completed,
                actual_miles: planned.filter(|_| completed).map(|miles| miles * 0.9),
            }
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn generate_key_exercises(count: usize) -> Vec<KeyExercise> {
    (0..count)
        .map(|index| KeyExercise {
            name: EXERCISE_NAMES[index % EXERCISE_NAMES.len()].to_owned(),
            session_count: 4 + (index % 3) as u32,
            total_sets: 12.0 + (index % 5) as f64,
            muscle_group: "compound".to_owned(),
            current_weight_lbs: Some(95.0 + (index * 10 % 200) as f64),
            est_1rm_lbs: None,
            suggestion: OverloadSuggestion {
                suggestion: "Add 5 lbs".to_owned(),
                action: OverloadAction::Increase,
                suggested_weight_lbs: None,
                suggested_reps: None,
            },
            trend: Vec::new(),
        })
        .collect()
}

fn bench_plan_compliance(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan_compliance");

    for weeks in [4_usize, 16, 52] {
        let days = generate_plan_days(weeks * 7);
        group.throughput(Throughput::Elements(days.len() as u64));
        group.bench_with_input(BenchmarkId::new("summary", weeks), &days, |b, days| {
            b.iter(|| compliance_summary(black_box(days)));
        });
        group.bench_with_input(BenchmarkId::new("weekly", weeks), &days, |b, days| {
            b.iter(|| weekly_compliance(black_box(days)));
        });
    }

    group.finish();
}

fn bench_goal_board(c: &mut Criterion) {
    let mut group = c.benchmark_group("goal_progress");

    group.bench_function("single_goal", |b| {
        let goal = &LIFTING_GOALS[0];
        b.iter(|| goal_progress(black_box(185.0), black_box(5.0), goal));
    });

    for count in [6_usize, 24, 96] {
        let exercises = generate_key_exercises(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("board", count), &exercises, |b, exercises| {
            b.iter(|| goal_board(black_box(exercises)));
        });
    }

    group.finish();
}

fn bench_race_countdown(c: &mut Criterion) {
    let now = Utc.with_ymd_and_hms(2026, 4, 20, 12, 0, 0).unwrap();

    c.bench_function("days_to_race_date", |b| {
        b.iter(|| days_to_race_date(black_box("2026-04-26"), now));
    });
}

criterion_group!(
    benches,
    bench_plan_compliance,
    bench_goal_board,
    bench_race_countdown
);
criterion_main!(benches);
