// ABOUTME: Property-style tests for the derived metrics over swept input ranges
// ABOUTME: Goal progress monotonicity and clamping, calorie and phase boundaries, countdown clamp
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use chrono::{Duration, TimeZone, Utc};
use pulse_intelligence::{
    adherence_tier, calorie_adherence, classify_taper, days_to_race, goal_progress, race_phase,
    AdherenceTier, CalorieClass, RacePhase, TaperStatus, LIFTING_GOALS,
};

#[test]
fn test_goal_progress_is_monotonic_in_weight_and_reps() {
    for goal in &LIFTING_GOALS {
        let max_weight = goal.goal_weight_lbs * 2.0;
        let max_reps = goal.goal_reps * 2;
        for reps in 0..=max_reps {
            let mut previous = 0;
            let mut weight = 0.0;
            while weight <= max_weight {
                let progress = goal_progress(weight, f64::from(reps), goal);
                assert!(
                    progress >= previous,
                    "{}: progress dropped at {weight} lbs x {reps}",
                    goal.label
                );
                previous = progress;
                weight += 2.5;
            }
        }

        for step in 0..=40 {
            let weight = f64::from(step) * goal.goal_weight_lbs / 20.0;
            let mut previous = 0;
            for reps in 0..=max_reps {
                let progress = goal_progress(weight, f64::from(reps), goal);
                assert!(progress >= previous, "{}: progress dropped at {reps} reps", goal.label);
                previous = progress;
            }
        }
    }
}

#[test]
fn test_goal_progress_endpoints_and_clamp() {
    for goal in &LIFTING_GOALS {
        let reps = f64::from(goal.goal_reps);
        assert_eq!(goal_progress(goal.goal_weight_lbs, reps, goal), 100);
        assert_eq!(goal_progress(0.0, 0.0, goal), 0);
        assert_eq!(goal_progress(goal.goal_weight_lbs * 10.0, reps * 10.0, goal), 100);
        assert_eq!(goal_progress(f64::MAX, f64::MAX, goal), 100);
    }
}

#[test]
fn test_calorie_classes_partition_the_range() {
    let goal = 2500.0;
    for actual in (0..=5000).step_by(25) {
        let actual = f64::from(actual);
        let adherence = calorie_adherence(actual, goal).expect("positive goal classifies");
        let expected = match adherence.pct {
            pct if pct < 90 => CalorieClass::UnderEating,
            pct if pct > 110 => CalorieClass::Over,
            _ => CalorieClass::OnTarget,
        };
        assert_eq!(adherence.class, expected, "actual {actual}");
    }
    assert!(calorie_adherence(2500.0, 0.0).is_none());
}

#[test]
fn test_adherence_tiers_do_not_overlap() {
    let mut last_rank = 0;
    for tenth in 0..=1000 {
        let pct = f64::from(tenth) / 10.0;
        let rank = match adherence_tier(pct) {
            AdherenceTier::BelowPlan => 0,
            AdherenceTier::Mixed => 1,
            AdherenceTier::Solid => 2,
            AdherenceTier::Excellent => 3,
        };
        assert!(rank >= last_rank, "tier went down at {pct}");
        last_rank = rank;
    }
}

#[test]
fn test_taper_window() {
    let on_track: Vec<i32> = (0..=100)
        .filter(|pct| classify_taper(f64::from(*pct)) == TaperStatus::OnTrack)
        .collect();
    assert_eq!(on_track.first(), Some(&20));
    assert_eq!(on_track.last(), Some(&50));
    assert_eq!(on_track.len(), 31);
}

#[test]
fn test_days_to_race_never_negative() {
    let race = Utc.with_ymd_and_hms(2026, 4, 12, 7, 0, 0).unwrap();
    for hours in -500_i64..=500 {
        let now = race + Duration::hours(hours);
        let days = days_to_race(race, now);
        if hours >= 0 {
            assert_eq!(days, 0);
        } else {
            assert_eq!(i64::from(days), (-hours + 23) / 24);
        }
    }
}

#[test]
fn test_phase_sequence_over_countdown() {
    let phases: Vec<RacePhase> = (0..=30).map(race_phase).collect();
    assert_eq!(phases[0], RacePhase::RaceDay);
    assert!(phases[1..=7].iter().all(|p| *p == RacePhase::RaceWeek));
    assert!(phases[8..=21]
        .iter()
        .all(|p| matches!(p, RacePhase::Taper { .. })));
    assert!(phases[22..].iter().all(|p| *p == RacePhase::Training));
}
