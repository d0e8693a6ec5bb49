// ABOUTME: Weekly summary payload served by /api/dashboard/weekly
// ABOUTME: Adherence, running and lifting comparisons, weekly nutrition, and next week's plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::common::RecentSession;

/// Planned vs. completed sessions for one weekday
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdherenceDay {
    /// Weekday name
    pub day: String,
    /// Planned gym routine
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned_gym: Option<String>,
    /// Planned run summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned_run: Option<String>,
    /// Whether the gym session happened
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_gym: Option<bool>,
    /// Whether the run happened
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_run: Option<bool>,
}

/// Session adherence for the week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Adherence {
    /// Sessions planned
    pub planned: u32,
    /// Sessions completed
    pub completed: u32,
    /// Completed share of planned, 0-100
    pub percentage: f64,
    /// Per-day breakdown
    #[serde(default)]
    pub days: Vec<AdherenceDay>,
}

/// Aggregated running numbers for a period
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunningStats {
    /// Number of runs
    pub runs: f64,
    /// Distance
    pub miles: f64,
    /// Formatted average pace
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pace: Option<String>,
    /// Formatted total time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Total time in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_seconds: Option<f64>,
    /// Average heart rate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_hr: Option<f64>,
    /// Elevation gain in meters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation_m: Option<f64>,
}

/// Aggregated lifting numbers for a period
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LiftingStats {
    /// Workouts logged
    pub workouts: f64,
    /// Working sets
    pub total_sets: f64,
    /// Total volume (weight × reps)
    pub volume_lbs: f64,
    /// Formatted duration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

/// One week of a lift's progression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiftTrend {
    /// Monday of the week
    pub week_start: String,
    /// Heaviest load lifted
    pub max_weight_lbs: f64,
    /// Estimated one-rep max
    pub est_1rm_lbs: f64,
    /// Working sets
    pub total_sets: f64,
    /// Volume
    pub total_volume_lbs: f64,
}

/// A headline lift tracked on the weekly page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyLift {
    /// Exercise name
    pub name: String,
    /// Sessions in the lookback window
    pub session_count: u32,
    /// Working sets in the lookback window
    pub total_sets: f64,
    /// Heaviest load
    pub max_weight_lbs: f64,
    /// Estimated one-rep max
    #[serde(skip_serializing_if = "Option::is_none")]
    pub est_1rm_lbs: Option<f64>,
    /// Weekly progression
    #[serde(default)]
    pub trend: Vec<LiftTrend>,
    /// Latest sessions
    #[serde(default)]
    pub recent_sessions: Vec<RecentSession>,
}

/// Average daily intake against targets over a week
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionAverages {
    /// Days with any food logged
    pub days_tracked: u32,
    /// Average calories
    pub avg_calories: f64,
    /// Average calorie target
    pub avg_goal_calories: f64,
    /// Average protein
    pub avg_protein_g: f64,
    /// Average protein target
    pub avg_goal_protein_g: f64,
    /// Average carbohydrates
    pub avg_carbs_g: f64,
    /// Average carbohydrate target
    pub avg_goal_carbs_g: f64,
    /// Average fat
    pub avg_fat_g: f64,
    /// Average fat target
    pub avg_goal_fat_g: f64,
}

/// Nutrition block of the weekly summary
///
/// `last_week` is absent on the first tracked week and the training/rest
/// day averages are absent until both kinds of day have been logged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeeklyNutrition {
    /// This week's averages
    pub this_week: NutritionAverages,
    /// Last week's averages, when there is history
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_week: Option<NutritionAverages>,
    /// Average calories on training days
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_day_avg_cal: Option<f64>,
    /// Average calories on rest days
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rest_day_avg_cal: Option<f64>,
}

/// A day of next week's plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextWeekDay {
    /// ISO date
    pub date: String,
    /// Weekday name
    pub day_name: String,
    /// Planned gym routine
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gym: Option<String>,
    /// Planned run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run: Option<String>,
}

/// Running comparison windows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyRunning {
    /// Selected week
    pub this_week: RunningStats,
    /// Week before
    pub last_week: RunningStats,
    /// Trailing four-week average
    pub four_week_avg: RunningStats,
    /// Trailing twelve-week average
    pub twelve_week_avg: RunningStats,
}

/// Lifting comparison windows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyLifting {
    /// Selected week
    pub this_week: LiftingStats,
    /// Week before
    pub last_week: LiftingStats,
    /// Headline lifts, when any have enough history
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_lifts: Option<Vec<KeyLift>>,
}

/// Weekly summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyData {
    /// Monday of the week
    pub week_start: String,
    /// Sunday of the week
    pub week_end: String,
    /// Human-formatted range
    pub display_range: String,
    /// Session adherence
    pub adherence: Adherence,
    /// Running comparisons
    pub running: WeeklyRunning,
    /// Lifting comparisons
    pub lifting: WeeklyLifting,
    /// Nutrition, when anything was tracked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<WeeklyNutrition>,
    /// Next week's plan
    #[serde(default)]
    pub next_week: Vec<NextWeekDay>,
}
