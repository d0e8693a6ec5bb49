// ABOUTME: Running tab payloads: activity detail, personal records, and the training calendar
// ABOUTME: Served by /api/running/detail and /api/running/schedule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::trends::RunningTrendPoint;

/// Per-mile split of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSplit {
    /// Mile number, starting at 1
    pub mile: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pace_seconds: Option<f64>,
    /// Elevation change over the split in meters
    #[serde(default)]
    pub elevation_diff: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_hr: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cadence: Option<f64>,
}

/// Best effort over a standard distance within one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestEffort {
    /// Distance name ("1 mile", "5K"…)
    pub name: String,
    /// Elapsed seconds
    pub elapsed_time: f64,
    /// Formatted elapsed time
    pub elapsed_display: String,
}

/// A completed run with optional stream-derived detail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunActivity {
    /// Activity id in the tracking service
    pub id: i64,
    pub date: String,
    pub name: String,
    pub distance_miles: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pace_seconds: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default)]
    pub duration_seconds: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_hr: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_hr: Option<f64>,
    #[serde(default)]
    pub elevation_m: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffer_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cadence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stride_length: Option<f64>,
    /// Encoded route polyline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_polyline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_latlng: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub splits: Option<Vec<RunSplit>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_efforts: Option<Vec<BestEffort>>,
}

/// Fastest recorded effort at a distance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalRecord {
    pub name: String,
    pub date: String,
    pub distance_miles: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// Raw record value used for ranking
    pub value: f64,
}

/// Planned vs. actual for one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanComplianceDay {
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned_summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned_miles: Option<f64>,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_miles: Option<f64>,
}

/// A run from the upcoming calendar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpcomingRun {
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_miles: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workout_type: Option<String>,
}

/// Headline running totals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunningOverview {
    pub all_time_miles: f64,
    pub all_time_runs: u32,
    pub month_miles: f64,
    pub month_runs: u32,
    pub week_miles: f64,
    pub week_runs: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month_avg_pace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month_avg_pace_seconds: Option<f64>,
}

/// Running tab detail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunningDetailData {
    /// Headline totals
    pub overview: RunningOverview,
    /// Records keyed by distance name
    #[serde(default)]
    pub personal_records: BTreeMap<String, PersonalRecord>,
    /// Recent runs, newest first
    #[serde(default)]
    pub runs: Vec<RunActivity>,
    /// Weekly mileage series
    #[serde(default)]
    pub weekly_trend: Vec<RunningTrendPoint>,
    /// Planned vs. actual per day
    #[serde(default)]
    pub plan_compliance: Vec<PlanComplianceDay>,
    /// Upcoming planned runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upcoming_runs: Option<Vec<UpcomingRun>>,
}

/// A training calendar entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEvent {
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned_miles: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workout_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_miles: Option<f64>,
}

/// Planned vs. actual mileage for a week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyComparison {
    pub week_start: String,
    pub planned_miles: f64,
    pub actual_miles: f64,
    pub planned_runs: u32,
    pub actual_runs: u32,
}

/// Running schedule
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunningScheduleData {
    #[serde(default)]
    pub past_events: Vec<ScheduleEvent>,
    #[serde(default)]
    pub future_events: Vec<ScheduleEvent>,
    #[serde(default)]
    pub weekly_comparison: Vec<WeeklyComparison>,
}
