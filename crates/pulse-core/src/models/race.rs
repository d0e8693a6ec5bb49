// ABOUTME: Race preparation payload: taper mileage, readiness factors, and pace predictions
// ABOUTME: Served by /api/race/prep
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Weekly mileage inside the race block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaperWeek {
    pub week_start: String,
    pub miles: f64,
    pub runs: u32,
}

/// Taper progress relative to the peak week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaperSummary {
    /// Mileage by week, oldest first
    #[serde(default)]
    pub weekly_mileage: Vec<TaperWeek>,
    pub peak_mileage: f64,
    pub current_week_miles: f64,
    /// Reduction from peak to the current week, percent
    pub taper_reduction_pct: f64,
}

/// Scheduled session before the race
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingEvent {
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_miles: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workout_type: Option<String>,
}

/// One scored readiness dimension
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadinessFactor {
    /// Score, 0-100
    pub score: f64,
    pub label: String,
    pub detail: String,
}

/// Overall readiness with its factors
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Readiness {
    /// Overall score, 0-100
    pub overall_score: f64,
    /// Factors keyed by dimension name
    #[serde(default)]
    pub factors: BTreeMap<String, ReadinessFactor>,
}

/// Predicted finish for the race distance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PacePrediction {
    pub predicted_time_seconds: f64,
    pub predicted_time: String,
    pub pace_per_mile: String,
    pub pace_seconds: f64,
    /// Which effort the prediction is derived from
    pub basis: String,
}

/// Best and all available predictions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PacePredictions {
    pub best_prediction: PacePrediction,
    /// Predictions keyed by basis ("5k", "half_marathon", "long_runs"…)
    #[serde(default)]
    pub all_predictions: BTreeMap<String, PacePrediction>,
}

/// Totals for the training block leading into the race
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingBlock {
    pub start_date: String,
    pub total_miles: f64,
    pub total_runs: u32,
    pub total_elevation_m: f64,
    pub longest_run_miles: f64,
    pub quality_sessions: u32,
}

/// Race prep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RacePrepData {
    pub race_name: String,
    /// ISO date of the race
    pub race_date: String,
    pub race_location: String,
    /// Days remaining as computed by the backend
    pub days_to_race: i64,
    /// Backend phase key
    pub phase: String,
    /// Backend phase label
    pub phase_label: String,
    pub taper: TaperSummary,
    #[serde(default)]
    pub upcoming_training: Vec<TrainingEvent>,
    pub readiness: Readiness,
    /// Absent until enough recent efforts exist to predict from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pace_prediction: Option<PacePredictions>,
    pub training_block: TrainingBlock,
}
