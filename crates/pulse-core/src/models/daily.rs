// ABOUTME: Daily brief payload served by /api/dashboard/daily
// ABOUTME: Today's lifting prescription, planned runs, and yesterday's nutrition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::common::{ExerciseSet, OverloadSuggestion, RecentSession};

/// Kind of training day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    /// Gym session and a run
    Double,
    /// Gym session only
    Gym,
    /// Run only
    Run,
    /// Nothing scheduled
    Rest,
}

impl WorkoutType {
    /// Whether anything is scheduled for the day
    #[must_use]
    pub const fn is_training_day(self) -> bool {
        !matches!(self, Self::Rest)
    }
}

/// Prescribed exercise for today's routine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseData {
    /// Exercise name as logged
    pub name: String,
    /// Prescribed sets
    #[serde(default)]
    pub target_sets: Vec<ExerciseSet>,
    /// Rest between sets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rest_seconds: Option<u32>,
    /// Overload recommendation
    pub suggestion: OverloadSuggestion,
    /// Most recent sessions of this exercise
    #[serde(default)]
    pub recent_sessions: Vec<RecentSession>,
    /// Estimated one-repetition maximum
    #[serde(skip_serializing_if = "Option::is_none")]
    pub est_1rm_lbs: Option<f64>,
}

/// A planned run from the training calendar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunPlan {
    /// Calendar summary line
    pub summary: String,
    /// Longer description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Planned distance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_miles: Option<f64>,
    /// Planned duration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<f64>,
    /// Workout kind (easy, tempo, intervals…)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workout_type: Option<String>,
}

/// A recently completed run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentRun {
    /// ISO date
    pub date: String,
    /// Activity name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Distance
    pub distance_miles: f64,
    /// Formatted pace (mm:ss per mile)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pace: Option<String>,
    /// Formatted duration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// Average heart rate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_hr: Option<f64>,
}

/// Yesterday's intake against targets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionData {
    /// Date the numbers refer to
    pub yesterday_date: String,
    /// Calories eaten
    pub calories: f64,
    /// Calorie target
    pub goal_calories: f64,
    /// Protein eaten
    pub protein_g: f64,
    /// Protein target
    pub goal_protein_g: f64,
    /// Carbohydrates eaten
    pub carbs_g: f64,
    /// Fat eaten
    pub fat_g: f64,
}

/// Today's lifting block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLifting {
    /// Routine scheduled for today
    pub routine_name: String,
    /// Exercises in the routine
    #[serde(default)]
    pub exercises: Vec<ExerciseData>,
}

/// Today's running block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRunning {
    /// Runs planned for today
    #[serde(default)]
    pub planned: Vec<RunPlan>,
    /// Latest completed runs
    #[serde(default)]
    pub recent_runs: Vec<RecentRun>,
}

/// Daily brief
///
/// `lifting`, `running`, and `nutrition` are absent when the backend has
/// nothing scheduled or logged for them; absence is not an empty block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyData {
    /// ISO date of the brief
    pub date: String,
    /// Weekday name
    pub day_name: String,
    /// Human-formatted date
    pub display_date: String,
    /// Kind of training day
    pub workout_type: WorkoutType,
    /// Greeting line
    pub greeting: String,
    /// Lifting block
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifting: Option<DailyLifting>,
    /// Running block
    #[serde(skip_serializing_if = "Option::is_none")]
    pub running: Option<DailyRunning>,
    /// Yesterday's nutrition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<NutritionData>,
}
