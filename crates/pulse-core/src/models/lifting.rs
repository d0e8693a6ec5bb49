// ABOUTME: Lifting tab payloads: volume overview, key exercises, and saved routines
// ABOUTME: Served by /api/lifting/detail and /api/lifting/routines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::common::{ExerciseSet, OverloadSuggestion};
use super::trends::LiftingTrendPoint;
use super::weekly::LiftTrend;

/// Working sets per muscle group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MuscleGroupData {
    pub muscle_group: String,
    pub total_sets: f64,
    pub exercise_count: u32,
}

/// A frequently trained exercise with its progression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyExercise {
    /// Exercise name as logged
    pub name: String,
    pub session_count: u32,
    pub total_sets: f64,
    pub muscle_group: String,
    /// Current working weight, absent without recent sessions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_weight_lbs: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub est_1rm_lbs: Option<f64>,
    pub suggestion: OverloadSuggestion,
    /// Weekly progression, oldest first
    #[serde(default)]
    pub trend: Vec<LiftTrend>,
}

/// Exercise inside a logged workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutExercise {
    pub name: String,
    #[serde(default)]
    pub sets: Vec<ExerciseSet>,
}

/// A logged workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentWorkout {
    pub id: String,
    pub date: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default)]
    pub exercises: Vec<WorkoutExercise>,
}

/// Progression series for one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiftingProgressionExercise {
    pub name: String,
    pub session_count: u32,
    #[serde(default)]
    pub trend: Vec<LiftTrend>,
}

/// Headline lifting totals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LiftingOverview {
    pub all_time_workouts: u32,
    pub month_workouts: u32,
    pub week_workouts: u32,
    pub avg_sessions_per_week: f64,
    pub week_volume_lbs: f64,
    pub month_volume_lbs: f64,
}

/// Lifting tab detail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiftingDetailData {
    pub overview: LiftingOverview,
    #[serde(default)]
    pub muscle_group_breakdown: Vec<MuscleGroupData>,
    #[serde(default)]
    pub key_exercises: Vec<KeyExercise>,
    #[serde(default)]
    pub weekly_trend: Vec<LiftingTrendPoint>,
    #[serde(default)]
    pub progression: Vec<LiftingProgressionExercise>,
    #[serde(default)]
    pub recent_workouts: Vec<RecentWorkout>,
}

/// Exercise prescribed by a routine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutineExercise {
    pub name: String,
    #[serde(default)]
    pub sets: Vec<ExerciseSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rest_seconds: Option<u32>,
}

/// A saved routine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Routine {
    pub id: String,
    pub title: String,
    /// Weekday the routine is scheduled on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<String>,
    #[serde(default)]
    pub exercises: Vec<RoutineExercise>,
}

/// Saved routines
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LiftingRoutinesData {
    #[serde(default)]
    pub routines: Vec<Routine>,
}
