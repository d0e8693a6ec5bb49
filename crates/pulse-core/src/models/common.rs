// ABOUTME: Shared payload fragments reused across daily, weekly, and lifting resources
// ABOUTME: ExerciseSet, OverloadSuggestion, and RecentSession definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// One working or warm-up set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSet {
    /// Load in pounds (0 for bodyweight)
    pub weight_lbs: f64,
    /// Repetitions performed or targeted
    pub reps: u32,
    /// Set classification reported by the logging app (warmup, normal, dropset…)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_type: Option<String>,
    /// Rate of perceived exertion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpe: Option<f64>,
}

/// Progressive overload recommendation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverloadAction {
    /// Add load or reps next session
    Increase,
    /// Repeat the same prescription
    Hold,
    /// Back off to recover
    Deload,
}

/// Progressive overload suggestion for an exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverloadSuggestion {
    /// Human-readable suggestion
    pub suggestion: String,
    /// Direction of the suggestion
    pub action: OverloadAction,
    /// Suggested load, when the backend proposes one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_weight_lbs: Option<f64>,
    /// Suggested reps, when the backend proposes them
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_reps: Option<u32>,
}

/// A previous session of one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentSession {
    /// ISO date of the session
    pub date: String,
    /// Title of the workout the session belonged to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workout_title: Option<String>,
    /// Sets performed
    #[serde(default)]
    pub sets: Vec<ExerciseSet>,
}
