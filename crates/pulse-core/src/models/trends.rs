// ABOUTME: Weekly trend series points for running and lifting charts
// ABOUTME: Served by /api/running/trend and /api/lifting/trend and embedded in detail payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// One week of running volume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunningTrendPoint {
    /// Monday of the week
    pub week_start: String,
    /// Distance
    pub miles: f64,
    /// Formatted average pace
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pace: Option<String>,
    /// Average pace in seconds per mile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pace_seconds: Option<f64>,
    /// Number of runs
    pub runs: u32,
    /// Average heart rate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_hr: Option<f64>,
    /// Elevation gain in meters
    #[serde(default)]
    pub elevation_m: f64,
    /// Moving time in seconds
    #[serde(default)]
    pub time_seconds: f64,
}

/// One week of lifting volume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiftingTrendPoint {
    /// Monday of the week
    pub week_start: String,
    /// Workouts logged
    pub workouts: u32,
    /// Working sets
    pub total_sets: f64,
    /// Volume
    pub volume_lbs: f64,
}
