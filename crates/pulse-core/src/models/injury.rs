// ABOUTME: Injury log payloads and the create/update form
// ABOUTME: Served by /api/injuries/detail; the form is forwarded to /api/injuries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle state of an injury
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InjuryStatus {
    /// Currently limiting training
    Active,
    /// Improving, training modified
    Recovering,
    /// Healed
    Resolved,
}

impl InjuryStatus {
    /// Wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Recovering => "recovering",
            Self::Resolved => "resolved",
        }
    }
}

impl fmt::Display for InjuryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A logged injury
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Injury {
    /// Backend id
    pub id: i64,
    /// Affected body part
    pub body_part: String,
    /// Left, right, or bilateral
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_side: Option<String>,
    /// Strain, tendinopathy…
    pub injury_type: String,
    /// Severity on a 1-10 scale
    pub severity: u8,
    /// ISO onset date
    pub onset_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub status: InjuryStatus,
    /// Days since onset
    pub days_since_onset: i64,
    /// Days from onset to resolution (or to today)
    pub duration_days: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Aggregate per body part
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyPartHeatmap {
    pub body_part: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_side: Option<String>,
    pub injury_count: u32,
    pub avg_severity: f64,
    pub max_severity: u8,
    pub active_count: u32,
}

/// Suggested training change for an active injury
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutModification {
    pub injury_type: String,
    pub body_part: String,
    pub severity: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub running_mod: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifting_mod: Option<String>,
}

/// Headline injury numbers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InjuryOverview {
    pub total_injuries: u32,
    pub active_injuries: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub most_affected_area: Option<String>,
    /// Absent until at least one injury has resolved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_recovery_days: Option<f64>,
}

/// Upcoming run shown next to active injuries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InjuryUpcomingRun {
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_miles: Option<f64>,
}

/// Today's routine, listed by exercise name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodayRoutine {
    pub name: String,
    #[serde(default)]
    pub exercises: Vec<String>,
}

/// Injuries tab detail
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InjuriesDetailData {
    /// False when the backend has no injury store configured
    #[serde(default)]
    pub available: bool,
    #[serde(default)]
    pub overview: InjuryOverview,
    #[serde(default)]
    pub injuries: Vec<Injury>,
    #[serde(default)]
    pub active_injuries: Vec<Injury>,
    #[serde(default)]
    pub heatmap: Vec<BodyPartHeatmap>,
    #[serde(default)]
    pub modifications: Vec<WorkoutModification>,
    #[serde(default)]
    pub upcoming_runs: Vec<InjuryUpcomingRun>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub today_routine: Option<TodayRoutine>,
}

/// Body of an injury create or update request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjuryForm {
    pub body_part: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_side: Option<String>,
    pub injury_type: String,
    pub severity: u8,
    pub onset_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub status: InjuryStatus,
}
