// ABOUTME: Lifting tab view model from the lifting detail and saved routines
// ABOUTME: Builds the goal board and counts progressive overload suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pulse_core::errors::UpstreamResult;
use pulse_core::models::{LiftingDetailData, LiftingRoutinesData, OverloadAction};
use pulse_intelligence::{goal_board, GoalStatus};
use pulse_providers::ResourceClient;
use serde::Serialize;

/// Lifting tab
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiftingView {
    /// One card per lifting goal
    pub goals: Vec<GoalStatus>,
    /// Key exercises the backend suggests progressing
    pub ready_to_progress: usize,
    /// Key exercises the backend suggests deloading
    pub deload_suggested: usize,
    /// Lifting detail payload
    pub detail: LiftingDetailData,
    /// Saved routines
    pub routines: LiftingRoutinesData,
}

impl LiftingView {
    /// Derive the view from the detail and routines payloads
    #[must_use]
    pub fn from_parts(detail: LiftingDetailData, routines: LiftingRoutinesData) -> Self {
        let count_action = |action: OverloadAction| {
            detail
                .key_exercises
                .iter()
                .filter(|exercise| exercise.suggestion.action == action)
                .count()
        };

        Self {
            goals: goal_board(&detail.key_exercises),
            ready_to_progress: count_action(OverloadAction::Increase),
            deload_suggested: count_action(OverloadAction::Deload),
            detail,
            routines,
        }
    }
}

/// Fetch the lifting detail and routines concurrently
///
/// # Errors
///
/// Fails when either fetch fails.
pub async fn load(resources: &ResourceClient) -> UpstreamResult<LiftingView> {
    let (detail, routines) =
        tokio::try_join!(resources.lifting_detail(), resources.lifting_routines())?;
    Ok(LiftingView::from_parts(detail, routines))
}
