// ABOUTME: Running tab view model from the running detail and schedule payloads
// ABOUTME: Derives plan compliance over the trailing window and per-week mileage completion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pulse_core::errors::UpstreamResult;
use pulse_core::models::{RunningDetailData, RunningScheduleData, WeeklyComparison};
use pulse_intelligence::{
    compliance_summary, plan_compliance_pct, weekly_compliance, ComplianceSummary, WeekCompliance,
};
use pulse_providers::ResourceClient;
use serde::Serialize;

/// Planned vs. actual week from the schedule, with its completion percentage
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleWeekView {
    /// Remote comparison row
    #[serde(flatten)]
    pub week: WeeklyComparison,
    /// Planned mileage completed, 0-100
    pub completion_pct: u8,
}

/// Running tab
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunningView {
    /// Completed vs. planned days over the last four weeks
    pub compliance: ComplianceSummary,
    /// Plan compliance grouped by week
    pub compliance_weeks: Vec<WeekCompliance>,
    /// Schedule weeks with completion
    pub schedule_weeks: Vec<ScheduleWeekView>,
    /// Running detail payload
    pub detail: RunningDetailData,
    /// Schedule payload
    pub schedule: RunningScheduleData,
}

impl RunningView {
    /// Derive the view from the detail and schedule payloads
    #[must_use]
    pub fn from_parts(detail: RunningDetailData, schedule: RunningScheduleData) -> Self {
        let schedule_weeks = schedule
            .weekly_comparison
            .iter()
            .map(|week| ScheduleWeekView {
                completion_pct: plan_compliance_pct(week.planned_miles, week.actual_miles),
                week: week.clone(),
            })
            .collect();

        Self {
            compliance: compliance_summary(&detail.plan_compliance),
            compliance_weeks: weekly_compliance(&detail.plan_compliance),
            schedule_weeks,
            detail,
            schedule,
        }
    }
}

/// Fetch the running detail and schedule concurrently
///
/// # Errors
///
/// Fails when either fetch fails.
pub async fn load(resources: &ResourceClient) -> UpstreamResult<RunningView> {
    let (detail, schedule) =
        tokio::try_join!(resources.running_detail(), resources.running_schedule())?;
    Ok(RunningView::from_parts(detail, schedule))
}
