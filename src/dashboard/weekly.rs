// ABOUTME: Weekly summary view model built from the weekly payload and both trend series
// ABOUTME: Fetches the three resources concurrently and derives adherence and nutrition callouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pulse_core::constants::defaults::TREND_WEEKS;
use pulse_core::errors::UpstreamResult;
use pulse_core::models::{LiftingTrendPoint, RunningTrendPoint, WeeklyData};
use pulse_intelligence::{
    adherence_tier, day_status, weekly_nutrition_trend, AdherenceTier, CalorieAdherence, DayStatus,
    NutritionTrend,
};
use pulse_providers::ResourceClient;
use serde::Serialize;

/// Adherence outcome of one weekday
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayStatusView {
    /// Weekday name
    pub day: String,
    /// Completed, missed, or rest
    pub status: DayStatus,
}

/// Weekly summary page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyView {
    /// Adherence bucket of the week
    pub adherence_tier: AdherenceTier,
    /// Display label of the bucket
    pub adherence_label: &'static str,
    /// Per-day outcomes
    pub day_statuses: Vec<DayStatusView>,
    /// Nutrition comparison, or the not-enough-data sentinel
    pub nutrition_trend: NutritionTrend,
    /// Calorie adherence callout line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calorie_callout: Option<String>,
    /// This week's miles minus last week's
    pub mileage_change: f64,
    /// Remote weekly payload
    pub data: WeeklyData,
    /// Weekly running series
    pub running_trend: Vec<RunningTrendPoint>,
    /// Weekly lifting series
    pub lifting_trend: Vec<LiftingTrendPoint>,
}

impl WeeklyView {
    /// Derive the view from the three remote payloads
    #[must_use]
    pub fn from_parts(
        data: WeeklyData,
        running_trend: Vec<RunningTrendPoint>,
        lifting_trend: Vec<LiftingTrendPoint>,
    ) -> Self {
        let tier = adherence_tier(data.adherence.percentage);
        let day_statuses = data
            .adherence
            .days
            .iter()
            .map(|day| DayStatusView {
                day: day.day.clone(),
                status: day_status(day),
            })
            .collect();

        let nutrition_trend = data
            .nutrition
            .as_ref()
            .map_or(NutritionTrend::NotEnoughData, weekly_nutrition_trend);
        let calorie_callout = match &nutrition_trend {
            NutritionTrend::Tracked(summary) => summary.adherence.as_ref().map(CalorieAdherence::summary),
            NutritionTrend::NotEnoughData => None,
        };

        let running = &data.running;
        let mileage_change = running.this_week.miles - running.last_week.miles;

        Self {
            adherence_tier: tier,
            adherence_label: tier.label(),
            day_statuses,
            nutrition_trend,
            calorie_callout,
            mileage_change,
            data,
            running_trend,
            lifting_trend,
        }
    }
}

/// Fetch the weekly payload and both 12-week trends concurrently
///
/// # Errors
///
/// Fails when any of the three fetches fails; there is no partial view.
pub async fn load(
    resources: &ResourceClient,
    week_start: Option<&str>,
) -> UpstreamResult<WeeklyView> {
    let (data, running_trend, lifting_trend) = tokio::try_join!(
        resources.weekly(week_start),
        resources.running_trend(Some(TREND_WEEKS)),
        resources.lifting_trend(Some(TREND_WEEKS)),
    )?;
    Ok(WeeklyView::from_parts(data, running_trend, lifting_trend))
}
