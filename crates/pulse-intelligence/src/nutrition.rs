// ABOUTME: Calorie adherence classification, protein hit tiers, and weekly nutrition trend
// ABOUTME: Never divides by a missing or non-positive calorie target
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pulse_core::models::WeeklyNutrition;
use serde::Serialize;

/// Lowest calorie adherence percentage that is on target (inclusive)
const ON_TARGET_MIN_PCT: i64 = 90;
/// Highest calorie adherence percentage that is on target (inclusive)
const ON_TARGET_MAX_PCT: i64 = 110;

/// Protein hit rate at or above which the tier is strong
const PROTEIN_STRONG_RATE: f64 = 80.0;
/// Protein hit rate at or above which the tier is fair
const PROTEIN_FAIR_RATE: f64 = 50.0;

/// Calorie intake relative to target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CalorieClass {
    /// 90% to 110% of target
    OnTarget,
    /// Below 90%
    UnderEating,
    /// Above 110%
    Over,
}

impl CalorieClass {
    /// Advice shown next to the percentage
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::OnTarget => "right on target.",
            Self::UnderEating => "you're under-eating. Fuel your training.",
            Self::Over => "slightly over target.",
        }
    }
}

/// Calorie adherence for a day or a week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalorieAdherence {
    /// Rounded share of the target eaten
    pub pct: i64,
    /// Classification of `pct`
    pub class: CalorieClass,
}

impl CalorieAdherence {
    /// Callout line, e.g. `Calorie adherence: 97%, right on target.`
    #[must_use]
    pub fn summary(&self) -> String {
        format!("Calorie adherence: {}%, {}", self.pct, self.class.message())
    }
}

/// Classify intake against a target
///
/// Returns `None` without computing a ratio when the target is not positive
/// or either input is not finite.
#[must_use]
pub fn calorie_adherence(actual_calories: f64, goal_calories: f64) -> Option<CalorieAdherence> {
    if !actual_calories.is_finite() || !goal_calories.is_finite() || goal_calories <= 0.0 {
        return None;
    }
    let pct = (actual_calories / goal_calories * 100.0).round() as i64;
    let class = if pct < ON_TARGET_MIN_PCT {
        CalorieClass::UnderEating
    } else if pct > ON_TARGET_MAX_PCT {
        CalorieClass::Over
    } else {
        CalorieClass::OnTarget
    };
    Some(CalorieAdherence { pct, class })
}

/// How often the protein target was hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProteinHitTier {
    /// 80% of days or more
    Strong,
    /// 50% to 79%
    Fair,
    /// Below 50%, or unknown
    Low,
}

/// Bucket the protein hit rate (0-100)
#[must_use]
pub fn protein_hit_tier(hit_rate: f64) -> ProteinHitTier {
    if hit_rate >= PROTEIN_STRONG_RATE {
        ProteinHitTier::Strong
    } else if hit_rate >= PROTEIN_FAIR_RATE {
        ProteinHitTier::Fair
    } else {
        ProteinHitTier::Low
    }
}

/// Progress bar fill in `0..=100`
///
/// A non-positive or non-finite `max` gives an empty bar.
#[must_use]
pub fn fill_pct(value: f64, max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    (value / max * 100.0).clamp(0.0, 100.0)
}

/// Derived view of the weekly nutrition block
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyNutritionSummary {
    /// Days with food logged this week
    pub days_tracked: u32,
    /// Adherence of the weekly average to the average target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adherence: Option<CalorieAdherence>,
    /// Average calories minus last week's, when last week was tracked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calorie_change_vs_last_week: Option<f64>,
    /// Training-day average minus rest-day average, when both exist
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_rest_delta_cal: Option<f64>,
}

/// Weekly nutrition trend, or a sentinel when nothing was tracked
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum NutritionTrend {
    /// No tracked days this week
    NotEnoughData,
    /// At least one tracked day
    Tracked(WeeklyNutritionSummary),
}

/// Summarize the weekly nutrition block
///
/// Comparisons are only produced for the parts that are present; an absent
/// `last_week` or missing day-type averages are never treated as zero.
#[must_use]
pub fn weekly_nutrition_trend(nutrition: &WeeklyNutrition) -> NutritionTrend {
    let this_week = &nutrition.this_week;
    if this_week.days_tracked == 0 {
        return NutritionTrend::NotEnoughData;
    }

    let calorie_change_vs_last_week = nutrition
        .last_week
        .as_ref()
        .filter(|last| last.days_tracked > 0)
        .map(|last| this_week.avg_calories - last.avg_calories);

    let training_rest_delta_cal = match (nutrition.training_day_avg_cal, nutrition.rest_day_avg_cal)
    {
        (Some(training), Some(rest)) => Some(training - rest),
        _ => None,
    };

    NutritionTrend::Tracked(WeeklyNutritionSummary {
        days_tracked: this_week.days_tracked,
        adherence: calorie_adherence(this_week.avg_calories, this_week.avg_goal_calories),
        calorie_change_vs_last_week,
        training_rest_delta_cal,
    })
}
