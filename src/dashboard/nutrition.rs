// ABOUTME: Nutrition tab view model from the nutrition detail payload
// ABOUTME: Today's macro bars, protein hit tier, and per-day calorie adherence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pulse_core::errors::UpstreamResult;
use pulse_core::models::{DailyMacroTargets, NutritionDetailData};
use pulse_intelligence::{
    calorie_adherence, fill_pct, protein_hit_tier, CalorieAdherence, ProteinHitTier,
};
use pulse_providers::ResourceClient;
use serde::Serialize;

/// Fill of each macro bar for today
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroFill {
    /// Calories against goal, 0-100
    pub calories_pct: f64,
    /// Protein against goal, 0-100
    pub protein_pct: f64,
    /// Carbs against goal, 0-100
    pub carbs_pct: f64,
    /// Fat against goal, 0-100
    pub fat_pct: f64,
}

impl MacroFill {
    fn from_targets(today: &DailyMacroTargets) -> Self {
        Self {
            calories_pct: fill_pct(today.calories, today.goal_calories),
            protein_pct: fill_pct(today.protein_g, today.goal_protein_g),
            carbs_pct: fill_pct(today.carbs_g, today.goal_carbs_g),
            fat_pct: fill_pct(today.fat_g, today.goal_fat_g),
        }
    }
}

/// Calorie adherence of one day on the trend chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayAdherence {
    /// ISO date
    pub date: String,
    /// `None` when the day has no calorie goal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adherence: Option<CalorieAdherence>,
}

/// Nutrition tab
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutritionView {
    /// Protein hit tier for the month
    pub protein_tier: ProteinHitTier,
    /// Today's calorie adherence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub today_adherence: Option<CalorieAdherence>,
    /// Today's macro bar fills
    #[serde(skip_serializing_if = "Option::is_none")]
    pub today_fill: Option<MacroFill>,
    /// Adherence per day of the calorie trend
    pub daily_adherence: Vec<DayAdherence>,
    /// Nutrition detail payload
    pub data: NutritionDetailData,
}

impl NutritionView {
    /// Derive the view from the remote payload
    #[must_use]
    pub fn from_data(data: NutritionDetailData) -> Self {
        let today = data.overview.today.as_ref();
        let daily_adherence = data
            .calorie_trend
            .iter()
            .map(|day| DayAdherence {
                date: day.date.clone(),
                adherence: calorie_adherence(day.calories, day.goal_calories),
            })
            .collect();

        Self {
            protein_tier: protein_hit_tier(data.overview.protein_hit_rate),
            today_adherence: today
                .and_then(|today| calorie_adherence(today.calories, today.goal_calories)),
            today_fill: today.map(MacroFill::from_targets),
            daily_adherence,
            data,
        }
    }
}

/// Fetch and derive the nutrition tab
///
/// # Errors
///
/// Propagates the fetch error.
pub async fn load(resources: &ResourceClient) -> UpstreamResult<NutritionView> {
    resources
        .nutrition_detail()
        .await
        .map(NutritionView::from_data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_core::models::{DailyNutritionTrend, NutritionOverview};
    use pulse_intelligence::CalorieClass;

    fn detail(today: Option<DailyMacroTargets>, hit_rate: f64) -> NutritionDetailData {
        NutritionDetailData {
            overview: NutritionOverview {
                today,
                weekly_summary: None,
                protein_hit_rate: hit_rate,
                days_tracked_this_month: 12,
            },
            calorie_trend: vec![DailyNutritionTrend {
                date: "2026-01-19".to_owned(),
                calories: 1800.0,
                goal_calories: 2500.0,
                protein_g: 150.0,
                carbs_g: 200.0,
                fat_g: 60.0,
                is_training_day: true,
            }],
            macro_split: None,
            training_day_analysis: None,
            frequent_foods: Vec::new(),
            weekly_trend: Vec::new(),
        }
    }

    #[test]
    fn test_without_today_log() {
        let view = NutritionView::from_data(detail(None, 85.0));
        assert_eq!(view.protein_tier, ProteinHitTier::Strong);
        assert!(view.today_adherence.is_none());
        assert!(view.today_fill.is_none());
        assert_eq!(
            view.daily_adherence[0].adherence.map(|a| a.class),
            Some(CalorieClass::UnderEating)
        );
    }

    #[test]
    fn test_today_fill_with_zero_targets() {
        let today = DailyMacroTargets {
            calories: 1200.0,
            goal_calories: 2400.0,
            protein_g: 90.0,
            goal_protein_g: 180.0,
            carbs_g: 100.0,
            goal_carbs_g: 0.0,
            ..DailyMacroTargets::default()
        };
        let view = NutritionView::from_data(detail(Some(today), 40.0));
        let fill = view.today_fill.unwrap();
        assert!((fill.calories_pct - 50.0).abs() < f64::EPSILON);
        assert!((fill.protein_pct - 50.0).abs() < f64::EPSILON);
        assert!(fill.carbs_pct.abs() < f64::EPSILON);
        assert_eq!(view.protein_tier, ProteinHitTier::Low);
        assert_eq!(view.today_adherence.unwrap().pct, 50);
    }
}
