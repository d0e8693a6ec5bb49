// ABOUTME: Daily brief view model: today's plan plus yesterday's nutrition against targets
// ABOUTME: Adds calorie adherence, progress-bar fills, and the protein shortfall alert
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pulse_core::errors::UpstreamResult;
use pulse_core::models::{DailyData, NutritionData};
use pulse_intelligence::{calorie_adherence, fill_pct, CalorieAdherence};
use pulse_providers::ResourceClient;
use serde::Serialize;

/// Protein shortfall (grams) above which the brief shows an alert
pub const PROTEIN_ALERT_THRESHOLD_G: f64 = 20.0;

/// Yesterday's nutrition with derived bars and alerts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyNutritionView {
    /// Calorie adherence, absent without a calorie target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adherence: Option<CalorieAdherence>,
    /// Calorie bar fill, 0-100
    pub calorie_fill_pct: f64,
    /// Protein bar fill, 0-100
    pub protein_fill_pct: f64,
    /// Target minus actual calories
    pub calories_remaining: f64,
    /// Protein alert when the shortfall exceeds the threshold
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein_alert: Option<String>,
}

impl DailyNutritionView {
    fn from_data(nutrition: &NutritionData) -> Self {
        let protein_short = nutrition.goal_protein_g - nutrition.protein_g;
        let protein_alert = (protein_short > PROTEIN_ALERT_THRESHOLD_G).then(|| {
            format!(
                "You were {}g short on protein yesterday. Prioritize high-protein meals today.",
                protein_short.round()
            )
        });

        Self {
            adherence: calorie_adherence(nutrition.calories, nutrition.goal_calories),
            calorie_fill_pct: fill_pct(nutrition.calories, nutrition.goal_calories),
            protein_fill_pct: fill_pct(nutrition.protein_g, nutrition.goal_protein_g),
            calories_remaining: nutrition.goal_calories - nutrition.calories,
            protein_alert,
        }
    }
}

/// Daily brief page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyView {
    /// Greeting, or `<day> - <date>` when the greeting is blank
    pub header: String,
    /// Whether a session is planned today
    pub is_training_day: bool,
    /// Derived nutrition block
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrition_summary: Option<DailyNutritionView>,
    /// Remote payload
    pub data: DailyData,
}

impl DailyView {
    /// Derive the view from the remote payload
    #[must_use]
    pub fn from_data(data: DailyData) -> Self {
        let header = if data.greeting.trim().is_empty() {
            format!("{} - {}", data.day_name, data.display_date)
        } else {
            data.greeting.clone()
        };

        Self {
            header,
            is_training_day: data.workout_type.is_training_day(),
            nutrition_summary: data.nutrition.as_ref().map(DailyNutritionView::from_data),
            data,
        }
    }
}

/// Fetch and derive the daily brief for `date`, or today
///
/// # Errors
///
/// Propagates the fetch error.
pub async fn load(resources: &ResourceClient, date: Option<&str>) -> UpstreamResult<DailyView> {
    resources.daily(date).await.map(DailyView::from_data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_core::models::WorkoutType;
    use pulse_intelligence::CalorieClass;

    fn daily(greeting: &str, nutrition: Option<NutritionData>) -> DailyData {
        DailyData {
            date: "2026-01-20".to_owned(),
            day_name: "Tuesday".to_owned(),
            display_date: "Jan 20".to_owned(),
            workout_type: WorkoutType::Run,
            greeting: greeting.to_owned(),
            lifting: None,
            running: None,
            nutrition,
        }
    }

    fn nutrition(calories: f64, protein_g: f64) -> NutritionData {
        NutritionData {
            yesterday_date: "2026-01-19".to_owned(),
            calories,
            goal_calories: 2500.0,
            protein_g,
            goal_protein_g: 180.0,
            carbs_g: 250.0,
            fat_g: 70.0,
        }
    }

    #[test]
    fn test_header_falls_back_to_date() {
        assert_eq!(DailyView::from_data(daily("", None)).header, "Tuesday - Jan 20");
        assert_eq!(DailyView::from_data(daily("Easy run day", None)).header, "Easy run day");
    }

    #[test]
    fn test_protein_alert_threshold() {
        let view = DailyView::from_data(daily("", Some(nutrition(2400.0, 150.0))));
        let summary = view.nutrition_summary.unwrap();
        assert_eq!(
            summary.protein_alert.as_deref(),
            Some("You were 30g short on protein yesterday. Prioritize high-protein meals today.")
        );
        assert_eq!(summary.adherence.unwrap().class, CalorieClass::OnTarget);

        let view = DailyView::from_data(daily("", Some(nutrition(2400.0, 160.0))));
        assert!(view.nutrition_summary.unwrap().protein_alert.is_none());
    }

    #[test]
    fn test_fill_caps_at_full() {
        let view = DailyView::from_data(daily("", Some(nutrition(3000.0, 200.0))));
        let summary = view.nutrition_summary.unwrap();
        assert!((summary.calorie_fill_pct - 100.0).abs() < f64::EPSILON);
        assert!((summary.calories_remaining + 500.0).abs() < f64::EPSILON);
        assert!(view.is_training_day);
    }
}
