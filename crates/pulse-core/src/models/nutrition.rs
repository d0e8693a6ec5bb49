// ABOUTME: Nutrition tab payload with macro targets, calorie trend, and frequent foods
// ABOUTME: Served by /api/nutrition/detail
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Today's intake against every macro target
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyMacroTargets {
    /// Calories eaten
    pub calories: f64,
    /// Calorie target
    pub goal_calories: f64,
    /// Protein eaten (grams)
    pub protein_g: f64,
    /// Protein target (grams)
    pub goal_protein_g: f64,
    /// Carbohydrates eaten (grams)
    pub carbs_g: f64,
    /// Carbohydrate target (grams)
    pub goal_carbs_g: f64,
    /// Fat eaten (grams)
    pub fat_g: f64,
    /// Fat target (grams)
    pub goal_fat_g: f64,
}

/// Seven-day rolling averages
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionWeeklySummary {
    /// Days with food logged
    pub days_tracked: u32,
    /// Average calories
    pub avg_calories: f64,
    /// Average protein (grams)
    pub avg_protein_g: f64,
    /// Average carbohydrates (grams)
    pub avg_carbs_g: f64,
    /// Average fat (grams)
    pub avg_fat_g: f64,
}

/// Nutrition headline block
///
/// `today` is absent when nothing has been logged today yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionOverview {
    /// Today's intake
    #[serde(skip_serializing_if = "Option::is_none")]
    pub today: Option<DailyMacroTargets>,
    /// Rolling weekly averages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly_summary: Option<NutritionWeeklySummary>,
    /// Share of tracked days that hit the protein target, 0-100
    #[serde(default)]
    pub protein_hit_rate: f64,
    /// Tracked days in the current month
    #[serde(default)]
    pub days_tracked_this_month: u32,
}

/// One day of the calorie chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyNutritionTrend {
    /// ISO date
    pub date: String,
    /// Calories eaten
    pub calories: f64,
    /// Calorie target
    pub goal_calories: f64,
    /// Protein eaten (grams)
    pub protein_g: f64,
    /// Carbohydrates eaten (grams)
    pub carbs_g: f64,
    /// Fat eaten (grams)
    pub fat_g: f64,
    /// Whether a session was logged that day
    pub is_training_day: bool,
}

/// Calorie share per macro, 0-100 each
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroSplit {
    /// Protein share
    pub protein_pct: f64,
    /// Carbohydrate share
    pub carbs_pct: f64,
    /// Fat share
    pub fat_pct: f64,
}

/// Average intake on training vs. rest days
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingDayAnalysis {
    /// Average calories on training days
    pub training_day_avg_cal: f64,
    /// Average calories on rest days
    pub rest_day_avg_cal: f64,
    /// Training days in the window
    pub training_days_count: u32,
    /// Rest days in the window
    pub rest_days_count: u32,
}

/// A food logged often
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequentFood {
    /// Food name as logged
    pub food_name: String,
    /// Times logged
    pub times_logged: u32,
    /// Average calories per entry
    pub avg_calories: f64,
    /// Average protein per entry
    pub avg_protein_g: f64,
    /// Average carbohydrates per entry
    pub avg_carbs_g: f64,
    /// Average fat per entry
    pub avg_fat_g: f64,
}

/// One week of nutrition averages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionWeeklyTrend {
    /// Monday of the week
    pub week_start: String,
    /// Days with food logged
    pub days_tracked: u32,
    /// Average calories
    pub avg_calories: f64,
    /// Average calorie target
    pub avg_goal_calories: f64,
    /// Average protein (grams)
    pub avg_protein_g: f64,
    /// Average carbohydrates (grams)
    pub avg_carbs_g: f64,
    /// Average fat (grams)
    pub avg_fat_g: f64,
}

/// Nutrition tab detail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionDetailData {
    /// Headline block
    pub overview: NutritionOverview,
    /// Daily calorie series
    #[serde(default)]
    pub calorie_trend: Vec<DailyNutritionTrend>,
    /// Macro split, absent without tracked calories
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macro_split: Option<MacroSplit>,
    /// Training vs. rest day comparison, absent until both kinds are logged
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_day_analysis: Option<TrainingDayAnalysis>,
    /// Most logged foods
    #[serde(default)]
    pub frequent_foods: Vec<FrequentFood>,
    /// Weekly averages series
    #[serde(default)]
    pub weekly_trend: Vec<NutritionWeeklyTrend>,
}
