// ABOUTME: Derived metrics engine for the Pulse fitness dashboard
// ABOUTME: Goal progress, taper status, calorie adherence, plan compliance, and race countdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pulse Intelligence
//!
//! Every function here is pure and total: the same input always produces
//! the same output, and zero, negative, missing, or non-finite inputs map to
//! a defined fallback instead of panicking or producing `NaN`.
//!
//! ## Modules
//!
//! - **goals**: lifting goal table and weighted progress
//! - **taper**: taper reduction classification and chart marks
//! - **nutrition**: calorie adherence, protein tiers, weekly nutrition trend
//! - **adherence**: session adherence tiers and running plan compliance
//! - **race**: days to race, race phase, readiness labels

/// Session adherence tiers and plan compliance
pub mod adherence;

/// Lifting goals and progress scoring
pub mod goals;

/// Calorie and macro adherence
pub mod nutrition;

/// Race countdown, phases, and readiness labels
pub mod race;

/// Taper tracking
pub mod taper;

pub use adherence::{
    adherence_tier, compliance_summary, day_status, plan_compliance_pct, weekly_compliance,
    AdherenceTier, ComplianceSummary, DayStatus, WeekCompliance,
};
pub use goals::{
    goal_board, goal_progress, goal_tier, match_goal, GoalStatus, GoalTier, LiftingGoal,
    LIFTING_GOALS,
};
pub use nutrition::{
    calorie_adherence, fill_pct, protein_hit_tier, weekly_nutrition_trend, CalorieAdherence,
    CalorieClass, NutritionTrend, ProteinHitTier, WeeklyNutritionSummary,
};
pub use race::{
    days_to_race, days_to_race_date, pace_label, race_message, race_phase, readiness_band,
    readiness_label, RacePhase, ReadinessBand,
};
pub use taper::{
    classify_taper, mark_taper_weeks, TaperStatus, TaperWeekMark, TAPER_ON_TRACK_MAX,
    TAPER_ON_TRACK_MIN,
};
