// ABOUTME: Typed payloads returned by the remote fitness analytics API
// ABOUTME: Re-exports daily, weekly, trend, running, lifting, nutrition, race, and injury types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Resource Models
//!
//! One struct per JSON resource the analytics API serves, plus the fragments
//! they share. Decoding a response into these types is the schema check:
//! a payload that does not fit is rejected at the fetch boundary.
//!
//! ## Conventions
//!
//! - Fields the backend leaves out when it lacks history are `Option<T>`.
//!   `None` means "not enough data", never zero.
//! - Collections default to empty when missing.
//! - Unknown fields are ignored so backend additions do not break decoding.
//! - Dates stay ISO strings; the dashboard never reinterprets them.

mod common;
mod daily;
mod injury;
mod lifting;
mod nutrition;
mod race;
mod running;
mod trends;
mod weekly;

// Shared fragments
pub use common::{ExerciseSet, OverloadAction, OverloadSuggestion, RecentSession};

// Daily brief
pub use daily::{
    DailyData, DailyLifting, DailyRunning, ExerciseData, NutritionData, RecentRun, RunPlan,
    WorkoutType,
};

// Weekly summary
pub use weekly::{
    Adherence, AdherenceDay, KeyLift, LiftTrend, LiftingStats, NextWeekDay, NutritionAverages,
    RunningStats, WeeklyData, WeeklyLifting, WeeklyNutrition, WeeklyRunning,
};

// Chart series
pub use trends::{LiftingTrendPoint, RunningTrendPoint};

// Running tab
pub use running::{
    BestEffort, PersonalRecord, PlanComplianceDay, RunActivity, RunSplit, RunningDetailData,
    RunningOverview, RunningScheduleData, ScheduleEvent, UpcomingRun, WeeklyComparison,
};

// Lifting tab
pub use lifting::{
    KeyExercise, LiftingDetailData, LiftingOverview, LiftingProgressionExercise,
    LiftingRoutinesData, MuscleGroupData, RecentWorkout, Routine, RoutineExercise,
    WorkoutExercise,
};

// Nutrition tab
pub use nutrition::{
    DailyMacroTargets, DailyNutritionTrend, FrequentFood, MacroSplit, NutritionDetailData,
    NutritionOverview, NutritionWeeklySummary, NutritionWeeklyTrend, TrainingDayAnalysis,
};

// Race prep
pub use race::{
    PacePrediction, PacePredictions, RacePrepData, Readiness, ReadinessFactor, TaperSummary,
    TaperWeek, TrainingBlock, TrainingEvent,
};

// Injuries
pub use injury::{
    BodyPartHeatmap, InjuriesDetailData, Injury, InjuryForm, InjuryOverview, InjuryStatus,
    InjuryUpcomingRun, TodayRoutine, WorkoutModification,
};
