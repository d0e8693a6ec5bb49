// ABOUTME: Lifting goal table, exercise matching, and weighted goal progress scoring
// ABOUTME: Weight counts for 70% of progress and reps for 30%, each capped at its own target
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pulse_core::models::KeyExercise;
use serde::Serialize;
use tracing::debug;

/// Share of progress contributed by the weight dimension
const WEIGHT_SHARE: f64 = 0.7;
/// Share of progress contributed by the reps dimension
const REPS_SHARE: f64 = 0.3;

/// A strength target tracked on the lifting page
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LiftingGoal {
    /// Lowercase substrings identifying the exercise
    pub patterns: &'static [&'static str],
    /// Target load in pounds
    pub goal_weight_lbs: f64,
    /// Target repetitions at that load
    pub goal_reps: u32,
    /// Display label
    pub label: &'static str,
    /// Alternative way to meet the goal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_label: Option<&'static str>,
}

impl LiftingGoal {
    fn matches_lowercase(&self, lower_name: &str) -> bool {
        self.patterns
            .iter()
            .any(|pattern| lower_name.contains(pattern))
    }

    /// Whether an exercise name refers to this goal (case-insensitive)
    #[must_use]
    pub fn matches(&self, exercise_name: &str) -> bool {
        self.matches_lowercase(&exercise_name.to_lowercase())
    }
}

/// Goals shown on the lifting page, in display order
pub static LIFTING_GOALS: [LiftingGoal; 4] = [
    LiftingGoal {
        patterns: &["bench press"],
        goal_weight_lbs: 225.0,
        goal_reps: 5,
        label: "Bench 225×5",
        alt_label: None,
    },
    LiftingGoal {
        patterns: &["squat", "back squat"],
        goal_weight_lbs: 225.0,
        goal_reps: 10,
        label: "Squat 225×10",
        alt_label: None,
    },
    LiftingGoal {
        patterns: &["deadlift"],
        goal_weight_lbs: 315.0,
        goal_reps: 5,
        label: "Deadlift 315×5",
        alt_label: None,
    },
    LiftingGoal {
        patterns: &["pull up", "pullup", "pull-up"],
        goal_weight_lbs: 45.0,
        goal_reps: 5,
        label: "Pullups +45lb ×5",
        alt_label: Some("or 25 BW pullups"),
    },
];

/// First goal whose pattern appears in the exercise name, ignoring case
#[must_use]
pub fn match_goal(exercise_name: &str) -> Option<&'static LiftingGoal> {
    let lower = exercise_name.to_lowercase();
    LIFTING_GOALS
        .iter()
        .find(|goal| goal.matches_lowercase(&lower))
}

/// Ratio of `current` to `target`, capped at 1
///
/// Non-finite or negative `current` counts as zero; a target that is not a
/// positive finite number contributes nothing.
fn capped_ratio(current: f64, target: f64) -> f64 {
    if !target.is_finite() || target <= 0.0 {
        return 0.0;
    }
    let current = if current.is_finite() && current > 0.0 {
        current
    } else {
        0.0
    };
    (current / target).min(1.0)
}

/// Weighted progress toward a goal, as a whole percentage in `0..=100`
///
/// Exceeding the target on one dimension never compensates for the other.
#[must_use]
pub fn goal_progress(current_weight_lbs: f64, current_reps: f64, goal: &LiftingGoal) -> u8 {
    let weighted = capped_ratio(current_weight_lbs, goal.goal_weight_lbs)
        .mul_add(
            WEIGHT_SHARE,
            REPS_SHARE * capped_ratio(current_reps, f64::from(goal.goal_reps)),
        );
    (weighted * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Progress tier used to color a goal card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalTier {
    /// 90% and above
    CrushingIt,
    /// 70% to 89%
    Close,
    /// 50% to 69%
    Halfway,
    /// 30% to 49%
    Building,
    /// Below 30%
    JustStarted,
}

impl GoalTier {
    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CrushingIt => "Crushing it",
            Self::Close => "Close",
            Self::Halfway => "Halfway",
            Self::Building => "Building",
            Self::JustStarted => "Just started",
        }
    }
}

/// Bucket a progress percentage into a tier
#[must_use]
pub const fn goal_tier(progress_pct: u8) -> GoalTier {
    match progress_pct {
        90.. => GoalTier::CrushingIt,
        70..=89 => GoalTier::Close,
        50..=69 => GoalTier::Halfway,
        30..=49 => GoalTier::Building,
        _ => GoalTier::JustStarted,
    }
}

/// Progress card for one goal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalStatus {
    /// Goal being tracked
    pub goal: LiftingGoal,
    /// Key exercise the progress was measured from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_exercise: Option<String>,
    /// Current working weight, absent without a matching exercise
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_weight_lbs: Option<f64>,
    /// Reps credited toward the goal
    pub current_reps: u32,
    /// Weighted progress
    pub progress_pct: u8,
    /// Display tier
    pub tier: GoalTier,
}

/// Reps credited from an exercise: the latest week's set count, capped at the goal
fn credited_reps(exercise: &KeyExercise, goal: &LiftingGoal) -> u32 {
    exercise
        .trend
        .last()
        .map(|point| point.total_sets)
        .filter(|sets| sets.is_finite() && *sets > 0.0)
        .map_or(0, |sets| (sets as u32).min(goal.goal_reps))
}

/// One status per goal, measured from the first key exercise that matches it
///
/// A goal without a matching exercise reports 0% progress.
#[must_use]
pub fn goal_board(key_exercises: &[KeyExercise]) -> Vec<GoalStatus> {
    LIFTING_GOALS
        .iter()
        .map(|goal| {
            let Some(exercise) = key_exercises.iter().find(|ex| goal.matches(&ex.name)) else {
                debug!(goal = goal.label, "No key exercise matches lifting goal");
                return GoalStatus {
                    goal: *goal,
                    matched_exercise: None,
                    current_weight_lbs: None,
                    current_reps: 0,
                    progress_pct: 0,
                    tier: GoalTier::JustStarted,
                };
            };

            let weight = exercise.current_weight_lbs.unwrap_or(0.0);
            let reps = credited_reps(exercise, goal);
            let progress_pct = goal_progress(weight, f64::from(reps), goal);
            GoalStatus {
                goal: *goal,
                matched_exercise: Some(exercise.name.clone()),
                current_weight_lbs: Some(weight),
                current_reps: reps,
                progress_pct,
                tier: goal_tier(progress_pct),
            }
        })
        .collect()
}
