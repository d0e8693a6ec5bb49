// ABOUTME: Session adherence tiers, per-day completion status, and running plan compliance
// ABOUTME: Weekly compliance groups calendar days by their Monday
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};
use pulse_core::models::{AdherenceDay, PlanComplianceDay};
use serde::Serialize;
use tracing::debug;

/// Days of plan history shown in the compliance summary
pub const COMPLIANCE_WINDOW_DAYS: usize = 28;

/// Weekly session adherence bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdherenceTier {
    /// 90% and above
    Excellent,
    /// 70% to under 90%
    Solid,
    /// 50% to under 70%
    Mixed,
    /// Below 50%
    BelowPlan,
}

impl AdherenceTier {
    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Solid => "On track",
            Self::Mixed => "Mixed",
            Self::BelowPlan => "Below plan",
        }
    }
}

/// Bucket an adherence percentage; each tier includes its lower bound
#[must_use]
pub fn adherence_tier(percentage: f64) -> AdherenceTier {
    if percentage >= 90.0 {
        AdherenceTier::Excellent
    } else if percentage >= 70.0 {
        AdherenceTier::Solid
    } else if percentage >= 50.0 {
        AdherenceTier::Mixed
    } else {
        AdherenceTier::BelowPlan
    }
}

/// Outcome of one planned day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    /// A planned session was done
    Completed,
    /// Something was planned and nothing planned was done
    Missed,
    /// Nothing planned
    Rest,
}

fn is_planned(session: Option<&str>) -> bool {
    session.is_some_and(|name| !name.is_empty())
}

/// Status dot for a day of the week-at-a-glance strip
#[must_use]
pub fn day_status(day: &AdherenceDay) -> DayStatus {
    let gym_planned = is_planned(day.planned_gym.as_deref());
    let run_planned = is_planned(day.planned_run.as_deref());
    let completed = (gym_planned && day.completed_gym == Some(true))
        || (run_planned && day.completed_run == Some(true));

    if completed {
        DayStatus::Completed
    } else if gym_planned || run_planned {
        DayStatus::Missed
    } else {
        DayStatus::Rest
    }
}

/// Completion percentage of planned mileage, capped at 100
///
/// Without planned miles any actual running counts as complete.
#[must_use]
pub fn plan_compliance_pct(planned_miles: f64, actual_miles: f64) -> u8 {
    let actual = if actual_miles.is_finite() { actual_miles } else { 0.0 };
    if planned_miles.is_finite() && planned_miles > 0.0 {
        (actual / planned_miles * 100.0).round().clamp(0.0, 100.0) as u8
    } else if actual > 0.0 {
        100
    } else {
        0
    }
}

/// Compliance across the trailing window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComplianceSummary {
    /// Days marked completed
    pub completed: u32,
    /// Days with a planned run
    pub planned: u32,
    /// `completed / planned` as a whole percentage, 0 without planned days
    pub rate_pct: u32,
}

fn trailing_window(days: &[PlanComplianceDay]) -> &[PlanComplianceDay] {
    &days[days.len().saturating_sub(COMPLIANCE_WINDOW_DAYS)..]
}

/// Completed vs. planned days over the last 28 entries
#[must_use]
pub fn compliance_summary(days: &[PlanComplianceDay]) -> ComplianceSummary {
    let window = trailing_window(days);
    let completed = window.iter().filter(|day| day.completed).count() as u32;
    let planned = window
        .iter()
        .filter(|day| is_planned(day.planned_summary.as_deref()))
        .count() as u32;
    let rate_pct = if planned > 0 {
        (f64::from(completed) / f64::from(planned) * 100.0).round() as u32
    } else {
        0
    };
    ComplianceSummary {
        completed,
        planned,
        rate_pct,
    }
}

/// Planned vs. actual mileage for one week
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekCompliance {
    /// Monday of the week
    pub week_start: NaiveDate,
    /// Planned miles, rounded to one decimal
    pub planned_miles: f64,
    /// Actual miles, rounded to one decimal
    pub actual_miles: f64,
    /// Actual minus planned, rounded to one decimal
    pub diff_miles: f64,
    /// Completion percentage
    pub pct: u8,
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn monday_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Group the trailing window by week, oldest first
///
/// Entries whose date is not an ISO `YYYY-MM-DD` are skipped.
#[must_use]
pub fn weekly_compliance(days: &[PlanComplianceDay]) -> Vec<WeekCompliance> {
    let mut weeks: BTreeMap<NaiveDate, (f64, f64)> = BTreeMap::new();

    for day in trailing_window(days) {
        let Ok(date) = NaiveDate::parse_from_str(&day.date, "%Y-%m-%d") else {
            debug!(date = %day.date, "Skipping plan compliance day with unparseable date");
            continue;
        };
        let entry = weeks.entry(monday_of(date)).or_insert((0.0, 0.0));
        entry.0 += day.planned_miles.unwrap_or(0.0);
        entry.1 += day.actual_miles.unwrap_or(0.0);
    }

    weeks
        .into_iter()
        .map(|(week_start, (planned, actual))| {
            let planned_miles = round_tenth(planned);
            let actual_miles = round_tenth(actual);
            WeekCompliance {
                week_start,
                planned_miles,
                actual_miles,
                diff_miles: round_tenth(actual_miles - planned_miles),
                pct: plan_compliance_pct(planned_miles, actual_miles),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_lower_bounds_are_inclusive() {
        assert_eq!(adherence_tier(100.0), AdherenceTier::Excellent);
        assert_eq!(adherence_tier(90.0), AdherenceTier::Excellent);
        assert_eq!(adherence_tier(89.9), AdherenceTier::Solid);
        assert_eq!(adherence_tier(70.0), AdherenceTier::Solid);
        assert_eq!(adherence_tier(69.9), AdherenceTier::Mixed);
        assert_eq!(adherence_tier(50.0), AdherenceTier::Mixed);
        assert_eq!(adherence_tier(49.9), AdherenceTier::BelowPlan);
        assert_eq!(adherence_tier(0.0), AdherenceTier::BelowPlan);
        assert_eq!(adherence_tier(f64::NAN), AdherenceTier::BelowPlan);
    }

    #[test]
    fn test_day_status() {
        let rest = AdherenceDay {
            day: "Sunday".to_owned(),
            ..AdherenceDay::default()
        };
        assert_eq!(day_status(&rest), DayStatus::Rest);

        let missed = AdherenceDay {
            day: "Monday".to_owned(),
            planned_gym: Some("Push".to_owned()),
            completed_gym: Some(false),
            ..AdherenceDay::default()
        };
        assert_eq!(day_status(&missed), DayStatus::Missed);

        let half_done = AdherenceDay {
            day: "Tuesday".to_owned(),
            planned_gym: Some("Pull".to_owned()),
            planned_run: Some("Easy 5".to_owned()),
            completed_gym: Some(false),
            completed_run: Some(true),
        };
        assert_eq!(day_status(&half_done), DayStatus::Completed);

        let empty_plan = AdherenceDay {
            day: "Wednesday".to_owned(),
            planned_run: Some(String::new()),
            completed_run: Some(true),
            ..AdherenceDay::default()
        };
        assert_eq!(day_status(&empty_plan), DayStatus::Rest);
    }

    #[test]
    fn test_plan_compliance_pct() {
        assert_eq!(plan_compliance_pct(20.0, 15.0), 75);
        assert_eq!(plan_compliance_pct(20.0, 30.0), 100);
        assert_eq!(plan_compliance_pct(0.0, 3.0), 100);
        assert_eq!(plan_compliance_pct(0.0, 0.0), 0);
        assert_eq!(plan_compliance_pct(f64::NAN, f64::NAN), 0);
    }

    fn compliance_day(date: &str, planned: Option<f64>, actual: Option<f64>) -> PlanComplianceDay {
        PlanComplianceDay {
            date: date.to_owned(),
            planned_summary: planned.map(|miles| format!("Run {miles} mi")),
            planned_miles: planned,
            completed: actual.is_some(),
            actual_miles: actual,
        }
    }

    #[test]
    fn test_compliance_summary() {
        let days = vec![
            compliance_day("2026-01-12", Some(5.0), Some(5.2)),
            compliance_day("2026-01-13", Some(4.0), None),
            compliance_day("2026-01-14", None, None),
            compliance_day("2026-01-15", Some(6.0), Some(6.0)),
        ];
        let summary = compliance_summary(&days);
        assert_eq!(summary.planned, 3);
        assert_eq!(summary.completed, 2);
        assert_eq!(summary.rate_pct, 67);

        assert_eq!(compliance_summary(&[]).rate_pct, 0);
    }

    #[test]
    fn test_compliance_summary_uses_trailing_window() {
        let days: Vec<_> = (0..40)
            .map(|offset| {
                let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap() + Duration::days(offset);
                let actual = if offset < 12 { None } else { Some(3.0) };
                compliance_day(&date.format("%Y-%m-%d").to_string(), Some(3.0), actual)
            })
            .collect();
        let summary = compliance_summary(&days);
        assert_eq!(summary.planned, 28);
        assert_eq!(summary.completed, 28);
        assert_eq!(summary.rate_pct, 100);
    }

    #[test]
    fn test_weekly_compliance_groups_by_monday() {
        let days = vec![
            // Sunday belongs to the week starting the previous Monday
            compliance_day("2026-01-18", Some(10.0), Some(9.0)),
            compliance_day("2026-01-19", Some(4.0), Some(4.0)),
            compliance_day("2026-01-21", Some(6.0), None),
            compliance_day("not-a-date", Some(99.0), Some(99.0)),
        ];
        let weeks = weekly_compliance(&days);
        assert_eq!(weeks.len(), 2);

        assert_eq!(weeks[0].week_start, NaiveDate::from_ymd_opt(2026, 1, 12).unwrap());
        assert_eq!(weeks[0].pct, 90);

        assert_eq!(weeks[1].week_start, NaiveDate::from_ymd_opt(2026, 1, 19).unwrap());
        assert!((weeks[1].planned_miles - 10.0).abs() < f64::EPSILON);
        assert!((weeks[1].diff_miles + 6.0).abs() < f64::EPSILON);
        assert_eq!(weeks[1].pct, 40);
    }
}
