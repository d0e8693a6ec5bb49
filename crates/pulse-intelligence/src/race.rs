// ABOUTME: Race countdown, phase breakpoints, readiness labels, and pace prediction labels
// ABOUTME: Days to race round up partial days and never go negative
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Last day count that is still race week
const RACE_WEEK_MAX_DAYS: u32 = 7;
/// Last day count that is still taper
const TAPER_MAX_DAYS: u32 = 21;
/// Highest taper week ordinal
const MAX_TAPER_WEEK: u32 = 3;

/// Whole days until `target`, rounding partial days up and clamping at 0
#[must_use]
pub fn days_to_race(target: DateTime<Utc>, now: DateTime<Utc>) -> u32 {
    let remaining_ms = (target - now).num_milliseconds();
    if remaining_ms <= 0 {
        return 0;
    }
    let days = remaining_ms / MILLIS_PER_DAY + i64::from(remaining_ms % MILLIS_PER_DAY != 0);
    u32::try_from(days).unwrap_or(u32::MAX)
}

/// Days until a race date given as an RFC 3339 timestamp or as an ISO
/// `YYYY-MM-DD` date, the latter taken as midnight UTC
///
/// Returns `None` when the date does not parse.
#[must_use]
pub fn days_to_race_date(race_date: &str, now: DateTime<Utc>) -> Option<u32> {
    let race_date = race_date.trim();
    if let Ok(start) = DateTime::parse_from_rfc3339(race_date) {
        return Some(days_to_race(start.with_timezone(&Utc), now));
    }
    let date = NaiveDate::parse_from_str(race_date, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?.and_utc();
    Some(days_to_race(midnight, now))
}

/// Where the athlete is in the race build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum RacePhase {
    /// Zero days left
    RaceDay,
    /// One to seven days left
    RaceWeek,
    /// Eight to twenty-one days left
    Taper {
        /// Taper week ordinal, 1 to 3
        week: u32,
    },
    /// More than three weeks out
    Training,
}

impl RacePhase {
    /// Display label
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::RaceDay => "Race Day!".to_owned(),
            Self::RaceWeek => "Race Week".to_owned(),
            Self::Taper { week } => format!("Taper Week {week}"),
            Self::Training => "Training".to_owned(),
        }
    }
}

/// Phase for a day count
#[must_use]
pub fn race_phase(days: u32) -> RacePhase {
    match days {
        0 => RacePhase::RaceDay,
        1..=RACE_WEEK_MAX_DAYS => RacePhase::RaceWeek,
        8..=TAPER_MAX_DAYS => {
            let remaining = TAPER_MAX_DAYS + 1 - days;
            RacePhase::Taper {
                week: remaining.div_ceil(7).clamp(1, MAX_TAPER_WEEK),
            }
        }
        _ => RacePhase::Training,
    }
}

/// Countdown footer line
#[must_use]
pub const fn race_message(days: u32) -> &'static str {
    match days {
        0..=3 => "Almost there. Trust your training. You are ready.",
        4..=7 => "Race week. Stay sharp, stay calm, stay fueled.",
        8..=14 => "Taper time. The hay is in the barn. Rest and recover.",
        15..=21 => "Final build. Every session counts. Stay consistent.",
        _ => "The work you put in now pays off on race day.",
    }
}

/// Label for the overall readiness score
#[must_use]
pub fn readiness_label(score: f64) -> &'static str {
    if score >= 90.0 {
        "Excellent"
    } else if score >= 80.0 {
        "On Track"
    } else if score >= 70.0 {
        "Good"
    } else if score >= 60.0 {
        "Fair"
    } else {
        "Needs Work"
    }
}

/// Color band for readiness scores and factor bars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessBand {
    /// 80 and above
    Strong,
    /// 60 to under 80
    Moderate,
    /// Below 60
    Weak,
}

/// Band for a readiness score
#[must_use]
pub fn readiness_band(score: f64) -> ReadinessBand {
    if score >= 80.0 {
        ReadinessBand::Strong
    } else if score >= 60.0 {
        ReadinessBand::Moderate
    } else {
        ReadinessBand::Weak
    }
}

/// Display label for a pace prediction key
#[must_use]
pub fn pace_label(key: &str) -> String {
    match key {
        "5k" => "5K".to_owned(),
        "10k" => "10K".to_owned(),
        "half_marathon" => "Half Marathon".to_owned(),
        "long_runs" => "Long Runs".to_owned(),
        "recent_half" => "Recent Half".to_owned(),
        other => title_case_words(&other.replace('_', " ")),
    }
}

/// Uppercase the first letter of every word
fn title_case_words(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if at_word_start && ch.is_alphanumeric() {
            result.extend(ch.to_uppercase());
        } else {
            result.push(ch);
        }
        at_word_start = !ch.is_alphanumeric();
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_days_to_race_rounds_partial_days_up() {
        let race = at(2026, 4, 12, 0);
        assert_eq!(days_to_race(race, at(2026, 4, 11, 0)), 1);
        assert_eq!(days_to_race(race, at(2026, 4, 11, 1)), 1);
        assert_eq!(days_to_race(race, at(2026, 4, 10, 23)), 2);
        assert_eq!(days_to_race(race, race - Duration::milliseconds(1)), 1);
    }

    #[test]
    fn test_days_to_race_clamps_past_targets() {
        let race = at(2026, 4, 12, 0);
        assert_eq!(days_to_race(race, race), 0);
        assert_eq!(days_to_race(race, at(2026, 5, 1, 0)), 0);
    }

    #[test]
    fn test_days_to_race_date() {
        assert_eq!(days_to_race_date("2026-04-12", at(2026, 4, 1, 12)), Some(11));
        assert_eq!(days_to_race_date("April 12", at(2026, 4, 1, 12)), None);
    }

    #[test]
    fn test_days_to_race_date_accepts_timestamps() {
        let now = at(2026, 4, 20, 12);
        assert_eq!(days_to_race_date("2026-04-26T08:00:00Z", now), Some(6));
        assert_eq!(days_to_race_date("2026-04-26T07:00:00+02:00", now), Some(6));
        assert_eq!(days_to_race_date("2026-04-20T11:00:00Z", now), Some(0));
        assert_eq!(days_to_race_date("2026-04-26T08:00:00", now), None);
    }

    #[test]
    fn test_phase_boundaries() {
        assert_eq!(race_phase(0), RacePhase::RaceDay);
        assert_eq!(race_phase(0).label(), "Race Day!");
        assert_eq!(race_phase(1), RacePhase::RaceWeek);
        assert_eq!(race_phase(7).label(), "Race Week");
        assert_eq!(race_phase(8), RacePhase::Taper { week: 2 });
        assert_eq!(race_phase(15), RacePhase::Taper { week: 1 });
        assert_eq!(race_phase(21), RacePhase::Taper { week: 1 });
        assert_eq!(race_phase(21).label(), "Taper Week 1");
        assert_eq!(race_phase(22), RacePhase::Training);
        assert_eq!(race_phase(22).label(), "Training");
    }

    #[test]
    fn test_taper_week_ordinal_stays_in_range() {
        for days in 8..=21 {
            let RacePhase::Taper { week } = race_phase(days) else {
                panic!("{days} days should be taper");
            };
            assert!((1..=3).contains(&week));
        }
    }

    #[test]
    fn test_race_messages() {
        assert!(race_message(0).starts_with("Almost there"));
        assert!(race_message(7).starts_with("Race week"));
        assert!(race_message(14).starts_with("Taper time"));
        assert!(race_message(21).starts_with("Final build"));
        assert!(race_message(60).starts_with("The work you put in"));
    }

    #[test]
    fn test_readiness_labels_and_bands() {
        assert_eq!(readiness_label(95.0), "Excellent");
        assert_eq!(readiness_label(80.0), "On Track");
        assert_eq!(readiness_label(72.0), "Good");
        assert_eq!(readiness_label(60.0), "Fair");
        assert_eq!(readiness_label(12.0), "Needs Work");
        assert_eq!(readiness_band(80.0), ReadinessBand::Strong);
        assert_eq!(readiness_band(79.0), ReadinessBand::Moderate);
        assert_eq!(readiness_band(f64::NAN), ReadinessBand::Weak);
    }

    #[test]
    fn test_pace_labels() {
        assert_eq!(pace_label("5k"), "5K");
        assert_eq!(pace_label("half_marathon"), "Half Marathon");
        assert_eq!(pace_label("tempo_runs"), "Tempo Runs");
        assert_eq!(pace_label("marathon"), "Marathon");
    }
}
