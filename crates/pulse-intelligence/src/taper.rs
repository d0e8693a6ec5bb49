// ABOUTME: Taper reduction classification against the on-track window
// ABOUTME: Marks peak and current weeks for the taper mileage chart
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pulse_core::models::TaperSummary;
use serde::Serialize;

/// Lowest reduction from peak mileage that counts as on track (inclusive)
pub const TAPER_ON_TRACK_MIN: f64 = 20.0;
/// Highest reduction from peak mileage that counts as on track (inclusive)
pub const TAPER_ON_TRACK_MAX: f64 = 50.0;

/// Whether the taper reduction sits inside the on-track window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaperStatus {
    /// Reduction within `TAPER_ON_TRACK_MIN..=TAPER_ON_TRACK_MAX`
    OnTrack,
    /// Too little or too much reduction
    OffTrack,
}

impl TaperStatus {
    /// Convenience predicate
    #[must_use]
    pub const fn is_on_track(self) -> bool {
        matches!(self, Self::OnTrack)
    }
}

/// Classify a reduction percentage computed by the backend
///
/// Non-finite values are off track.
#[must_use]
pub fn classify_taper(reduction_pct: f64) -> TaperStatus {
    if (TAPER_ON_TRACK_MIN..=TAPER_ON_TRACK_MAX).contains(&reduction_pct) {
        TaperStatus::OnTrack
    } else {
        TaperStatus::OffTrack
    }
}

/// A week on the taper chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaperWeekMark {
    /// Monday of the week
    pub week_start: String,
    /// Mileage rounded to one decimal
    pub miles: f64,
    /// Runs logged
    pub runs: u32,
    /// Week matching the peak mileage
    pub is_peak: bool,
    /// Latest week in the series
    pub is_current: bool,
}

/// Annotate the weekly mileage series with peak and current flags
#[must_use]
pub fn mark_taper_weeks(taper: &TaperSummary) -> Vec<TaperWeekMark> {
    let last_index = taper.weekly_mileage.len().saturating_sub(1);
    taper
        .weekly_mileage
        .iter()
        .enumerate()
        .map(|(index, week)| TaperWeekMark {
            week_start: week.week_start.clone(),
            miles: (week.miles * 10.0).round() / 10.0,
            runs: week.runs,
            is_peak: (week.miles - taper.peak_mileage).abs() < f64::EPSILON,
            is_current: index == last_index,
        })
        .collect()
}
