// ABOUTME: Race preparation view model with a live countdown, phase, readiness, and taper chart
// ABOUTME: The countdown is recomputed from the race date rather than trusted from the payload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use pulse_core::errors::UpstreamResult;
use pulse_core::models::{PacePrediction, RacePrepData};
use pulse_intelligence::{
    classify_taper, days_to_race_date, mark_taper_weeks, pace_label, race_message, race_phase,
    readiness_band, readiness_label, RacePhase, ReadinessBand, TaperStatus, TaperWeekMark,
};
use pulse_providers::ResourceClient;
use serde::Serialize;
use tracing::warn;

/// A readiness factor with its display band
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadinessFactorView {
    /// Dimension key, e.g. `consistency`
    pub key: String,
    /// Display name of the dimension
    pub label: String,
    /// Explanation from the payload
    pub detail: String,
    /// Score out of 100
    pub score: f64,
    /// Display band of `score`
    pub band: ReadinessBand,
}

/// A pace prediction row labelled for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PacePredictionRow {
    /// Basis key from the payload
    pub key: String,
    /// Display label of the basis
    pub label: String,
    /// Predicted time and pace
    #[serde(flatten)]
    pub prediction: PacePrediction,
}

/// Race prep tab
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RaceView {
    /// Days left, partial days rounded up
    pub days_to_race: u32,
    /// Build phase derived from the countdown
    pub phase: RacePhase,
    /// Display label of `phase`, e.g. `Taper Week 2`
    pub phase_label: String,
    /// Countdown footer line
    pub message: &'static str,
    /// Overall readiness label
    pub readiness_label: &'static str,
    /// Band of the overall readiness score
    pub readiness_band: ReadinessBand,
    /// Per-dimension readiness breakdown
    pub readiness_factors: Vec<ReadinessFactorView>,
    /// Taper reduction classification
    pub taper_status: TaperStatus,
    /// Weekly mileage with peak and current marks
    pub taper_weeks: Vec<TaperWeekMark>,
    /// Every available pace prediction
    pub pace_predictions: Vec<PacePredictionRow>,
    /// Race prep payload
    pub data: RacePrepData,
}

impl RaceView {
    /// Derive the view as of `now`
    ///
    /// An unparseable race date falls back to the day count in the payload.
    #[must_use]
    pub fn from_data(data: RacePrepData, now: DateTime<Utc>) -> Self {
        let days = days_to_race_date(&data.race_date, now).unwrap_or_else(|| {
            warn!(race_date = %data.race_date, "Unparseable race date, using payload countdown");
            u32::try_from(data.days_to_race.max(0)).unwrap_or(u32::MAX)
        });
        let phase = race_phase(days);

        let readiness = &data.readiness;
        let readiness_factors = readiness
            .factors
            .iter()
            .map(|(key, factor)| ReadinessFactorView {
                key: key.clone(),
                label: factor.label.clone(),
                detail: factor.detail.clone(),
                score: factor.score,
                band: readiness_band(factor.score),
            })
            .collect();

        let pace_predictions = data
            .pace_prediction
            .iter()
            .flat_map(|predictions| predictions.all_predictions.iter())
            .map(|(key, prediction)| PacePredictionRow {
                key: key.clone(),
                label: pace_label(key),
                prediction: prediction.clone(),
            })
            .collect();

        Self {
            days_to_race: days,
            phase,
            phase_label: phase.label(),
            message: race_message(days),
            readiness_label: readiness_label(readiness.overall_score),
            readiness_band: readiness_band(readiness.overall_score),
            readiness_factors,
            taper_status: classify_taper(data.taper.taper_reduction_pct),
            taper_weeks: mark_taper_weeks(&data.taper),
            pace_predictions,
            data,
        }
    }
}

/// Fetch and derive the race prep tab as of now
///
/// # Errors
///
/// Propagates the fetch error.
pub async fn load(resources: &ResourceClient) -> UpstreamResult<RaceView> {
    let data = resources.race_prep().await?;
    Ok(RaceView::from_data(data, Utc::now()))
}
