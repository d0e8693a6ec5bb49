// ABOUTME: Injury tab view model, including the placeholder when tracking is unavailable
// ABOUTME: Buckets injury severity for the history table and body heatmap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pulse_core::errors::UpstreamResult;
use pulse_core::models::InjuriesDetailData;
use pulse_providers::ResourceClient;
use serde::Serialize;

/// Shown when the backend has no injury store configured
pub const TRACKING_UNAVAILABLE_NOTICE: &str = "Injury tracking is not yet configured";

/// Severity bucket on the 1-10 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityLevel {
    /// 7 and above
    High,
    /// 4 to 6
    Moderate,
    /// Below 4
    Low,
}

/// Bucket a 1-10 severity score
#[must_use]
pub const fn severity_level(severity: u8) -> SeverityLevel {
    match severity {
        7.. => SeverityLevel::High,
        4..=6 => SeverityLevel::Moderate,
        _ => SeverityLevel::Low,
    }
}

/// Injury row with its severity bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InjurySeverity {
    pub id: i64,
    pub level: SeverityLevel,
}

/// Injury tab
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InjuriesView {
    /// Whether injury tracking is configured on the backend
    pub available: bool,
    /// Placeholder text when tracking is unavailable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<&'static str>,
    /// Severity bucket per logged injury
    pub severities: Vec<InjurySeverity>,
    /// Injury detail payload; only the overview is meaningful when unavailable
    pub data: InjuriesDetailData,
}

impl InjuriesView {
    /// Derive the view from the remote payload
    #[must_use]
    pub fn from_data(data: InjuriesDetailData) -> Self {
        let severities = if data.available {
            data.injuries
                .iter()
                .map(|injury| InjurySeverity {
                    id: injury.id,
                    level: severity_level(injury.severity),
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            available: data.available,
            notice: (!data.available).then_some(TRACKING_UNAVAILABLE_NOTICE),
            severities,
            data,
        }
    }
}

/// Fetch and derive the injury tab
///
/// # Errors
///
/// Propagates the fetch error.
pub async fn load(resources: &ResourceClient) -> UpstreamResult<InjuriesView> {
    resources
        .injuries_detail()
        .await
        .map(InjuriesView::from_data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_core::models::{Injury, InjuryStatus};

    fn injury(id: i64, severity: u8) -> Injury {
        Injury {
            id,
            body_part: "knee".to_owned(),
            body_side: Some("left".to_owned()),
            injury_type: "strain".to_owned(),
            severity,
            onset_date: "2026-01-10".to_owned(),
            resolved_date: None,
            description: None,
            notes: None,
            status: InjuryStatus::Active,
            days_since_onset: 10,
            duration_days: 10,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_severity_buckets() {
        assert_eq!(severity_level(10), SeverityLevel::High);
        assert_eq!(severity_level(7), SeverityLevel::High);
        assert_eq!(severity_level(6), SeverityLevel::Moderate);
        assert_eq!(severity_level(4), SeverityLevel::Moderate);
        assert_eq!(severity_level(3), SeverityLevel::Low);
    }

    #[test]
    fn test_unavailable_shows_notice() {
        let view = InjuriesView::from_data(InjuriesDetailData::default());
        assert!(!view.available);
        assert_eq!(view.notice, Some(TRACKING_UNAVAILABLE_NOTICE));
        assert!(view.severities.is_empty());
    }

    #[test]
    fn test_available_buckets_each_injury() {
        let data = InjuriesDetailData {
            available: true,
            injuries: vec![injury(1, 8), injury(2, 2)],
            ..InjuriesDetailData::default()
        };
        let view = InjuriesView::from_data(data);
        assert!(view.notice.is_none());
        assert_eq!(
            view.severities,
            vec![
                InjurySeverity { id: 1, level: SeverityLevel::High },
                InjurySeverity { id: 2, level: SeverityLevel::Low },
            ]
        );
    }
}
