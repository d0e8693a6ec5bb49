// ABOUTME: Typed accessors for each remote analytics resource the dashboard renders
// ABOUTME: Each accessor fixes path, query, and staleness, then delegates to the client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pulse_core::constants::api_paths;
use pulse_core::constants::defaults::TREND_WEEKS;
use pulse_core::errors::UpstreamResult;
use pulse_core::models::{
    DailyData, InjuriesDetailData, LiftingDetailData, LiftingRoutinesData, LiftingTrendPoint,
    NutritionDetailData, RacePrepData, RunningDetailData, RunningScheduleData, RunningTrendPoint,
    WeeklyData,
};

use crate::cache::Staleness;
use crate::client::FitnessApiClient;

/// Path, query, and staleness of one logical fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRequest {
    /// Resource path, must start with `/`
    pub path: String,
    /// Query parameters in order
    pub query: Vec<(String, String)>,
    /// Cache window
    pub staleness: Staleness,
}

impl ResourceRequest {
    /// Request with no query and the default staleness
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
            staleness: Staleness::DEFAULT,
        }
    }

    /// Append a query parameter
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Append a query parameter when a value is present
    #[must_use]
    pub fn with_optional_query(self, key: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.with_query(key, value),
            None => self,
        }
    }

    /// Override the cache window
    #[must_use]
    pub const fn with_staleness(mut self, staleness: Staleness) -> Self {
        self.staleness = staleness;
        self
    }

    /// Path followed by the URL-encoded query string
    ///
    /// Doubles as the cache key.
    #[must_use]
    pub fn cache_key(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let query = self
            .query
            .iter()
            .map(|(key, value)| {
                format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
            })
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{query}", self.path)
    }
}

/// Accessors for every resource the dashboard consumes
///
/// Dates are passed through uninterpreted.
#[derive(Debug, Clone)]
pub struct ResourceClient {
    api: FitnessApiClient,
}

impl ResourceClient {
    /// Wrap a configured API client
    #[must_use]
    pub const fn new(api: FitnessApiClient) -> Self {
        Self { api }
    }

    /// Underlying client
    #[must_use]
    pub const fn api(&self) -> &FitnessApiClient {
        &self.api
    }

    /// Daily brief for `date`, or today when absent
    ///
    /// # Errors
    ///
    /// Propagates any `UpstreamError` from the client.
    pub async fn daily(&self, date: Option<&str>) -> UpstreamResult<DailyData> {
        let request = ResourceRequest::new(api_paths::DAILY).with_optional_query("date", date);
        self.api.get_json(&request).await
    }

    /// Weekly summary for the week starting `week_start`, or the current week
    ///
    /// # Errors
    ///
    /// Propagates any `UpstreamError` from the client.
    pub async fn weekly(&self, week_start: Option<&str>) -> UpstreamResult<WeeklyData> {
        let request =
            ResourceRequest::new(api_paths::WEEKLY).with_optional_query("week_start", week_start);
        self.api.get_json(&request).await
    }

    /// Weekly running series, 12 weeks unless specified
    ///
    /// # Errors
    ///
    /// Propagates any `UpstreamError` from the client.
    pub async fn running_trend(&self, weeks: Option<u32>) -> UpstreamResult<Vec<RunningTrendPoint>> {
        let request = ResourceRequest::new(api_paths::RUNNING_TREND)
            .with_query("weeks", weeks.unwrap_or(TREND_WEEKS).to_string());
        self.api.get_json(&request).await
    }

    /// Weekly lifting series, 12 weeks unless specified
    ///
    /// # Errors
    ///
    /// Propagates any `UpstreamError` from the client.
    pub async fn lifting_trend(&self, weeks: Option<u32>) -> UpstreamResult<Vec<LiftingTrendPoint>> {
        let request = ResourceRequest::new(api_paths::LIFTING_TREND)
            .with_query("weeks", weeks.unwrap_or(TREND_WEEKS).to_string());
        self.api.get_json(&request).await
    }

    /// Running tab detail
    ///
    /// # Errors
    ///
    /// Propagates any `UpstreamError` from the client.
    pub async fn running_detail(&self) -> UpstreamResult<RunningDetailData> {
        self.api
            .get_json(&ResourceRequest::new(api_paths::RUNNING_DETAIL))
            .await
    }

    /// Training calendar, past and future
    ///
    /// # Errors
    ///
    /// Propagates any `UpstreamError` from the client.
    pub async fn running_schedule(&self) -> UpstreamResult<RunningScheduleData> {
        self.api
            .get_json(&ResourceRequest::new(api_paths::RUNNING_SCHEDULE))
            .await
    }

    /// Lifting tab detail
    ///
    /// # Errors
    ///
    /// Propagates any `UpstreamError` from the client.
    pub async fn lifting_detail(&self) -> UpstreamResult<LiftingDetailData> {
        self.api
            .get_json(&ResourceRequest::new(api_paths::LIFTING_DETAIL))
            .await
    }

    /// Saved routines
    ///
    /// # Errors
    ///
    /// Propagates any `UpstreamError` from the client.
    pub async fn lifting_routines(&self) -> UpstreamResult<LiftingRoutinesData> {
        self.api
            .get_json(&ResourceRequest::new(api_paths::LIFTING_ROUTINES))
            .await
    }

    /// Nutrition tab detail
    ///
    /// # Errors
    ///
    /// Propagates any `UpstreamError` from the client.
    pub async fn nutrition_detail(&self) -> UpstreamResult<NutritionDetailData> {
        self.api
            .get_json(&ResourceRequest::new(api_paths::NUTRITION_DETAIL))
            .await
    }

    /// Race preparation summary
    ///
    /// # Errors
    ///
    /// Propagates any `UpstreamError` from the client.
    pub async fn race_prep(&self) -> UpstreamResult<RacePrepData> {
        self.api
            .get_json(&ResourceRequest::new(api_paths::RACE_PREP))
            .await
    }

    /// Injury tab detail, refreshed every minute
    ///
    /// # Errors
    ///
    /// Propagates any `UpstreamError` from the client.
    pub async fn injuries_detail(&self) -> UpstreamResult<InjuriesDetailData> {
        let request =
            ResourceRequest::new(api_paths::INJURIES_DETAIL).with_staleness(Staleness::INJURIES);
        self.api.get_json(&request).await
    }
}
