// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Remote API paths, staleness windows, retry defaults, and page paths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by the concern they configure rather than kept in
//! one flat list.

/// Staleness windows for cached remote resources
pub mod cache;
/// Retry and timeout defaults for the remote API client
pub mod retry;

/// Remote analytics API paths
pub mod api_paths {
    /// Daily brief (`date` query optional)
    pub const DAILY: &str = "/api/dashboard/daily";
    /// Weekly summary (`week_start` query optional)
    pub const WEEKLY: &str = "/api/dashboard/weekly";
    /// Running trend series (`weeks` query)
    pub const RUNNING_TREND: &str = "/api/running/trend";
    /// Lifting trend series (`weeks` query)
    pub const LIFTING_TREND: &str = "/api/lifting/trend";
    /// Running tab detail
    pub const RUNNING_DETAIL: &str = "/api/running/detail";
    /// Planned vs. completed running calendar
    pub const RUNNING_SCHEDULE: &str = "/api/running/schedule";
    /// Lifting tab detail
    pub const LIFTING_DETAIL: &str = "/api/lifting/detail";
    /// Saved lifting routines
    pub const LIFTING_ROUTINES: &str = "/api/lifting/routines";
    /// Nutrition tab detail
    pub const NUTRITION_DETAIL: &str = "/api/nutrition/detail";
    /// Race preparation summary
    pub const RACE_PREP: &str = "/api/race/prep";
    /// Injury tab detail
    pub const INJURIES_DETAIL: &str = "/api/injuries/detail";
    /// Injury collection (create via POST, update via PUT on `/{id}`)
    pub const INJURIES: &str = "/api/injuries";
}

/// Default values used when configuration is absent
pub mod defaults {
    /// Remote API origin used when `RENDER_API_URL` is unset
    pub const API_BASE_URL: &str = "https://strava-mcp-e0fy.onrender.com";
    /// Default HTTP port for the dashboard server
    pub const HTTP_PORT: u16 = 3000;
    /// Default number of weeks requested for trend series
    pub const TREND_WEEKS: u32 = 12;
}

/// Environment variable names
pub mod env_config {
    /// Remote API base URL
    pub const API_URL: &str = "RENDER_API_URL";
    /// Remote API bearer key
    pub const API_KEY: &str = "API_KEY";
    /// Shared secret guarding the revalidate endpoint
    pub const REVALIDATE_SECRET: &str = "REVALIDATE_SECRET";
    /// Dashboard server port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Per-attempt request timeout
    pub const CLIENT_TIMEOUT_SECS: &str = "HTTP_CLIENT_TIMEOUT_SECS";
    /// Connect timeout
    pub const CLIENT_CONNECT_TIMEOUT_SECS: &str = "HTTP_CLIENT_CONNECT_TIMEOUT_SECS";
    /// Inner retry bound
    pub const CLIENT_MAX_RETRIES: &str = "HTTP_CLIENT_MAX_RETRIES";
    /// Inner linear backoff base
    pub const CLIENT_RETRY_BASE_DELAY_MS: &str = "HTTP_CLIENT_RETRY_BASE_DELAY_MS";
    /// Outer page render retry delay
    pub const RENDER_RETRY_DELAY_SECS: &str = "RENDER_RETRY_DELAY_SECS";
    /// Allowed CORS origins
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Dashboard page paths served by this application
pub mod pages {
    /// Daily brief page
    pub const DAILY: &str = "/daily";
    /// Weekly summary page
    pub const WEEKLY: &str = "/weekly";
    /// Running tab
    pub const RUNNING: &str = "/running";
    /// Lifting tab
    pub const LIFTING: &str = "/lifting";
    /// Nutrition tab
    pub const NUTRITION: &str = "/nutrition";
    /// Race preparation tab
    pub const RACE: &str = "/race";
    /// Injury tab
    pub const INJURIES: &str = "/injuries";

    /// Every page the revalidate endpoint refreshes
    pub const ALL: [&str; 7] = [DAILY, WEEKLY, RUNNING, LIFTING, NUTRITION, RACE, INJURIES];
}

/// Service identifiers used in logs
pub mod service_names {
    /// Dashboard server service name
    pub const PULSE_DASHBOARD: &str = "pulse-dashboard";
    /// Remote analytics API name used in error messages
    pub const REMOTE_API: &str = "fitness analytics API";
}
