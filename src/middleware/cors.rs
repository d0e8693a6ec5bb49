// ABOUTME: CORS middleware configuration for the dashboard HTTP surface
// ABOUTME: Allows any origin or an explicit comma-separated origin list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use http::{header::HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::CorsConfig;

/// Parse the configured origins; `None` means any origin
fn parse_origins(allowed_origins: &str) -> Option<Vec<HeaderValue>> {
    if allowed_origins.trim().is_empty() || allowed_origins.trim() == "*" {
        return None;
    }
    let origins: Vec<HeaderValue> = allowed_origins
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();
    (!origins.is_empty()).then_some(origins)
}

/// Configure CORS from `CORS_ALLOWED_ORIGINS`
///
/// `*` or an empty value allows any origin. Otherwise the value is a
/// comma-separated list; if nothing in it parses, any origin is allowed.
///
/// ```bash
/// export CORS_ALLOWED_ORIGINS="https://pulse.example.com,https://admin.example.com"
/// ```
pub fn setup_cors(config: &CorsConfig) -> CorsLayer {
    let allow_origin =
        parse_origins(&config.allowed_origins).map_or_else(AllowOrigin::any, AllowOrigin::list);

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("authorization"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
            HeaderName::from_static("x-request-id"),
        ])
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
}
