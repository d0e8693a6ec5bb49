// ABOUTME: On-demand cache revalidation endpoint guarded by a shared secret
// ABOUTME: Drops cached remote resources behind every dashboard page
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::Utc;
use pulse_core::constants::pages;
use serde_json::json;
use tracing::warn;

use crate::dashboard::revalidate_pages;
use crate::logging::DashboardLogger;
use crate::resources::ServerResources;

/// Revalidation endpoint path
pub const REVALIDATE_PATH: &str = "/api/revalidate";

/// Cache revalidation routes
pub struct RevalidateRoutes;

impl RevalidateRoutes {
    /// Create the revalidation route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(REVALIDATE_PATH, post(Self::handle_revalidate))
            .with_state(resources)
    }

    async fn handle_revalidate(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Response {
        if !is_authorized(resources.config.revalidate_secret.as_deref(), &headers) {
            warn!("Rejected revalidate request with missing or wrong secret");
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "unauthorized" })),
            )
                .into_response();
        }

        let removed = revalidate_pages(resources.api().cache(), &pages::ALL);
        DashboardLogger::log_revalidation(pages::ALL.len(), removed);

        Json(json!({
            "revalidated": true,
            "now": Utc::now().timestamp_millis(),
            "paths": pages::ALL,
        }))
        .into_response()
    }
}

/// Without a configured secret every caller is allowed
fn is_authorized(secret: Option<&str>, headers: &HeaderMap) -> bool {
    let Some(secret) = secret else {
        return true;
    };
    let expected = format!("Bearer {secret}");
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|provided| provided == expected)
}
