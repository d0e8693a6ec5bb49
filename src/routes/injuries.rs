// ABOUTME: Injury write proxy forwarding create and update requests to the remote API
// ABOUTME: Passes the remote status and body through; local failures become a generic 500
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Injury write proxy
//!
//! The browser never sees the remote API key: writes go through here and
//! the client attaches the bearer token. Writes are forwarded once, with no
//! retry and no caching. A successful write drops the cached injuries page
//! resources so the next `/injuries` render shows it.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{post, put},
    Json, Router,
};
use pulse_core::constants::{api_paths, pages};
use pulse_core::errors::UpstreamError;
use pulse_providers::ForwardedResponse;
use reqwest::Method;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::{debug, error};

use crate::dashboard::revalidate_pages;
use crate::resources::ServerResources;

/// Generic message for a failed create
pub const CREATE_FAILED: &str = "Failed to create injury";
/// Generic message for a failed update
pub const UPDATE_FAILED: &str = "Failed to update injury";

/// Reasons a forwarded write produced no remote response to pass through
#[derive(Debug, Error)]
enum ProxyError {
    #[error("request body is not valid JSON: {0}")]
    InvalidBody(#[from] serde_json::Error),
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

/// Injury proxy routes
pub struct InjuryRoutes;

impl InjuryRoutes {
    /// Create the create and update routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(api_paths::INJURIES, post(Self::handle_create))
            .route("/api/injuries/:id", put(Self::handle_update))
            .with_state(resources)
    }

    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        body: Bytes,
    ) -> Response {
        let result = forward(&resources, Method::POST, api_paths::INJURIES, &body).await;
        respond(result, CREATE_FAILED)
    }

    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
        body: Bytes,
    ) -> Response {
        let path = format!("{}/{id}", api_paths::INJURIES);
        let result = forward(&resources, Method::PUT, &path, &body).await;
        respond(result, UPDATE_FAILED)
    }
}

async fn forward(
    resources: &ServerResources,
    method: Method,
    path: &str,
    body: &[u8],
) -> Result<ForwardedResponse, ProxyError> {
    let payload: Value = serde_json::from_slice(body)?;
    let forwarded = resources.api().forward_json(method, path, &payload).await?;
    if StatusCode::from_u16(forwarded.status).is_ok_and(|status| status.is_success()) {
        let removed = revalidate_pages(resources.api().cache(), &[pages::INJURIES]);
        debug!(path, removed, "Injury write accepted, dropped cached injury data");
    }
    Ok(forwarded)
}

fn respond(result: Result<ForwardedResponse, ProxyError>, failure_message: &str) -> Response {
    match result {
        Ok(forwarded) => {
            let status =
                StatusCode::from_u16(forwarded.status).unwrap_or(StatusCode::BAD_GATEWAY);
            (status, Json(forwarded.body)).into_response()
        }
        Err(e) => {
            error!(error = %e, "{failure_message}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": failure_message })),
            )
                .into_response()
        }
    }
}
