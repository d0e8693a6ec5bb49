// ABOUTME: Request span construction for the HTTP trace layer
// ABOUTME: Carries method, path, and any caller-supplied request id into every log line
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use http::Request;
use tracing::{info_span, Span};

/// Header callers may set to correlate their logs with ours
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Span for one HTTP request
pub fn create_request_span<B>(request: &Request<B>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-");

    info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id,
    )
}
