// ABOUTME: Single HTTP exchange abstraction used by the remote API client
// ABOUTME: ReqwestTransport in production, scripted fakes in tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};
use thiserror::Error;
use tracing::debug;

use crate::http_client::shared_client;

/// One outbound request, fully resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute URL including the query string
    pub url: String,
    /// Bearer token, possibly empty
    pub bearer_token: String,
    /// JSON body for writes
    pub json_body: Option<String>,
}

impl TransportRequest {
    /// GET with a bearer token
    #[must_use]
    pub fn get(url: String, bearer_token: &str) -> Self {
        Self {
            method: Method::GET,
            url,
            bearer_token: bearer_token.to_owned(),
            json_body: None,
        }
    }

    /// Value of the `Authorization` header
    ///
    /// Always present, even when the token is empty.
    #[must_use]
    pub fn authorization(&self) -> String {
        format!("Bearer {}", self.bearer_token)
    }
}

/// Status and body text of a completed exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Body as text
    pub body: String,
}

impl RawResponse {
    /// Construct a response
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is 2xx
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Exchange failed without a response
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The attempt exceeded its timeout
    #[error("request timed out")]
    Timeout,
    /// Connection, TLS, or body read failure
    #[error("network error: {0}")]
    Network(String),
}

/// Performs exactly one HTTP exchange
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send the request and read the full body
    async fn send(&self, request: &TransportRequest) -> Result<RawResponse, TransportError>;
}

/// Transport backed by a pooled `reqwest` client
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Use the given client
    #[must_use]
    pub const fn new(client: Client) -> Self {
        Self { client }
    }

    /// Use the process-wide shared client
    #[must_use]
    pub fn shared() -> Self {
        Self::new(shared_client().clone())
    }
}

fn map_reqwest_error(error: &reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Network(error.to_string())
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: &TransportRequest) -> Result<RawResponse, TransportError> {
        let mut builder = self
            .client
            .request(request.method.clone(), &request.url)
            .header(AUTHORIZATION, request.authorization());
        if let Some(body) = &request.json_body {
            builder = builder
                .header(CONTENT_TYPE, "application/json")
                .body(body.clone());
        }

        let response = builder.send().await.map_err(|e| map_reqwest_error(&e))?;
        let status = response.status().as_u16();
        debug!(method = %request.method, url = %request.url, status, "Received HTTP response");

        let body = response.text().await.map_err(|e| map_reqwest_error(&e))?;
        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_token_still_sends_bearer_header() {
        let request = TransportRequest::get("https://example.test/api".to_owned(), "");
        assert_eq!(request.authorization(), "Bearer ");
    }

    #[test]
    fn test_success_range() {
        assert!(RawResponse::new(200, "{}").is_success());
        assert!(RawResponse::new(204, "").is_success());
        assert!(!RawResponse::new(304, "").is_success());
        assert!(!RawResponse::new(503, "").is_success());
    }
}
