// ABOUTME: Resilient client for the remote fitness analytics API
// ABOUTME: Bounded retry on cold-start statuses, per-attempt timeouts, typed decoding, and caching
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use pulse_core::constants::defaults::API_BASE_URL;
use pulse_core::constants::retry::{CONNECT_TIMEOUT_SECS, REQUEST_TIMEOUT_SECS};
use pulse_core::errors::{UpstreamError, UpstreamResult};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::cache::ResponseCache;
use crate::http_client::initialize_shared_client;
use crate::resources::ResourceRequest;
use crate::retry::{RetryPolicy, Sleeper, TokioSleeper};
use crate::transport::{RawResponse, ReqwestTransport, Transport, TransportError, TransportRequest};

/// Immutable configuration for the remote API client
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin of the remote API, without trailing slash
    pub base_url: String,
    /// Bearer key; empty when unset
    pub api_key: String,
    /// Upper bound on each individual attempt
    pub request_timeout: Duration,
    /// Connection establishment timeout
    pub connect_timeout: Duration,
    /// Inner retry policy
    pub retry: RetryPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: API_BASE_URL.to_owned(),
            api_key: String::new(),
            request_timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(CONNECT_TIMEOUT_SECS),
            retry: RetryPolicy::default(),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &if self.api_key.is_empty() { "<unset>" } else { "<redacted>" })
            .field("request_timeout", &self.request_timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("retry", &self.retry)
            .finish()
    }
}

impl ClientConfig {
    /// Configuration for a base URL and key with default timeouts and retry
    ///
    /// A trailing `/` on the base URL is removed.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Replace the retry policy
    #[must_use]
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Replace the per-attempt timeout
    #[must_use]
    pub const fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

/// Result of a forwarded write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardedResponse {
    /// Remote status code
    pub status: u16,
    /// Remote body parsed as JSON
    pub body: Value,
}

/// Client for the remote analytics API
///
/// Cloning is cheap; clones share configuration, transport, and cache.
#[derive(Clone)]
pub struct FitnessApiClient {
    config: Arc<ClientConfig>,
    transport: Arc<dyn Transport>,
    sleeper: Arc<dyn Sleeper>,
    cache: Arc<ResponseCache>,
}

impl fmt::Debug for FitnessApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FitnessApiClient")
            .field("config", &self.config)
            .field("cached_entries", &self.cache.len())
            .finish_non_exhaustive()
    }
}

impl FitnessApiClient {
    /// Production client over the shared pooled `reqwest` client
    ///
    /// The first call fixes the shared client's timeouts for the process.
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        initialize_shared_client(config.request_timeout, config.connect_timeout);
        Self::with_transport(
            config,
            Arc::new(ReqwestTransport::shared()),
            Arc::new(TokioSleeper),
        )
    }

    /// Client over an arbitrary transport and sleeper
    #[must_use]
    pub fn with_transport(
        config: ClientConfig,
        transport: Arc<dyn Transport>,
        sleeper: Arc<dyn Sleeper>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            transport,
            sleeper,
            cache: Arc::new(ResponseCache::new()),
        }
    }

    /// Active configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Response cache shared by all clones
    #[must_use]
    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// Absolute URL for a path and an already-encoded query suffix
    fn url_for(&self, path_and_query: &str) -> String {
        format!("{}{path_and_query}", self.config.base_url)
    }

    fn ensure_valid_path(path: &str) -> UpstreamResult<()> {
        if path.starts_with('/') {
            Ok(())
        } else {
            Err(UpstreamError::InvalidPath {
                path: path.to_owned(),
            })
        }
    }

    /// Run one attempt bounded by the per-attempt timeout
    async fn attempt(&self, request: &TransportRequest) -> Result<RawResponse, TransportError> {
        tokio::time::timeout(self.config.request_timeout, self.transport.send(request))
            .await
            .unwrap_or(Err(TransportError::Timeout))
    }

    /// GET a body with bounded retry on transient statuses and timeouts
    async fn fetch_body(&self, path_and_query: &str) -> UpstreamResult<String> {
        let policy = &self.config.retry;
        let request = TransportRequest::get(self.url_for(path_and_query), &self.config.api_key);
        let mut attempt_index: u32 = 0;

        loop {
            let attempts = attempt_index + 1;
            debug!(resource = path_and_query, attempt = attempts, "Requesting remote resource");

            let failure = match self.attempt(&request).await {
                Ok(response) if response.is_success() => return Ok(response.body),
                Ok(response) if policy.is_transient_status(response.status) => {
                    UpstreamError::Transient {
                        status: response.status,
                        body: response.body,
                        attempts,
                    }
                }
                Ok(response) => {
                    warn!(
                        resource = path_and_query,
                        status = response.status,
                        "Remote API returned a terminal status"
                    );
                    return Err(UpstreamError::Status {
                        status: response.status,
                        body: response.body,
                    });
                }
                Err(TransportError::Timeout) => UpstreamError::Timeout { attempts },
                Err(TransportError::Network(message)) => {
                    warn!(resource = path_and_query, error = %message, "Remote API unreachable");
                    return Err(UpstreamError::Network { message });
                }
            };

            if !policy.allows_retry_after(attempt_index) {
                warn!(
                    resource = path_and_query,
                    attempts,
                    error = %failure,
                    "Remote API still failing after retries"
                );
                return Err(failure);
            }

            let delay = policy.delay_for(attempt_index);
            let max_retries = policy.max_retries;
            warn!(
                "Remote API transient failure on {path_and_query} ({failure}) - retry {attempts}/{max_retries} after {}ms",
                delay.as_millis()
            );
            self.sleeper.sleep(delay).await;
            attempt_index += 1;
        }
    }

    /// Fetch a resource and decode it into `T`
    ///
    /// Served from cache while fresh. Only bodies that decode are cached.
    ///
    /// # Errors
    ///
    /// - `InvalidPath` when the path does not start with `/` (no request made)
    /// - `Transient` / `Timeout` after the retry budget is spent
    /// - `Status` for any other non-2xx response
    /// - `Network` when no response was obtained
    /// - `MalformedPayload` when the body does not match `T`
    pub async fn get_json<T: DeserializeOwned>(&self, request: &ResourceRequest) -> UpstreamResult<T> {
        Self::ensure_valid_path(&request.path)?;
        let key = request.cache_key();

        if let Some(cached) = self.cache.get(&key, request.staleness) {
            return decode(&request.path, &cached);
        }

        let body = self.fetch_body(&key).await?;
        let value = decode(&request.path, &body)?;
        self.cache.insert(key, body, request.staleness);
        Ok(value)
    }

    /// Forward a JSON write to the remote API once, without retry or caching
    ///
    /// # Errors
    ///
    /// Fails when the path is invalid, no response is obtained, or the
    /// remote body is not JSON. Non-2xx statuses are not errors here.
    pub async fn forward_json(
        &self,
        method: Method,
        path: &str,
        body: &Value,
    ) -> UpstreamResult<ForwardedResponse> {
        Self::ensure_valid_path(path)?;
        let request = TransportRequest {
            method: method.clone(),
            url: self.url_for(path),
            bearer_token: self.config.api_key.clone(),
            json_body: Some(body.to_string()),
        };

        let response = self.attempt(&request).await.map_err(|error| match error {
            TransportError::Timeout => UpstreamError::Timeout { attempts: 1 },
            TransportError::Network(message) => UpstreamError::Network { message },
        })?;
        info!(%method, path, status = response.status, "Forwarded write to remote API");

        let body = serde_json::from_str(&response.body).map_err(|e| {
            UpstreamError::MalformedPayload {
                path: path.to_owned(),
                message: e.to_string(),
            }
        })?;
        Ok(ForwardedResponse {
            status: response.status,
            body,
        })
    }
}

fn decode<T: DeserializeOwned>(path: &str, body: &str) -> UpstreamResult<T> {
    serde_json::from_str(body).map_err(|e| {
        warn!(path, error = %e, "Remote payload does not match expected schema");
        UpstreamError::MalformedPayload {
            path: path.to_owned(),
            message: e.to_string(),
        }
    })
}
