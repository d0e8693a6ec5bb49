// ABOUTME: Shared HTTP client with connection pooling for remote API calls
// ABOUTME: Singleton pattern with configurable timeouts initialized at server startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::OnceLock;
use std::time::Duration;

use pulse_core::constants::retry::{CONNECT_TIMEOUT_SECS, REQUEST_TIMEOUT_SECS};
use reqwest::{Client, ClientBuilder};
use tracing::warn;

/// Configured timeout values for the shared client
static CLIENT_TIMEOUTS: OnceLock<(Duration, Duration)> = OnceLock::new();

/// Global shared HTTP client with configured timeouts
static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Initialize the shared HTTP client timeout configuration
///
/// Call once at startup before the first request. Later calls are ignored.
pub fn initialize_shared_client(timeout: Duration, connect_timeout: Duration) {
    if CLIENT_TIMEOUTS.set((timeout, connect_timeout)).is_err() {
        warn!("Shared HTTP client timeouts already initialized, ignoring new values");
    }
}

/// Build a client with the given timeouts, falling back to reqwest defaults
#[must_use]
pub fn build_client(timeout: Duration, connect_timeout: Duration) -> Client {
    ClientBuilder::new()
        .timeout(timeout)
        .connect_timeout(connect_timeout)
        .build()
        .unwrap_or_else(|e| {
            warn!(error = %e, "Failed to build configured HTTP client, using defaults");
            Client::new()
        })
}

/// Get the shared HTTP client for remote API calls
///
/// Falls back to 30s request and 10s connect timeouts when
/// `initialize_shared_client()` was not called.
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| {
        let (timeout, connect_timeout) = CLIENT_TIMEOUTS.get().copied().unwrap_or((
            Duration::from_secs(REQUEST_TIMEOUT_SECS),
            Duration::from_secs(CONNECT_TIMEOUT_SECS),
        ));
        build_client(timeout, connect_timeout)
    })
}
