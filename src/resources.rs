// ABOUTME: Shared resource container handed to every route as axum state
// ABOUTME: Holds the resource client, configuration, and the outer render retry policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Server Resources
//!
//! Built once at startup and shared behind an `Arc`. Every field is either
//! immutable or internally synchronized, so handlers never lock it.

use std::fmt;
use std::sync::Arc;

use pulse_providers::{FitnessApiClient, ResourceClient, Sleeper, TokioSleeper};

use crate::config::ServerConfig;
use crate::dashboard::RenderRetryPolicy;

/// Centralized resource container for dependency injection
#[derive(Clone)]
pub struct ServerResources {
    /// Typed accessors over the remote API client
    pub resources: ResourceClient,
    /// Immutable server configuration
    pub config: Arc<ServerConfig>,
    /// Outer page render retry
    pub render_retry: RenderRetryPolicy,
    /// Sleeper used between page re-renders
    pub render_sleeper: Arc<dyn Sleeper>,
}

impl fmt::Debug for ServerResources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerResources")
            .field("resources", &self.resources)
            .field("config", &self.config)
            .field("render_retry", &self.render_retry)
            .finish_non_exhaustive()
    }
}

impl ServerResources {
    /// Production resources: pooled `reqwest` transport and the tokio timer
    #[must_use]
    pub fn new(config: Arc<ServerConfig>) -> Self {
        let api = FitnessApiClient::new(config.api.client_config());
        Self::with_client(config, api, Arc::new(TokioSleeper))
    }

    /// Resources over an already built client, e.g. one with a fake transport
    #[must_use]
    pub fn with_client(
        config: Arc<ServerConfig>,
        api: FitnessApiClient,
        render_sleeper: Arc<dyn Sleeper>,
    ) -> Self {
        Self {
            resources: ResourceClient::new(api),
            render_retry: config.render_retry_policy(),
            config,
            render_sleeper,
        }
    }

    /// Remote API client behind the accessors
    #[must_use]
    pub const fn api(&self) -> &FitnessApiClient {
        self.resources.api()
    }
}
