// ABOUTME: Remote fitness analytics API client for the Pulse dashboard
// ABOUTME: Transport seam, bounded retry, per-attempt timeout, staleness cache, and typed accessors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pulse Providers
//!
//! Everything that talks to the remote analytics API lives here.
//!
//! - [`client::FitnessApiClient`] performs one logical GET with bounded
//!   linear-backoff retry on 502/503/504 and per-attempt timeouts, decoding
//!   the body into a typed model at the fetch boundary.
//! - [`resources::ResourceClient`] fixes the path, query, and staleness of
//!   each resource the dashboard needs.
//! - [`transport::Transport`] and [`retry::Sleeper`] are the seams tests use
//!   to script responses and record backoff delays.

/// Remote API client with retry and caching
pub mod client;

/// Staleness-windowed response cache
pub mod cache;

/// Shared HTTP client with connection pooling
pub mod http_client;

/// Typed resource accessors
pub mod resources;

/// Inner retry policy and backoff sleeper
pub mod retry;

/// One HTTP exchange, behind a trait
pub mod transport;

pub use cache::{ResponseCache, Staleness};
pub use client::{ClientConfig, FitnessApiClient, ForwardedResponse};
pub use resources::{ResourceClient, ResourceRequest};
pub use retry::{RetryPolicy, Sleeper, TokioSleeper};
pub use transport::{RawResponse, ReqwestTransport, Transport, TransportError, TransportRequest};
