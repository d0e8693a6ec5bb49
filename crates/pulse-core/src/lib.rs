// ABOUTME: Core types and constants for the Pulse fitness dashboard
// ABOUTME: Foundation crate with the remote resource schema, error handling, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pulse Core
//!
//! Foundation crate shared by the client, the metrics engine, and the server.
//! It changes rarely, so the rest of the workspace compiles incrementally on
//! top of it.
//!
//! ## Modules
//!
//! - **models**: typed payloads returned by the remote analytics API
//! - **errors**: `UpstreamError` for remote calls, `AppError` for HTTP surfaces
//! - **constants**: API paths, staleness windows, retry defaults, page paths

/// Unified error handling for upstream calls and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Typed payloads served by the remote analytics API
pub mod models;
