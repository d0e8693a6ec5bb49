// ABOUTME: Main library entry point for the Pulse fitness dashboard server
// ABOUTME: Wires configuration, logging, page view models, and HTTP routes over the remote data client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![recursion_limit = "256"]
#![deny(unsafe_code)]

//! # Pulse Dashboard
//!
//! A personal fitness dashboard backend. Running, lifting, nutrition, injury,
//! and race-readiness documents are fetched from a remote analytics API that
//! cold-starts on its hosting platform, enriched with derived metrics, and
//! served as JSON page view models.
//!
//! ## Architecture
//!
//! - **pulse-core**: resource schema, error taxonomy, constants
//! - **pulse-providers**: resilient fetch client, response cache, resource accessors
//! - **pulse-intelligence**: pure derived metrics
//! - **this crate**: page view models, outer render retry, HTTP surface
//!
//! ## Example
//!
//! ```rust,no_run
//! use pulse_dashboard::config::environment::ServerConfig;
//! use pulse_dashboard::server::DashboardServer;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     DashboardServer::new(config).run().await
//! }
//! ```

/// Environment-driven configuration
pub mod config;

/// Page view models and the outer render retry
pub mod dashboard;

/// Structured logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Shared state handed to every route
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Router assembly and server lifecycle
pub mod server;
