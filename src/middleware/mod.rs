// ABOUTME: HTTP middleware for the dashboard server
// ABOUTME: CORS configuration and request span construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod cors;
pub mod tracing;

// CORS configuration
pub use cors::setup_cors;

// Request tracing
pub use self::tracing::create_request_span;
