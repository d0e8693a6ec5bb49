// ABOUTME: Route module organization for the dashboard HTTP surface
// ABOUTME: Health probes, page view models, the injury write proxy, and cache revalidation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module
//!
//! Each domain module contains route definitions and thin handlers that
//! delegate to the dashboard views or the remote API client.

/// Health check routes
pub mod health;
/// Injury create/update proxy
pub mod injuries;
/// Dashboard page view models
pub mod pages;
/// On-demand cache revalidation
pub mod revalidate;

pub use health::HealthRoutes;
pub use injuries::InjuryRoutes;
pub use pages::PageRoutes;
pub use revalidate::RevalidateRoutes;
