// ABOUTME: Dashboard presentation layer: one view model per page plus shared failure handling
// ABOUTME: Views combine remote payloads with derived metrics; renders are retried once on cold start
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Page view models
//!
//! Each page module exposes a pure constructor from remote payloads and an
//! async `load` that fetches through the [`pulse_providers::ResourceClient`].
//! Route handlers wrap `load` in [`render_with_retry`] and turn a final
//! failure into a [`LoadingErrorView`].

/// Daily brief
pub mod daily;
/// Failure placeholder
pub mod error_view;
/// Injury tab
pub mod injuries;
/// Lifting tab
pub mod lifting;
/// Nutrition tab
pub mod nutrition;
/// Race prep tab
pub mod race;
/// Outer render retry
pub mod render_retry;
/// Page to resource mapping for cache invalidation
pub mod revalidation;
/// Running tab
pub mod running;
/// Weekly summary
pub mod weekly;

pub use error_view::LoadingErrorView;
pub use render_retry::{render_with_retry, RenderRetryPolicy};
pub use revalidation::{resource_paths_for_page, revalidate_pages};

/// Tab names used in failure headlines
#[allow(missing_docs)]
pub mod tabs {
    pub const DAILY: &str = "daily brief";
    pub const WEEKLY: &str = "weekly summary";
    pub const RUNNING: &str = "running";
    pub const LIFTING: &str = "lifting";
    pub const NUTRITION: &str = "nutrition";
    pub const RACE: &str = "race prep";
    pub const INJURIES: &str = "injuries";
}
