// ABOUTME: Maps dashboard pages to the remote resources they render from
// ABOUTME: Used by the revalidate endpoint to drop cached bodies page by page
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pulse_core::constants::{api_paths, pages};
use pulse_providers::ResponseCache;
use tracing::debug;

/// Remote resource paths a page reads; empty for unknown pages
#[must_use]
pub fn resource_paths_for_page(page: &str) -> &'static [&'static str] {
    match page {
        pages::DAILY => &[api_paths::DAILY],
        pages::WEEKLY => &[
            api_paths::WEEKLY,
            api_paths::RUNNING_TREND,
            api_paths::LIFTING_TREND,
        ],
        pages::RUNNING => &[api_paths::RUNNING_DETAIL, api_paths::RUNNING_SCHEDULE],
        pages::LIFTING => &[api_paths::LIFTING_DETAIL, api_paths::LIFTING_ROUTINES],
        pages::NUTRITION => &[api_paths::NUTRITION_DETAIL],
        pages::RACE => &[api_paths::RACE_PREP],
        pages::INJURIES => &[api_paths::INJURIES_DETAIL],
        _ => &[],
    }
}

/// Drop every cached body behind `page_paths`, returning how many were removed
///
/// Every query variant of a resource goes with it.
pub fn revalidate_pages(cache: &ResponseCache, page_paths: &[&str]) -> usize {
    page_paths
        .iter()
        .flat_map(|page| resource_paths_for_page(page))
        .map(|resource| {
            let removed = cache.invalidate_prefix(resource);
            debug!(resource, removed, "Invalidated cached resource");
            removed
        })
        .sum()
}
