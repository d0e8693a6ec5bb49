// ABOUTME: Staleness windows for cached remote API resources
// ABOUTME: Page data revalidates every five minutes, user-entered injury data every minute
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Default staleness for analytics resources (5 minutes)
pub const DEFAULT_STALENESS_SECS: u64 = 300;

/// Staleness for injury data, which the user edits directly (1 minute)
pub const INJURY_STALENESS_SECS: u64 = 60;

/// Staleness value meaning "always revalidate"
pub const ALWAYS_REVALIDATE_SECS: u64 = 0;

/// Upper bound on stored responses; page queries put caller input in the key
pub const MAX_CACHE_ENTRIES: usize = 256;
