// ABOUTME: Retry and timeout defaults for calls to the cold-starting remote API
// ABOUTME: Inner per-request policy and outer per-render policy are kept separate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Retries after the first attempt (3 attempts total)
pub const MAX_RETRIES: u32 = 2;

/// Linear backoff base: attempt `n` (0-based) waits `base * (n + 1)`
pub const RETRY_BASE_DELAY_MS: u64 = 3_000;

/// Upstream statuses meaning "service is cold or restarting"
pub const TRANSIENT_STATUS_CODES: [u16; 3] = [502, 503, 504];

/// Statuses the page layer reads as a cold start and re-renders once
pub const COLD_START_STATUS_CODES: [u16; 4] = [404, 502, 503, 504];

/// Per-attempt request timeout
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Connection establishment timeout
pub const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Outer render retry bound
pub const RENDER_MAX_RETRIES: u32 = 1;

/// Outer render retry delay
pub const RENDER_RETRY_DELAY_SECS: u64 = 5;
