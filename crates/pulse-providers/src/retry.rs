// ABOUTME: Inner retry policy for one logical request to the remote API
// ABOUTME: Linear backoff on 502/503/504 and timeouts, with an injectable sleeper
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::time::Duration;

use async_trait::async_trait;
use pulse_core::constants::retry::{MAX_RETRIES, RETRY_BASE_DELAY_MS, TRANSIENT_STATUS_CODES};

/// Bounded linear-backoff retry policy
///
/// Attempt `n` (0-based) that fails transiently is followed by a wait of
/// `base_delay * (n + 1)` while `n < max_retries`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt
    pub max_retries: u32,
    /// Linear backoff base
    pub base_delay: Duration,
    /// Statuses that are retried
    pub transient_statuses: Vec<u16>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: MAX_RETRIES,
            base_delay: Duration::from_millis(RETRY_BASE_DELAY_MS),
            transient_statuses: TRANSIENT_STATUS_CODES.to_vec(),
        }
    }
}

impl RetryPolicy {
    /// Policy with custom bound and delay base, default transient statuses
    #[must_use]
    pub fn new(max_retries: u32, base_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
            ..Self::default()
        }
    }

    /// Policy that never retries
    #[must_use]
    pub fn no_retry() -> Self {
        Self::new(0, Duration::ZERO)
    }

    /// Whether a response status is worth another attempt
    #[must_use]
    pub fn is_transient_status(&self, status: u16) -> bool {
        self.transient_statuses.contains(&status)
    }

    /// Whether a failed attempt with this 0-based index may be retried
    #[must_use]
    pub const fn allows_retry_after(&self, attempt_index: u32) -> bool {
        attempt_index < self.max_retries
    }

    /// Wait before the retry that follows attempt `attempt_index`
    #[must_use]
    pub fn delay_for(&self, attempt_index: u32) -> Duration {
        self.base_delay
            .saturating_mul(attempt_index.saturating_add(1))
    }

    /// Total wait when every retry is used
    #[must_use]
    pub fn worst_case_delay(&self) -> Duration {
        (0..self.max_retries)
            .map(|attempt| self.delay_for(attempt))
            .fold(Duration::ZERO, Duration::saturating_add)
    }
}

/// Backoff wait between attempts
#[async_trait]
pub trait Sleeper: Send + Sync {
    /// Wait for `duration`
    async fn sleep(&self, duration: Duration);
}

/// Sleeper backed by the tokio timer
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
