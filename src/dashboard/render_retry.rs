// ABOUTME: Outer page render retry applied around whole page loads
// ABOUTME: Re-runs a render once after a delay when the remote API looks like it is still waking up
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::future::Future;
use std::time::Duration;

use pulse_core::constants::retry::{RENDER_MAX_RETRIES, RENDER_RETRY_DELAY_SECS};
use pulse_core::errors::{UpstreamError, UpstreamResult};
use pulse_providers::Sleeper;
use tracing::{info, warn};

/// Whole-render retry, separate from the per-request `RetryPolicy`
///
/// Only cold-start failures (404, 502, 503, 504) are retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderRetryPolicy {
    /// Re-renders allowed after the first
    pub max_retries: u32,
    /// Wait before each re-render
    pub delay: Duration,
}

impl Default for RenderRetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: RENDER_MAX_RETRIES,
            delay: Duration::from_secs(RENDER_RETRY_DELAY_SECS),
        }
    }
}

impl RenderRetryPolicy {
    /// Single retry after `delay`
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            max_retries: RENDER_MAX_RETRIES,
            delay,
        }
    }

    /// Policy that never re-renders
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            max_retries: 0,
            delay: Duration::ZERO,
        }
    }

    /// Whether a render that failed with `error` after `retries_done` retries runs again
    #[must_use]
    pub fn should_retry(&self, error: &UpstreamError, retries_done: u32) -> bool {
        retries_done < self.max_retries && error.is_cold_start()
    }
}

/// Run `render`, re-running it per `policy` on cold-start failures
///
/// # Errors
///
/// Returns the last render error once the policy gives up.
pub async fn render_with_retry<T, F, Fut>(
    policy: &RenderRetryPolicy,
    sleeper: &dyn Sleeper,
    page: &str,
    mut render: F,
) -> UpstreamResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = UpstreamResult<T>>,
{
    let mut retries_done = 0;
    loop {
        match render().await {
            Ok(view) => {
                if retries_done > 0 {
                    info!(page, retries_done, "Page rendered after cold-start retry");
                }
                return Ok(view);
            }
            Err(error) if policy.should_retry(&error, retries_done) => {
                warn!(
                    page,
                    error = %error,
                    delay_secs = policy.delay.as_secs(),
                    "Remote API appears to be waking up, re-rendering page"
                );
                sleeper.sleep(policy.delay).await;
                retries_done += 1;
            }
            Err(error) => return Err(error),
        }
    }
}
