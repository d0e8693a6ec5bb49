// ABOUTME: View model shown in place of a page whose data could not be loaded
// ABOUTME: Distinguishes a waking remote API from other failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pulse_core::errors::UpstreamError;
use serde::{Deserialize, Serialize};

const COLD_START_DETAIL: &str = "The server is waking up. Try again in a moment.";
const FALLBACK_DETAIL: &str = "Try again in a moment.";

/// Failure placeholder for one dashboard tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadingErrorView {
    /// Tab display name, e.g. `weekly summary`
    pub tab_name: String,
    /// `Unable to load <tab> data`
    pub headline: String,
    /// Cold-start notice, or the error text
    pub detail: String,
    /// Whether the failure looks like the remote API waking up
    pub cold_start: bool,
}

impl LoadingErrorView {
    /// Build the placeholder for a failed render
    #[must_use]
    pub fn from_error(tab_name: &str, error: &UpstreamError) -> Self {
        let cold_start = error.is_cold_start();
        let detail = if cold_start {
            COLD_START_DETAIL.to_owned()
        } else {
            let message = error.to_string();
            if message.trim().is_empty() {
                FALLBACK_DETAIL.to_owned()
            } else {
                message
            }
        };

        Self {
            tab_name: tab_name.to_owned(),
            headline: format!("Unable to load {tab_name} data"),
            detail,
            cold_start,
        }
    }
}
