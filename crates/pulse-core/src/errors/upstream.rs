// ABOUTME: Error taxonomy for calls to the remote fitness analytics API
// ABOUTME: Distinguishes transient, terminal, network, timeout, and malformed-payload failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Upstream Error Types
//!
//! Every failure of the remote data client is one of these variants. The
//! display text of status-carrying variants is always `API error <status>:
//! <body>`, so callers that only see the message can still recognise a cold
//! start by its status code.

use thiserror::Error;

use crate::constants::retry::{COLD_START_STATUS_CODES, TRANSIENT_STATUS_CODES};

/// Failure of a request to the remote analytics API
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UpstreamError {
    /// 502/503/504 still returned after the retry budget was spent
    #[error("API error {status}: {body}")]
    Transient {
        /// Last HTTP status received
        status: u16,
        /// Last response body text
        body: String,
        /// Attempts made, including the first
        attempts: u32,
    },

    /// Any other non-2xx response, never retried
    #[error("API error {status}: {body}")]
    Status {
        /// HTTP status received
        status: u16,
        /// Response body text
        body: String,
    },

    /// Every attempt exceeded the per-attempt timeout
    #[error("API request timed out after {attempts} attempt(s)")]
    Timeout {
        /// Attempts made, including the first
        attempts: u32,
    },

    /// No response was obtained at all
    #[error("API request failed: {message}")]
    Network {
        /// Transport-level failure description
        message: String,
    },

    /// The 2xx body did not match the expected schema
    #[error("Malformed payload from {path}: {message}")]
    MalformedPayload {
        /// Resource path that produced the body
        path: String,
        /// Decoder message
        message: String,
    },

    /// The requested path does not start with `/`
    #[error("Invalid resource path '{path}': must begin with '/'")]
    InvalidPath {
        /// Offending path
        path: String,
    },
}

impl UpstreamError {
    /// HTTP status carried by this error, if any
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Transient { status, .. } | Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the status is one the inner retry policy treats as transient
    #[must_use]
    pub fn is_transient(&self) -> bool {
        self.status()
            .is_some_and(|status| TRANSIENT_STATUS_CODES.contains(&status))
    }

    /// Whether the page layer should read this as the backend waking up
    #[must_use]
    pub fn is_cold_start(&self) -> bool {
        self.status()
            .is_some_and(|status| COLD_START_STATUS_CODES.contains(&status))
    }
}

/// Result alias for remote API calls
pub type UpstreamResult<T> = Result<T, UpstreamError>;
