// ABOUTME: Configuration module root for the dashboard server
// ABOUTME: Environment-only configuration parsed once at startup into immutable values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration management
//!
//! Everything is read from the environment by the binary and handed to the
//! rest of the crate as plain values; library code never reads the
//! environment on its own.

/// Environment variable parsing and the server configuration struct
pub mod environment;

/// Logging-first startup sequence with command-line overrides
pub mod startup;

pub use environment::{ApiConfig, CorsConfig, Environment, ServerConfig};
pub use startup::{load_config, load_config_with, ConfigOverrides};
