// ABOUTME: Startup sequence that installs logging before configuration is loaded
// ABOUTME: Applies command-line overrides on top of the environment and revalidates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;

use super::environment::ServerConfig;
use crate::logging;

/// Command-line values that take precedence over the environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// HTTP port to listen on
    pub http_port: Option<u16>,
    /// Remote API base URL
    pub api_url: Option<String>,
}

/// Install logging from the environment, then load configuration
///
/// # Errors
///
/// Returns an error if logging cannot be installed or the configuration is invalid
pub fn load_config(overrides: ConfigOverrides) -> Result<ServerConfig> {
    load_config_with(logging::init_from_env, overrides)
}

/// [`load_config`] with a caller-supplied logging initializer
///
/// The initializer runs before the environment is read so that fallback and
/// validation warnings reach the installed subscriber.
///
/// # Errors
///
/// Returns an error if `init_logging` fails or the configuration is invalid
pub fn load_config_with<F>(init_logging: F, overrides: ConfigOverrides) -> Result<ServerConfig>
where
    F: FnOnce() -> Result<()>,
{
    init_logging()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = overrides.http_port {
        config.http_port = http_port;
    }
    if let Some(api_url) = overrides.api_url {
        config.api.base_url = api_url;
        config.validate()?;
    }
    Ok(config)
}
