// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses remote API, retry, revalidation, CORS, and port settings with logged fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration for the dashboard server

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{ensure, Result};
use pulse_core::constants::{defaults, env_config, retry};
use pulse_providers::{ClientConfig, RetryPolicy};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::dashboard::RenderRetryPolicy;

/// Environment type for logging and deployment behavior
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Deployed
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Remote analytics API connection settings
#[derive(Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the remote API
    pub base_url: String,
    /// Bearer key, empty when unset
    pub api_key: String,
    /// Per-attempt timeout in seconds
    pub request_timeout_secs: u64,
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
    /// Inner retry bound
    pub max_retries: u32,
    /// Inner linear backoff base in milliseconds
    pub retry_base_delay_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::API_BASE_URL.to_owned(),
            api_key: String::new(),
            request_timeout_secs: retry::REQUEST_TIMEOUT_SECS,
            connect_timeout_secs: retry::CONNECT_TIMEOUT_SECS,
            max_retries: retry::MAX_RETRIES,
            retry_base_delay_ms: retry::RETRY_BASE_DELAY_MS,
        }
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &if self.api_key.is_empty() { "<unset>" } else { "<redacted>" })
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("max_retries", &self.max_retries)
            .field("retry_base_delay_ms", &self.retry_base_delay_ms)
            .finish()
    }
}

impl ApiConfig {
    /// Load remote API settings from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            base_url: env_var_or(env_config::API_URL, defaults::API_BASE_URL),
            api_key: env_var_or(env_config::API_KEY, ""),
            request_timeout_secs: parse_env_or(
                env_config::CLIENT_TIMEOUT_SECS,
                retry::REQUEST_TIMEOUT_SECS,
            ),
            connect_timeout_secs: parse_env_or(
                env_config::CLIENT_CONNECT_TIMEOUT_SECS,
                retry::CONNECT_TIMEOUT_SECS,
            ),
            max_retries: parse_env_or(env_config::CLIENT_MAX_RETRIES, retry::MAX_RETRIES),
            retry_base_delay_ms: parse_env_or(
                env_config::CLIENT_RETRY_BASE_DELAY_MS,
                retry::RETRY_BASE_DELAY_MS,
            ),
        }
    }

    /// Client configuration derived from these settings
    #[must_use]
    pub fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::new(self.base_url.as_str(), self.api_key.as_str())
            .with_retry(RetryPolicy::new(
                self.max_retries,
                Duration::from_millis(self.retry_base_delay_ms),
            ))
            .with_request_timeout(Duration::from_secs(self.request_timeout_secs));
        config.connect_timeout = Duration::from_secs(self.connect_timeout_secs);
        config
    }
}

/// CORS configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    /// `*` or a comma-separated origin list
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: "*".to_owned(),
        }
    }
}

/// Server configuration
#[derive(Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Remote API settings
    pub api: ApiConfig,
    /// Shared secret for the revalidate endpoint; `None` leaves it open
    pub revalidate_secret: Option<String>,
    /// Delay before the single outer page render retry
    pub render_retry_delay_secs: u64,
    /// CORS settings
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: defaults::HTTP_PORT,
            environment: Environment::default(),
            api: ApiConfig::default(),
            revalidate_secret: None,
            render_retry_delay_secs: retry::RENDER_RETRY_DELAY_SECS,
            cors: CorsConfig::default(),
        }
    }
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("http_port", &self.http_port)
            .field("environment", &self.environment)
            .field("api", &self.api)
            .field("revalidate_secret", &self.revalidate_secret.as_ref().map(|_| "<redacted>"))
            .field("render_retry_delay_secs", &self.render_retry_delay_secs)
            .field("cors", &self.cors)
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// Unparseable numeric values fall back to their defaults with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote API URL is not an http(s) URL
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            http_port: parse_env_or(env_config::HTTP_PORT, defaults::HTTP_PORT),
            environment: Environment::from_str_or_default(&env_var_or(
                env_config::ENVIRONMENT,
                "development",
            )),
            api: ApiConfig::from_env(),
            revalidate_secret: optional_env(env_config::REVALIDATE_SECRET),
            render_retry_delay_secs: parse_env_or(
                env_config::RENDER_RETRY_DELAY_SECS,
                retry::RENDER_RETRY_DELAY_SECS,
            ),
            cors: CorsConfig {
                allowed_origins: env_var_or(env_config::CORS_ALLOWED_ORIGINS, "*"),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints
    ///
    /// # Errors
    ///
    /// Returns an error if the remote API URL is not an http(s) URL
    pub fn validate(&self) -> Result<()> {
        let base_url = &self.api.base_url;
        ensure!(
            base_url.starts_with("http://") || base_url.starts_with("https://"),
            "{} must be an http(s) URL, got '{base_url}'",
            env_config::API_URL
        );
        if self.api.api_key.is_empty() {
            warn!("{} is not set; remote requests will carry an empty bearer token", env_config::API_KEY);
        }
        if self.revalidate_secret.is_none() && self.environment.is_production() {
            warn!("{} is not set; the revalidate endpoint is open", env_config::REVALIDATE_SECRET);
        }
        Ok(())
    }

    /// Outer page render retry derived from the configured delay
    #[must_use]
    pub fn render_retry_policy(&self) -> RenderRetryPolicy {
        RenderRetryPolicy::new(Duration::from_secs(self.render_retry_delay_secs))
    }

    /// Human-readable summary safe for logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Pulse Dashboard Configuration:\n\
             - HTTP Port: {}\n\
             - Environment: {}\n\
             - Remote API: {}\n\
             - API Key: {}\n\
             - Request Timeout: {}s (connect {}s)\n\
             - Retries: {} x {}ms linear\n\
             - Render Retry Delay: {}s\n\
             - Revalidate Secret: {}\n\
             - CORS Origins: {}",
            self.http_port,
            self.environment,
            self.api.base_url,
            if self.api.api_key.is_empty() { "Unset" } else { "Set" },
            self.api.request_timeout_secs,
            self.api.connect_timeout_secs,
            self.api.max_retries,
            self.api.retry_base_delay_ms,
            self.render_retry_delay_secs,
            if self.revalidate_secret.is_some() { "Set" } else { "Unset" },
            self.cors.allowed_origins,
        )
    }
}

/// Read a variable, falling back to `default` when unset
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Read a variable, treating unset and blank as absent
fn optional_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Parse a variable, warning and falling back to `default` when unparseable
fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: FromStr + fmt::Display,
{
    let Ok(raw) = env::var(key) else {
        return default;
    };
    raw.trim().parse().unwrap_or_else(|_| {
        warn!(variable = key, value = %raw, default = %default, "Invalid configuration value, using default");
        default
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parsing() {
        assert_eq!(Environment::from_str_or_default("prod"), Environment::Production);
        assert_eq!(Environment::from_str_or_default("TEST"), Environment::Testing);
        assert_eq!(Environment::from_str_or_default("staging"), Environment::Development);
    }

    #[test]
    fn test_client_config_mapping() {
        let api = ApiConfig {
            base_url: "https://api.example.test/".to_owned(),
            api_key: "k".to_owned(),
            request_timeout_secs: 12,
            connect_timeout_secs: 4,
            max_retries: 1,
            retry_base_delay_ms: 250,
        };
        let client = api.client_config();
        assert_eq!(client.base_url, "https://api.example.test");
        assert_eq!(client.request_timeout, Duration::from_secs(12));
        assert_eq!(client.connect_timeout, Duration::from_secs(4));
        assert_eq!(client.retry.max_retries, 1);
        assert_eq!(client.retry.base_delay, Duration::from_millis(250));
    }

    #[test]
    fn test_summary_hides_secrets() {
        let config = ServerConfig {
            api: ApiConfig {
                api_key: "very-secret".to_owned(),
                ..ApiConfig::default()
            },
            revalidate_secret: Some("also-secret".to_owned()),
            ..ServerConfig::default()
        };
        let summary = config.summary();
        assert!(!summary.contains("very-secret"));
        assert!(!summary.contains("also-secret"));
        let debug = format!("{config:?}");
        assert!(!debug.contains("very-secret"));
        assert!(!debug.contains("also-secret"));
    }

    #[test]
    fn test_validate_rejects_non_http_url() {
        let config = ServerConfig {
            api: ApiConfig {
                base_url: "ftp://files.example.test".to_owned(),
                ..ApiConfig::default()
            },
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());
        assert!(ServerConfig::default().validate().is_ok());
    }
}
