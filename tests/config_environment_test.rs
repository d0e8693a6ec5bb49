// ABOUTME: Tests for environment-driven server configuration
// ABOUTME: Defaults, overrides, and logged fallbacks for unparseable values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::time::Duration;

use pulse_core::constants::env_config;
use pulse_dashboard::config::{Environment, ServerConfig};
use serial_test::serial;

const VARS: [&str; 10] = [
    env_config::API_URL,
    env_config::API_KEY,
    env_config::REVALIDATE_SECRET,
    env_config::HTTP_PORT,
    env_config::CLIENT_TIMEOUT_SECS,
    env_config::CLIENT_MAX_RETRIES,
    env_config::CLIENT_RETRY_BASE_DELAY_MS,
    env_config::RENDER_RETRY_DELAY_SECS,
    env_config::CORS_ALLOWED_ORIGINS,
    env_config::ENVIRONMENT,
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_when_environment_is_empty() {
    clear_env();

    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config.http_port, 3000);
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.api.base_url, "https://strava-mcp-e0fy.onrender.com");
    assert!(config.api.api_key.is_empty());
    assert_eq!(config.api.max_retries, 2);
    assert_eq!(config.revalidate_secret, None);
    assert_eq!(config.cors.allowed_origins, "*");

    let render = config.render_retry_policy();
    assert_eq!(render.max_retries, 1);
    assert_eq!(render.delay, Duration::from_secs(5));
}

#[test]
#[serial]
fn test_overrides_are_applied() {
    clear_env();
    env::set_var(env_config::API_URL, "https://api.example.test");
    env::set_var(env_config::API_KEY, "key-123");
    env::set_var(env_config::REVALIDATE_SECRET, "s3cret");
    env::set_var(env_config::HTTP_PORT, "8081");
    env::set_var(env_config::CLIENT_MAX_RETRIES, "4");
    env::set_var(env_config::ENVIRONMENT, "production");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.http_port, 8081);
    assert!(config.environment.is_production());
    assert_eq!(config.api.base_url, "https://api.example.test");
    assert_eq!(config.api.api_key, "key-123");
    assert_eq!(config.api.max_retries, 4);
    assert_eq!(config.revalidate_secret.as_deref(), Some("s3cret"));
}

#[test]
#[serial]
fn test_unparseable_numbers_fall_back_to_defaults() {
    clear_env();
    env::set_var(env_config::HTTP_PORT, "not-a-port");
    env::set_var(env_config::CLIENT_TIMEOUT_SECS, "-3");
    env::set_var(env_config::RENDER_RETRY_DELAY_SECS, "soon");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.http_port, 3000);
    assert_eq!(config.api.request_timeout_secs, 30);
    assert_eq!(config.render_retry_delay_secs, 5);
}

#[test]
#[serial]
fn test_blank_revalidate_secret_is_treated_as_unset() {
    clear_env();
    env::set_var(env_config::REVALIDATE_SECRET, "   ");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.revalidate_secret, None);
}

#[test]
#[serial]
fn test_non_http_api_url_is_rejected() {
    clear_env();
    env::set_var(env_config::API_URL, "localhost:8000");

    let result = ServerConfig::from_env();
    clear_env();

    assert!(result.is_err());
}
