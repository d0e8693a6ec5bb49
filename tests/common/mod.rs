// ABOUTME: Shared fixtures for dashboard route tests
// ABOUTME: Path-routed fake transport, recording sleeper, payloads, and router construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(dead_code)]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use pulse_dashboard::config::ServerConfig;
use pulse_dashboard::resources::ServerResources;
use pulse_dashboard::server::build_router;
use pulse_providers::{
    ClientConfig, FitnessApiClient, RawResponse, RetryPolicy, Sleeper, Transport, TransportError,
    TransportRequest,
};
use serde_json::{json, Value};

pub const BASE_URL: &str = "https://analytics.example.test";
pub const API_KEY: &str = "test-key";
pub const REVALIDATE_SECRET: &str = "s3cret";

pub type Scripted = Result<RawResponse, TransportError>;

/// Answers by URL path; the last scripted outcome for a path repeats
#[derive(Default)]
pub struct RoutingTransport {
    routes: Mutex<HashMap<String, VecDeque<Scripted>>>,
    requests: Mutex<Vec<TransportRequest>>,
}

impl RoutingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn script(&self, path: &str, outcomes: Vec<Scripted>) {
        self.routes
            .lock()
            .unwrap()
            .insert(path.to_owned(), outcomes.into());
    }

    pub fn respond(&self, path: &str, status: u16, body: &str) {
        self.script(path, vec![Ok(RawResponse::new(status, body))]);
    }

    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Requests whose URL path is exactly `path`
    pub fn hits(&self, path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|request| path_of(&request.url) == path)
            .count()
    }
}

fn path_of(url: &str) -> &str {
    let without_base = url.strip_prefix(BASE_URL).unwrap_or(url);
    without_base
        .split_once('?')
        .map_or(without_base, |(path, _)| path)
}

#[async_trait]
impl Transport for RoutingTransport {
    async fn send(&self, request: &TransportRequest) -> Result<RawResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        let mut routes = self.routes.lock().unwrap();
        let Some(queue) = routes.get_mut(path_of(&request.url)) else {
            return Err(TransportError::Network(format!(
                "no scripted response for {}",
                request.url
            )));
        };
        if queue.len() > 1 {
            queue.pop_front().unwrap()
        } else {
            queue.front().cloned().unwrap()
        }
    }
}

/// Records requested delays and returns immediately
#[derive(Default)]
pub struct RecordingSleeper {
    delays: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn delays(&self) -> Vec<Duration> {
        self.delays.lock().unwrap().clone()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.delays.lock().unwrap().push(duration);
    }
}

/// Router over a fake remote API plus the sleeper used between page re-renders
pub struct TestApp {
    pub router: Router,
    pub resources: Arc<ServerResources>,
    pub transport: Arc<RoutingTransport>,
    pub render_sleeper: Arc<RecordingSleeper>,
}

pub fn test_config() -> ServerConfig {
    ServerConfig {
        revalidate_secret: Some(REVALIDATE_SECRET.to_owned()),
        ..ServerConfig::default()
    }
}

/// App whose client makes a single attempt per request
pub fn test_app(transport: Arc<RoutingTransport>) -> TestApp {
    test_app_with(test_config(), transport)
}

pub fn test_app_with(config: ServerConfig, transport: Arc<RoutingTransport>) -> TestApp {
    let client_config = ClientConfig::new(BASE_URL, API_KEY).with_retry(RetryPolicy::no_retry());
    let api = FitnessApiClient::with_transport(
        client_config,
        transport.clone(),
        Arc::new(RecordingSleeper::default()),
    );
    let render_sleeper = Arc::new(RecordingSleeper::default());
    let resources = Arc::new(ServerResources::with_client(
        Arc::new(config),
        api,
        render_sleeper.clone(),
    ));

    TestApp {
        router: build_router(resources.clone()),
        resources,
        transport,
        render_sleeper,
    }
}

pub fn daily_payload(greeting: &str) -> Value {
    json!({
        "date": "2026-01-20",
        "day_name": "Tuesday",
        "display_date": "Jan 20",
        "workout_type": "run",
        "greeting": greeting
    })
}

pub fn injuries_payload() -> Value {
    json!({
        "available": true,
        "overview": { "total_injuries": 1, "active_injuries": 1, "most_affected_area": "knee" },
        "injuries": [],
        "active_injuries": [],
        "heatmap": [],
        "modifications": [],
        "upcoming_runs": [ { "date": "2026-01-20", "summary": "Easy 4" } ],
        "today_routine": null
    })
}
