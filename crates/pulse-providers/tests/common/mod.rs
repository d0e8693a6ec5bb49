// ABOUTME: Scripted transport, recording sleeper, and payload fixtures for client tests
// ABOUTME: Lets retry and cache behavior be asserted without sockets or real delays
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(dead_code)]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use pulse_providers::{
    ClientConfig, FitnessApiClient, RawResponse, RetryPolicy, Sleeper, Transport, TransportError,
    TransportRequest,
};
use serde_json::{json, Value};

pub type Scripted = Result<RawResponse, TransportError>;

/// Plays back a fixed sequence of outcomes and records every request
#[derive(Default)]
pub struct ScriptedTransport {
    script: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<TransportRequest>>,
}

impl ScriptedTransport {
    pub fn new(script: Vec<Scripted>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn statuses(statuses: &[(u16, &str)]) -> Arc<Self> {
        Self::new(
            statuses
                .iter()
                .map(|(status, body)| Ok(RawResponse::new(*status, *body)))
                .collect(),
        )
    }

    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn attempts(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: &TransportRequest) -> Result<RawResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .expect("transport called more times than scripted")
    }
}

/// Never answers; used to exercise the per-attempt timeout
#[derive(Default)]
pub struct HangingTransport {
    calls: Mutex<usize>,
}

impl HangingTransport {
    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl Transport for HangingTransport {
    async fn send(&self, _request: &TransportRequest) -> Result<RawResponse, TransportError> {
        *self.calls.lock().unwrap() += 1;
        std::future::pending().await
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

    pub fn total(&self) -> Duration {
        self.delays().into_iter().sum()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.delays.lock().unwrap().push(duration);
    }
}

pub const BASE_URL: &str = "https://analytics.example.test";
pub const API_KEY: &str = "test-key";

pub fn config() -> ClientConfig {
    ClientConfig::new(BASE_URL, API_KEY).with_retry(RetryPolicy::default())
}

pub fn client_with(
    transport: Arc<dyn Transport>,
    sleeper: Arc<RecordingSleeper>,
) -> FitnessApiClient {
    FitnessApiClient::with_transport(config(), transport, sleeper)
}

fn running_stats(runs: u32, miles: f64) -> Value {
    json!({ "runs": runs, "miles": miles, "pace": "8:45", "time": "3:30:00" })
}

fn lifting_stats(workouts: u32) -> Value {
    json!({ "workouts": workouts, "total_sets": 48, "volume_lbs": 52_000 })
}

/// Weekly summary for the week of 2026-01-19 with no nutrition history
pub fn weekly_payload() -> Value {
    json!({
        "week_start": "2026-01-19",
        "week_end": "2026-01-25",
        "display_range": "Jan 19 - Jan 25",
        "adherence": {
            "planned": 8,
            "completed": 6,
            "percentage": 75,
            "days": [
                { "day": "Monday", "planned_gym": "Push", "completed_gym": true },
                { "day": "Tuesday", "planned_run": "Easy 5", "completed_run": false },
                { "day": "Sunday" }
            ]
        },
        "running": {
            "this_week": running_stats(4, 24.2),
            "last_week": running_stats(5, 28.0),
            "four_week_avg": running_stats(4, 25.5),
            "twelve_week_avg": running_stats(4, 22.1)
        },
        "lifting": {
            "this_week": lifting_stats(3),
            "last_week": lifting_stats(4)
        },
        "next_week": [
            { "date": "2026-01-26", "day_name": "Monday", "gym": "Push" }
        ]
    })
}

pub fn running_trend_payload() -> Value {
    json!([
        { "week_start": "2026-01-12", "miles": 26.0, "runs": 5, "elevation_m": 210, "time_seconds": 13_800 },
        { "week_start": "2026-01-19", "miles": 24.2, "runs": 4, "elevation_m": 180, "time_seconds": 12_700, "pace": "8:45" }
    ])
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
