// ABOUTME: Resource accessor tests: paths, queries, staleness, and the weekly cold-start scenario
// ABOUTME: Verifies typed decoding and cache behavior through the public accessors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{
    client_with, injuries_payload, running_trend_payload, weekly_payload, RecordingSleeper,
    ScriptedTransport, BASE_URL,
};
use pulse_providers::ResourceClient;

#[tokio::test]
async fn test_weekly_summary_survives_two_cold_start_responses() {
    let weekly = weekly_payload().to_string();
    let transport = ScriptedTransport::statuses(&[
        (503, "Service Unavailable"),
        (503, "Service Unavailable"),
        (200, weekly.as_str()),
    ]);
    let sleeper = Arc::new(RecordingSleeper::default());
    let resources = ResourceClient::new(client_with(transport.clone(), sleeper.clone()));

    let data = resources.weekly(Some("2026-01-19")).await.unwrap();

    assert_eq!(data.week_start, "2026-01-19");
    assert_eq!(data.adherence.planned, 8);
    assert!(data.nutrition.is_none());
    assert!(data.lifting.key_lifts.is_none());
    assert_eq!(data.next_week.len(), 1);
    assert!(sleeper.total() >= Duration::from_millis(9000));
    assert_eq!(transport.attempts(), 3);

    let urls: Vec<String> = transport.requests().into_iter().map(|r| r.url).collect();
    let expected = format!("{BASE_URL}/api/dashboard/weekly?week_start=2026-01-19");
    assert!(urls.iter().all(|url| *url == expected));
}

#[tokio::test]
async fn test_trend_defaults_to_twelve_weeks() {
    let trend = running_trend_payload().to_string();
    let transport = ScriptedTransport::statuses(&[(200, trend.as_str()), (200, "[]")]);
    let sleeper = Arc::new(RecordingSleeper::default());
    let resources = ResourceClient::new(client_with(transport.clone(), sleeper));

    let running = resources.running_trend(None).await.unwrap();
    assert_eq!(running.len(), 2);
    assert_eq!(running[1].pace.as_deref(), Some("8:45"));
    assert!(running[0].pace.is_none());

    let lifting = resources.lifting_trend(Some(8)).await.unwrap();
    assert!(lifting.is_empty());

    let urls: Vec<String> = transport.requests().into_iter().map(|r| r.url).collect();
    assert_eq!(urls[0], format!("{BASE_URL}/api/running/trend?weeks=12"));
    assert_eq!(urls[1], format!("{BASE_URL}/api/lifting/trend?weeks=8"));
}

#[tokio::test]
async fn test_daily_without_date_sends_no_query() {
    let transport = ScriptedTransport::statuses(&[(404, "Not Found")]);
    let sleeper = Arc::new(RecordingSleeper::default());
    let resources = ResourceClient::new(client_with(transport.clone(), sleeper));

    assert!(resources.daily(None).await.is_err());
    assert_eq!(transport.requests()[0].url, format!("{BASE_URL}/api/dashboard/daily"));
}

#[tokio::test(start_paused = true)]
async fn test_cached_resource_served_within_window_then_refetched() {
    let injuries = injuries_payload().to_string();
    let transport = ScriptedTransport::statuses(&[(200, injuries.as_str()), (200, injuries.as_str())]);
    let sleeper = Arc::new(RecordingSleeper::default());
    let resources = ResourceClient::new(client_with(transport.clone(), sleeper));

    let first = resources.injuries_detail().await.unwrap();
    assert!(first.available);
    assert_eq!(first.overview.most_affected_area.as_deref(), Some("knee"));
    assert!(first.today_routine.is_none());

    tokio::time::advance(Duration::from_secs(30)).await;
    resources.injuries_detail().await.unwrap();
    assert_eq!(transport.attempts(), 1);

    tokio::time::advance(Duration::from_secs(31)).await;
    resources.injuries_detail().await.unwrap();
    assert_eq!(transport.attempts(), 2);
}

#[tokio::test]
async fn test_failed_fetch_is_not_cached() {
    let weekly = weekly_payload().to_string();
    let transport = ScriptedTransport::statuses(&[(401, "unauthorized"), (200, weekly.as_str())]);
    let sleeper = Arc::new(RecordingSleeper::default());
    let resources = ResourceClient::new(client_with(transport.clone(), sleeper));

    assert!(resources.weekly(None).await.is_err());
    assert!(resources.api().cache().is_empty());
    assert!(resources.weekly(None).await.is_ok());
    assert_eq!(resources.api().cache().len(), 1);
}

#[tokio::test]
async fn test_revalidation_forces_refetch() {
    let weekly = weekly_payload().to_string();
    let transport = ScriptedTransport::statuses(&[(200, weekly.as_str()), (200, weekly.as_str())]);
    let sleeper = Arc::new(RecordingSleeper::default());
    let resources = ResourceClient::new(client_with(transport.clone(), sleeper));

    resources.weekly(None).await.unwrap();
    resources.weekly(None).await.unwrap();
    assert_eq!(transport.attempts(), 1);

    assert_eq!(resources.api().cache().invalidate_prefix("/api/dashboard/weekly"), 1);
    resources.weekly(None).await.unwrap();
    assert_eq!(transport.attempts(), 2);
}
