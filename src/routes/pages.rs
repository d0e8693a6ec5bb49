// ABOUTME: Dashboard page routes serving one JSON view model per tab
// ABOUTME: Each render is retried once on cold start and degrades to a loading error view
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Page routes
//!
//! A successful render responds `200` with the page view model. A render
//! that still fails after the outer retry responds `502` with a
//! [`LoadingErrorView`] so the client can show the tab's error state.

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use pulse_core::constants::pages;
use pulse_core::errors::UpstreamResult;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::dashboard::{
    daily, injuries, lifting, nutrition, race, render_with_retry, running, tabs, weekly,
    LoadingErrorView,
};
use crate::logging::DashboardLogger;
use crate::resources::ServerResources;

/// Query for the daily brief
#[derive(Debug, Default, Deserialize)]
struct DailyQuery {
    /// ISO date; today when absent
    #[serde(default)]
    date: Option<String>,
}

/// Query for the weekly summary
#[derive(Debug, Default, Deserialize)]
struct WeeklyQuery {
    /// Monday of the week; current week when absent
    #[serde(default)]
    week: Option<String>,
}

/// Page routes
pub struct PageRoutes;

impl PageRoutes {
    /// Create all page routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(pages::DAILY, get(Self::handle_daily))
            .route(pages::WEEKLY, get(Self::handle_weekly))
            .route(pages::RUNNING, get(Self::handle_running))
            .route(pages::LIFTING, get(Self::handle_lifting))
            .route(pages::NUTRITION, get(Self::handle_nutrition))
            .route(pages::RACE, get(Self::handle_race))
            .route(pages::INJURIES, get(Self::handle_injuries))
            .with_state(resources)
    }

    async fn handle_daily(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<DailyQuery>,
    ) -> Response {
        let client = &resources.resources;
        let date = query.date.as_deref();
        render_page(&resources, pages::DAILY, tabs::DAILY, || {
            daily::load(client, date)
        })
        .await
    }

    async fn handle_weekly(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<WeeklyQuery>,
    ) -> Response {
        let client = &resources.resources;
        let week = query.week.as_deref();
        render_page(&resources, pages::WEEKLY, tabs::WEEKLY, || {
            weekly::load(client, week)
        })
        .await
    }

    async fn handle_running(State(resources): State<Arc<ServerResources>>) -> Response {
        let client = &resources.resources;
        render_page(&resources, pages::RUNNING, tabs::RUNNING, || {
            running::load(client)
        })
        .await
    }

    async fn handle_lifting(State(resources): State<Arc<ServerResources>>) -> Response {
        let client = &resources.resources;
        render_page(&resources, pages::LIFTING, tabs::LIFTING, || {
            lifting::load(client)
        })
        .await
    }

    async fn handle_nutrition(State(resources): State<Arc<ServerResources>>) -> Response {
        let client = &resources.resources;
        render_page(&resources, pages::NUTRITION, tabs::NUTRITION, || {
            nutrition::load(client)
        })
        .await
    }

    async fn handle_race(State(resources): State<Arc<ServerResources>>) -> Response {
        let client = &resources.resources;
        render_page(&resources, pages::RACE, tabs::RACE, || race::load(client)).await
    }

    async fn handle_injuries(State(resources): State<Arc<ServerResources>>) -> Response {
        let client = &resources.resources;
        render_page(&resources, pages::INJURIES, tabs::INJURIES, || {
            injuries::load(client)
        })
        .await
    }
}

/// Render a page under the outer retry and map the outcome to a response
async fn render_page<T, F, Fut>(
    resources: &ServerResources,
    page: &str,
    tab_name: &str,
    render: F,
) -> Response
where
    T: Serialize,
    F: FnMut() -> Fut,
    Fut: Future<Output = UpstreamResult<T>>,
{
    let started = Instant::now();
    let result = render_with_retry(
        &resources.render_retry,
        resources.render_sleeper.as_ref(),
        page,
        render,
    )
    .await;
    let duration_ms = started.elapsed().as_millis() as u64;

    match result {
        Ok(view) => {
            DashboardLogger::log_page_render(page, true, duration_ms);
            (StatusCode::OK, Json(view)).into_response()
        }
        Err(error) => {
            warn!(page, error = %error, "Page render failed");
            DashboardLogger::log_page_render(page, false, duration_ms);
            let view = LoadingErrorView::from_error(tab_name, &error);
            (StatusCode::BAD_GATEWAY, Json(view)).into_response()
        }
    }
}
