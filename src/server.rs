// ABOUTME: HTTP server assembly and lifecycle for the dashboard
// ABOUTME: Merges route groups, applies tracing and CORS layers, and serves until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::future;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{body::Body, http::Uri, Router};
use pulse_core::errors::AppError;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::config::ServerConfig;
use crate::middleware::{create_request_span, setup_cors};
use crate::resources::ServerResources;
use crate::routes::{HealthRoutes, InjuryRoutes, PageRoutes, RevalidateRoutes};

/// Dashboard HTTP server
#[derive(Debug, Clone)]
pub struct DashboardServer {
    resources: Arc<ServerResources>,
}

impl DashboardServer {
    /// Server over production resources built from `config`
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self::with_resources(Arc::new(ServerResources::new(Arc::new(config))))
    }

    /// Server over prebuilt resources
    #[must_use]
    pub const fn with_resources(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Shared resources
    #[must_use]
    pub const fn resources(&self) -> &Arc<ServerResources> {
        &self.resources
    }

    /// Complete router with every route group and layer
    pub fn router(&self) -> Router {
        build_router(Arc::clone(&self.resources))
    }

    /// Bind the configured port and serve until ctrl-c or SIGTERM
    ///
    /// # Errors
    ///
    /// Returns an error if the port cannot be bound or the server fails.
    pub async fn run(self) -> Result<()> {
        let port = self.resources.config.http_port;
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind dashboard server to {addr}"))?;

        info!(%addr, "Dashboard server listening");
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Dashboard server terminated with an error")?;

        info!("Dashboard server stopped");
        Ok(())
    }
}

/// Merge all route groups and apply the tracing and CORS layers
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config.cors);

    Router::new()
        .merge(HealthRoutes::routes())
        .merge(PageRoutes::routes(Arc::clone(&resources)))
        .merge(InjuryRoutes::routes(Arc::clone(&resources)))
        .merge(RevalidateRoutes::routes(resources))
        .fallback(handle_not_found)
        .layer(TraceLayer::new_for_http().make_span_with(create_request_span::<Body>))
        .layer(cors)
}

async fn handle_not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("Route {}", uri.path()))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install ctrl-c handler");
            future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal as unix_signal, SignalKind};

        match unix_signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}
