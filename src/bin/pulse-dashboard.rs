// ABOUTME: Dashboard server binary entry point
// ABOUTME: Initializes logging, loads environment configuration with CLI overrides, and serves
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Pulse Dashboard Server Binary
//!
//! Serves the dashboard page view models and the injury write proxy over
//! the remote analytics API.

use std::env;

use anyhow::Result;
use clap::Parser;
use pulse_core::constants::pages;
use pulse_dashboard::{
    config::{load_config, ConfigOverrides},
    routes::revalidate::REVALIDATE_PATH,
    server::DashboardServer,
};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "pulse-dashboard")]
#[command(about = "Pulse - personal fitness dashboard over a remote analytics API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override remote API base URL
    #[arg(long)]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Containers may pass arguments clap does not understand
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Argument parsing failed: {e}");
            eprintln!("Using environment configuration only");
            Args {
                http_port: None,
                api_url: None,
            }
        }
    };

    let config = load_config(ConfigOverrides {
        http_port: args.http_port,
        api_url: args.api_url,
    })?;

    info!("Starting Pulse Dashboard");
    info!("{}", config.summary());
    display_available_endpoints(config.http_port);

    if let Err(e) = DashboardServer::new(config).run().await {
        error!("Server error: {e}");
        return Err(e);
    }

    Ok(())
}

fn display_available_endpoints(port: u16) {
    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());

    info!("=== Available Endpoints ===");
    for page in pages::ALL {
        info!("   Page:        GET  http://{host}:{port}{page}");
    }
    info!("   Injury:      POST http://{host}:{port}/api/injuries");
    info!("   Injury:      PUT  http://{host}:{port}/api/injuries/{{id}}");
    info!("   Revalidate:  POST http://{host}:{port}{REVALIDATE_PATH}");
    info!("   Health:      GET  http://{host}:{port}/health");
    info!("=== End of Endpoint List ===");
}
