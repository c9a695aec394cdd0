//! Scan Gate - Main Application Entry Point
//!
//! Registry front that blocks pulls of images whose vulnerability
//! severity reaches their project's threshold.

use anyhow::Context;
use scan_gate_api::{AppState, GateConfig};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,scan_gate=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = GateConfig::from_env()?;

    tracing::info!(
        "Starting Scan Gate on {} (scanner integration {})",
        config.bind_addr(),
        if config.with_scanner { "on" } else { "off" }
    );

    let app_state = Arc::new(
        AppState::from_config(&config).context("Failed to initialize lookup store")?,
    );

    let app = scan_gate_api::create_router(app_state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr()))?;
    axum::serve(listener, app).await?;

    Ok(())
}
