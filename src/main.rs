//! Party Planner page server
//!
//! Run with: cargo run --bin party-planner
//!
//! # Configuration
//!
//! Read from `config.toml` in the usual locations, then overridden by
//! environment variables:
//! - `PARTY_PLANNER_BASE_URL`: Remote service root
//! - `PARTY_PLANNER_COHORT`: Cohort path segment
//! - `PARTY_PLANNER_HOST`: Host to bind to (default: 127.0.0.1)
//! - `PARTY_PLANNER_PORT`: Port to listen on (default: 8084)
//! - `PARTY_PLANNER_LOG_LEVEL`: Log level (default: info)
//! - `RUST_LOG`: Full filter directive, takes precedence

use party_planner::config::Config;
use party_planner::gateway::HttpGateway;
use party_planner::planner::Planner;
use party_planner::server::{serve, ServerState};
use party_planner::telemetry;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_default();
    telemetry::init(&config.logging);

    tracing::info!("Starting Party Planner v{}", env!("CARGO_PKG_VERSION"));

    let gateway = HttpGateway::new(&config.gateway)?;
    tracing::info!("Remote service: {}", gateway.endpoints().parties());

    let planner = Arc::new(Planner::new(Arc::new(gateway)));

    // The page still serves with the error banner if the first load fails
    if let Err(e) = planner.bootstrap().await {
        tracing::warn!("Initial load incomplete: {}", e);
    }

    serve(ServerState::new(planner), &config.server).await?;

    tracing::info!("Party Planner stopped");
    Ok(())
}
