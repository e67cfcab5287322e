//! Health Routes
//!
//! - GET /health/live - Liveness check (process is alive)
//! - GET /health/ready - Readiness check (remote data loaded)
//! - GET /health - Full status

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::server::state::ServerState;

/// Body of `GET /health`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `healthy`, or `degraded` while the error banner is showing
    pub status: String,
    pub parties: usize,
    pub guests: usize,
    pub rsvps: usize,
    /// Renders since startup
    pub generation: u64,
    pub uptime_seconds: u64,
    pub version: String,
}

/// GET /health/live
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Ready once at least one gateway reply has reached the page. Failed
/// fetches render the error banner but do not count.
pub async fn readiness(State(state): State<Arc<ServerState>>) -> StatusCode {
    if state.planner.is_loaded().await {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// GET /health
pub async fn full_health(State(state): State<Arc<ServerState>>) -> Json<HealthResponse> {
    let app = state.planner.state().await;

    let status = if app.error.is_some() { "degraded" } else { "healthy" };

    Json(HealthResponse {
        status: status.to_string(),
        parties: app.parties.len(),
        guests: app.guests.len(),
        rsvps: app.rsvps.len(),
        generation: state.planner.generation().await,
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
