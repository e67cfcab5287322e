//! Server State
//!
//! Shared by every handler. Cloning is cheap.

use std::sync::Arc;
use std::time::Instant;

use crate::planner::Planner;

/// Shared state for page and health handlers
#[derive(Clone)]
pub struct ServerState {
    /// Owner of the application state and rendered page
    pub planner: Arc<Planner>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl ServerState {
    pub fn new(planner: Arc<Planner>) -> Self {
        Self {
            planner,
            start_time: Instant::now(),
        }
    }

    /// Seconds since the server state was created
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
