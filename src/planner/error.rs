//! Planner errors.

use thiserror::Error;

use crate::gateway::GatewayError;
use crate::model::DraftError;

/// Why a planner operation did not complete
#[derive(Error, Debug)]
pub enum PlannerError {
    /// The remote event API call failed
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// Form input could not be turned into a party draft
    #[error(transparent)]
    Draft(#[from] DraftError),
}

/// Result type for planner operations
pub type PlannerResult<T> = Result<T, PlannerError>;
