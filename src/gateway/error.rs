//! Gateway errors.

use thiserror::Error;

/// Errors that can occur when talking to the remote event API.
///
/// Callers treat every variant as the same "fetch failed" outcome; the
/// variants only make the diagnostic log line meaningful.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Event API unavailable")]
    Unavailable,

    #[error("Request timeout")]
    Timeout,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl GatewayError {
    /// Classify a transport error the way the API client reports it
    pub(crate) fn from_transport(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            GatewayError::Timeout
        } else if e.is_connect() {
            GatewayError::Unavailable
        } else {
            GatewayError::Request(e)
        }
    }

    /// HTTP status of a rejected request, if the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;
