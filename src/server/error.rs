//! Server Error Types
//!
//! Startup and shutdown failures. Request handlers never fail: remote
//! errors end up in the page's error banner instead.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    /// Binding the listener failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The server stopped unexpectedly
    #[error("Internal error: {0}")]
    Internal(String),
}
