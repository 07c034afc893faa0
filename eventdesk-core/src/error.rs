//! Error types for eventdesk.

use thiserror::Error;

/// Errors that can occur in eventdesk operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The network exchange itself could not complete (unreachable host,
    /// DNS failure, timeout, reset connection).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The store answered with a non-success status.
    #[error("{message}")]
    Remote { status: u16, message: String },

    #[error("Invalid response from store: {0}")]
    InvalidResponse(String),

    /// Config file or client setup problem, including config file I/O.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// True when the request never got an answer from the store.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// HTTP status of a rejected request.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for eventdesk operations.
pub type EventDeskResult<T> = Result<T, Error>;
