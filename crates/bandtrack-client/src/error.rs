//! Client error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    /// The request never got an HTTP answer.
    #[error("Error connecting to server")]
    Connect(#[source] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("unexpected response body: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
}

impl ClientError {
    /// HTTP status of a rejection.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_connect(&self) -> bool {
        matches!(self, ClientError::Connect(_))
    }
}
