//! Client error types

use thiserror::Error;

/// Errors surfaced by a [`Transport`](super::Transport) or while decoding
/// its response
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// The backend answered with a non-success status. `message` is the
    /// response body, or the status phrase when the body was empty.
    #[error("{message}")]
    RequestFailed { status: u16, message: String },

    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// The response body was not the expected JSON
    #[error("Parse error: {0}")]
    Decode(String),
}

impl ClientError {
    /// Build the error for a failed response from its body and status phrase
    pub fn request_failed(status: u16, body: String, status_text: &str) -> Self {
        let message = if body.is_empty() {
            status_text.to_string()
        } else {
            body
        };
        ClientError::RequestFailed { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
