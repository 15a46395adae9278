//! Client error types

use shared::error::{ApiException, ErrorCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("request rejected: {0}")]
    Status(#[from] ApiException),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("session storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no active session; log in first")]
    NoSession,

    #[error("invalid input: {0}")]
    Validation(String),
}

impl ClientError {
    /// True when the caller should be sent back to the login step.
    pub fn requires_login(&self) -> bool {
        match self {
            Self::NoSession => true,
            Self::Status(err) => matches!(err.code, ErrorCode::Unauthorized | ErrorCode::Forbidden),
            _ => false,
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
