use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Unauthorized,
    Forbidden,
    NotFound,
    Validation,
    Internal,
}

impl ErrorCode {
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            400 | 409 | 422 => Self::Validation,
            _ => Self::Internal,
        }
    }
}

/// Error body written by the backend on failed requests.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub error: String,
}

#[derive(Debug, Clone, Error)]
#[error("{code:?} ({status}): {message}")]
pub struct ApiException {
    pub status: u16,
    pub code: ErrorCode,
    pub message: String,
}

impl ApiException {
    /// Builds an exception from a failed response's status and raw body,
    /// preferring the backend's `{"error": ...}` message when present.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ApiError>(body)
            .map(|api| api.error)
            .unwrap_or_else(|_| body.trim().to_string());
        Self {
            status,
            code: ErrorCode::from_status(status),
            message,
        }
    }
}
