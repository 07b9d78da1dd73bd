//! Client error types

use http::StatusCode;
use shared::{ApiResponse, ErrorCode};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Structured error returned by the server
    #[error("API error {code}: {message}")]
    Api { code: ErrorCode, message: String },

    /// Authentication required or rejected
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Local session file could not be read or written
    #[error("Session storage error: {0}")]
    Session(#[from] std::io::Error),
}

impl ClientError {
    /// Build an error from a non-success response.
    ///
    /// A JSON `AppError` body wins; otherwise the status decides. The guard's
    /// plain-text `Nope.` lands in `Unauthorized`.
    pub fn from_response(status: StatusCode, body: &[u8]) -> Self {
        if let Ok(api) = serde_json::from_slice::<ApiResponse<serde_json::Value>>(body)
            && let Some(err) = api.into_error()
        {
            return Self::Api {
                code: err.code,
                message: err.message,
            };
        }

        let text = String::from_utf8_lossy(body).trim().to_string();
        match status {
            StatusCode::UNAUTHORIZED => Self::Unauthorized(text),
            StatusCode::NOT_FOUND => Self::NotFound(text),
            _ => Self::Internal(format!("{status}: {text}")),
        }
    }

    /// Server-side code, when the server sent one
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
