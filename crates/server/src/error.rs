//! HTTP error mapping for the dispatch API.
//!
//! Registry lookup failures are client errors; adapter failures are server
//! errors with the failure kind surfaced in the detail. Errors never crash
//! the serving process.

use arena_core::agents::{AdapterError, RegistryError};
use arena_protocol::ErrorBody;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Request-level failure, rendered as a status plus `{"detail": ...}`.
#[derive(Debug)]
pub enum ApiError {
    /// Unknown agent name (404).
    NotFound(String),

    /// Bare agent name shared by several frameworks (409).
    Ambiguous(String),

    /// Adapter invocation failure (5xx, kind preserved).
    Adapter(AdapterError),

    /// Anything that should not happen during dispatch (500).
    Internal(String),
}

impl From<RegistryError> for ApiError {
    fn from(error: RegistryError) -> Self {
        match error {
            RegistryError::NotFound(_) => Self::NotFound(error.to_string()),
            RegistryError::AmbiguousName { .. } => Self::Ambiguous(error.to_string()),
            // Duplicates are rejected at startup; seeing one here is a bug
            RegistryError::DuplicateAgent { .. } => Self::Internal(error.to_string()),
        }
    }
}

impl From<AdapterError> for ApiError {
    fn from(error: AdapterError) -> Self {
        Self::Adapter(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            Self::NotFound(detail) => (StatusCode::NOT_FOUND, detail),
            Self::Ambiguous(detail) => (StatusCode::CONFLICT, detail),
            Self::Internal(detail) => (StatusCode::INTERNAL_SERVER_ERROR, detail),
            Self::Adapter(error) => {
                let status = match error {
                    AdapterError::Timeout => StatusCode::GATEWAY_TIMEOUT,
                    AdapterError::Upstream(_) => StatusCode::BAD_GATEWAY,
                    AdapterError::InvalidModel(_) => StatusCode::INTERNAL_SERVER_ERROR,
                };
                (
                    status,
                    format!("Agent invocation failed ({}): {}", error.kind(), error),
                )
            }
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}
