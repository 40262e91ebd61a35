//! API error types with IntoResponse
//!
//! Errors are converted to `{"error": "..."}` bodies with a status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::StoreError;
use crate::models::ValidationError;

/// Message used in place of store errors when redaction is on
pub const REDACTED_MESSAGE: &str = "an internal error occurred";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Body was not parseable JSON for the expected shape (400)
    InvalidJson,

    /// Update or delete touched no rows (404)
    NotFound { resource: &'static str },

    /// Store or driver failure (500, logged, message passed through)
    Store(StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidJson => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::InvalidJson => "invalid JSON".to_owned(),
            Self::NotFound { resource } => format!("{} not found", resource),
            Self::Store(e) => e.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Store(e) = &self {
            tracing::error!("Store error: {}", e);
        }

        let status = self.status();
        let body = json!({ "error": self.message() });

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { resource } => Self::NotFound { resource },
            _ => Self::Store(e),
        }
    }
}
