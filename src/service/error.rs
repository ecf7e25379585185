//! Error types and response mapping for the counter service.
//!
//! Client faults (missing slug) surface with their message; everything
//! else degrades to a generic 500 body. Diagnostic detail never reaches
//! the response, only the server-side log.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur while handling a counter request.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Request validation failed (client's fault).
    #[error("{message}")]
    Validation { message: String },

    /// The backing store failed or returned a malformed value.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Anything else that should not leak past the service boundary.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn missing_slug() -> Self {
        ServiceError::Validation {
            message: "Missing slug parameter".to_string(),
        }
    }

    /// Map error variant to the HTTP status code of the response.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation { .. } => StatusCode::BAD_REQUEST,
            ServiceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = if status == StatusCode::BAD_REQUEST {
            self.to_string()
        } else {
            tracing::error!(error = %self, "request failed");
            "Internal server error".to_string()
        };

        let body = serde_json::json!({ "error": message });
        (status, Json(body)).into_response()
    }
}
