use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use service::errors::StoreError;

/// Error surface of the public API: validation failures carry structured
/// per-field detail and never touch the backend; persistence failures pass
/// the error text through.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation failed")]
    Validation(serde_json::Value),
    #[error("{0}")]
    Persistence(String),
}

impl ApiError {
    /// Body-level rejection (malformed JSON, missing required field) mapped
    /// into the same 422 shape under a `body` pseudo-field.
    pub fn body(detail: String) -> Self {
        Self::Validation(json!({ "body": [detail] }))
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let fields = serde_json::to_value(&errors)
            .unwrap_or_else(|_| json!({ "body": [errors.to_string()] }));
        Self::Validation(fields)
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        Self::Persistence(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(fields) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "error": "validation failed", "fields": fields })),
            )
                .into_response(),
            ApiError::Persistence(msg) => {
                error!(error = %msg, "persistence failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": msg })),
                )
                    .into_response()
            }
        }
    }
}
