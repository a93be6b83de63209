//! Typed request-terminal errors for the REST surface.
//!
//! Every failure is synchronous and final: it maps straight to an HTTP
//! status plus a `{"detail": …}` body, nothing is retried. The legacy
//! generation's 200-with-error-body responses are built directly in its
//! handlers and never pass through this type.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Path id was zero or negative.
    #[error("Invalid task ID. Must be greater than 0.")]
    InvalidId,

    /// No task with the given id in the generation's store.
    #[error("No task found with id {0}")]
    NotFound(i64),

    /// Missing or wrong `X-API-Key` on a gated route.
    #[error("Invalid or missing API key")]
    Unauthorized,

    /// Structurally valid JSON carrying an empty required field.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidId => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized => StatusCode::FORBIDDEN,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
