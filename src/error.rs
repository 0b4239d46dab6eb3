//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {var}: {message}")]
    Invalid { var: &'static str, message: String },
}

/// Outcome of a failed repository call. Only `NotFound` is distinguishable by callers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("user not found: {0}")]
    NotFound(String),
    #[error("{0}")]
    Unavailable(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unavailable: {0}")]
    Unavailable(String),
}

impl From<RepositoryError> for AppError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::NotFound(id) => AppError::NotFound(id),
            RepositoryError::Unavailable(msg) => AppError::Unavailable(msg),
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Clients only ever see the generic message; detail stays in the log.
        let (status, code, message) = match &self {
            AppError::NotFound(id) => {
                tracing::debug!(id = %id, "user not found");
                (StatusCode::NOT_FOUND, "not_found", "not found")
            }
            AppError::BadRequest(reason) => {
                tracing::warn!(reason = %reason, "rejected request");
                (StatusCode::BAD_REQUEST, "bad_request", "bad request")
            }
            AppError::Unavailable(detail) => {
                tracing::error!(error = %detail, "storage failure");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "service_unavailable",
                    "service unavailable",
                )
            }
        };
        let body = ErrorBody {
            error: ErrorDetail { code, message },
        };
        (status, Json(body)).into_response()
    }
}
