//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use fileshelf_core::error::{AppError, ErrorKind};

/// Message sent in place of any server-side failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// API error response body: `{"error": "<message>"}`.
///
/// The message is one of a small fixed set per status, so clients can
/// match on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// The error message.
    pub error: String,
}

/// An [`AppError`] on its way out of a handler.
///
/// Handlers return `Result<_, ApiError>` and use `?` on service results.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl ApiError {
    /// HTTP status for the wrapped error.
    pub fn status(&self) -> StatusCode {
        match self.0.kind {
            ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorKind::InvalidArgument => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorKind::Internal
            | ErrorKind::Database
            | ErrorKind::Cache
            | ErrorKind::Configuration
            | ErrorKind::Serialization => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let err = self.0;

        // Infrastructure details stay in the logs.
        let body = if status.is_server_error() {
            tracing::error!(kind = %err.kind, error = ?err, "Request failed");
            ApiErrorResponse {
                error: INTERNAL_ERROR_MESSAGE.to_string(),
            }
        } else {
            ApiErrorResponse { error: err.message }
        };

        (status, Json(body)).into_response()
    }
}
