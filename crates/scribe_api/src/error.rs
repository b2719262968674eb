//! Mapping from service errors to HTTP responses.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use scribe_error::{
    DatabaseError, DatabaseErrorKind, InferenceError, ScribeError, ScribeErrorKind,
    ValidationError,
};
use serde_json::json;

/// Error returned by a handler, rendered as `{"detail": ...}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    /// Error with an explicit status.
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    /// 404 with the given detail.
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, detail)
    }

    /// 422 with the given detail.
    pub fn unprocessable(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, detail)
    }

    /// Response status.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Client-facing message.
    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl From<ScribeError> for ApiError {
    fn from(err: ScribeError) -> Self {
        let status = match err.kind() {
            ScribeErrorKind::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ScribeErrorKind::Database(e) if e.kind == DatabaseErrorKind::NotFound => {
                StatusCode::NOT_FOUND
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %err, "Request failed");
        } else {
            tracing::warn!(error = %err, "Request rejected");
        }

        Self::new(status, err.public_message())
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ScribeError::from(err).into()
    }
}

impl From<InferenceError> for ApiError {
    fn from(err: InferenceError) -> Self {
        ScribeError::from(err).into()
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        ScribeError::from(err).into()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!(error = %rejection, "Rejected request body");
        Self::unprocessable(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::warn!(error = %rejection, "Rejected query string");
        Self::unprocessable(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;
