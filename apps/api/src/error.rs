use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bizreviews_core::AppError;
use serde::Serialize;
use tracing::{debug, error};

use crate::handlers::fallback::not_found_response;

/// API error payload.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// HTTP API error wrapper around core application errors.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(value: AppError) -> Self {
        Self(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            AppError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            AppError::Forbidden(message) => (StatusCode::FORBIDDEN, message),
            AppError::Conflict(message) => (StatusCode::CONFLICT, message),
            AppError::NotFound(detail) => {
                debug!(%detail, "deferring to not-found fallback");
                return not_found_response();
            }
            AppError::Internal(detail) => {
                error!(error = %detail, "request failed in store");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Unable to process request. Please try again later.".to_owned(),
                )
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

/// Standard API result type.
pub type ApiResult<T> = Result<T, ApiError>;
