use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::ErrorResponse;

/// Shared response for unmatched routes and missing resources alike.
pub fn not_found_response() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("Requested resource does not exist")),
    )
        .into_response()
}

pub async fn not_found_handler() -> Response {
    not_found_response()
}
