pub mod fallback;
pub mod health;
pub mod photos;
pub mod reviews;

#[cfg(test)]
mod tests;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use serde_json::Value;
use tracing::debug;

/// Turns an unparseable body into an absent input so schema validation rejects it.
fn request_body(payload: Result<Json<Value>, JsonRejection>) -> Option<Value> {
    match payload {
        Ok(Json(value)) => Some(value),
        Err(rejection) => {
            debug!(error = %rejection, "request body is not JSON");
            None
        }
    }
}
