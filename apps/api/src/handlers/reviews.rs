use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use bizreviews_core::ResourceId;
use serde_json::Value;
use tracing::info;

use super::request_body;
use crate::dto::{CreatedResourceResponse, ReviewResponse, UpdatedResourceResponse};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn create_review_handler(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CreatedResourceResponse>)> {
    let created = state
        .review_service
        .create(request_body(payload).as_ref())
        .await?;

    info!(resource = "review", id = %created.id, "created resource");
    Ok((
        StatusCode::CREATED,
        Json(CreatedResourceResponse::from(created)),
    ))
}

pub async fn get_review_handler(
    State(state): State<AppState>,
    Path(review_id): Path<String>,
) -> ApiResult<Json<ReviewResponse>> {
    let review = state
        .review_service
        .get(review_id.parse::<ResourceId>()?)
        .await?;

    Ok(Json(ReviewResponse::from(review)))
}

pub async fn update_review_handler(
    State(state): State<AppState>,
    Path(review_id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<UpdatedResourceResponse>> {
    let id = review_id.parse::<ResourceId>()?;
    let links = state
        .review_service
        .update(id, request_body(payload).as_ref())
        .await?;

    info!(resource = "review", %id, "updated resource");
    Ok(Json(UpdatedResourceResponse::from(links)))
}

pub async fn delete_review_handler(
    State(state): State<AppState>,
    Path(review_id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = review_id.parse::<ResourceId>()?;
    state.review_service.delete(id).await?;

    info!(resource = "review", %id, "deleted resource");
    Ok(StatusCode::NO_CONTENT)
}
