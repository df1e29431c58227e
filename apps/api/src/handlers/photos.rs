use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use bizreviews_core::ResourceId;
use serde_json::Value;
use tracing::info;

use super::request_body;
use crate::dto::{CreatedResourceResponse, PhotoResponse, UpdatedResourceResponse};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn create_photo_handler(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CreatedResourceResponse>)> {
    let created = state
        .photo_service
        .create(request_body(payload).as_ref())
        .await?;

    info!(resource = "photo", id = %created.id, "created resource");
    Ok((
        StatusCode::CREATED,
        Json(CreatedResourceResponse::from(created)),
    ))
}

pub async fn get_photo_handler(
    State(state): State<AppState>,
    Path(photo_id): Path<String>,
) -> ApiResult<Json<PhotoResponse>> {
    let photo = state
        .photo_service
        .get(photo_id.parse::<ResourceId>()?)
        .await?;

    Ok(Json(PhotoResponse::from(photo)))
}

pub async fn update_photo_handler(
    State(state): State<AppState>,
    Path(photo_id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<UpdatedResourceResponse>> {
    let id = photo_id.parse::<ResourceId>()?;
    let links = state
        .photo_service
        .update(id, request_body(payload).as_ref())
        .await?;

    info!(resource = "photo", %id, "updated resource");
    Ok(Json(UpdatedResourceResponse::from(links)))
}

pub async fn delete_photo_handler(
    State(state): State<AppState>,
    Path(photo_id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = photo_id.parse::<ResourceId>()?;
    state.photo_service.delete(id).await?;

    info!(resource = "photo", %id, "deleted resource");
    Ok(StatusCode::NO_CONTENT)
}
