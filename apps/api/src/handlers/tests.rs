use std::sync::Arc;

use axum::Json;
use axum::body::to_bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bizreviews_core::AppError;
use bizreviews_infrastructure::InMemoryResourceRepository;
use serde_json::{Value, json};

use super::{fallback, photos, reviews};
use crate::error::ApiError;
use crate::state::AppState;

fn app_state() -> AppState {
    AppState::new(Arc::new(InMemoryResourceRepository::new()))
}

async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap_or_default();
    serde_json::from_slice(&bytes).unwrap_or(Value::Null)
}

async fn create_photo(state: &AppState, body: Value) -> Response {
    photos::create_photo_handler(State(state.clone()), Ok(Json(body)))
        .await
        .into_response()
}

async fn get_photo(state: &AppState, id: &str) -> Response {
    photos::get_photo_handler(State(state.clone()), Path(id.to_owned()))
        .await
        .into_response()
}

async fn update_photo(state: &AppState, id: &str, body: Value) -> Response {
    photos::update_photo_handler(State(state.clone()), Path(id.to_owned()), Ok(Json(body)))
        .await
        .into_response()
}

async fn delete_photo(state: &AppState, id: &str) -> Response {
    photos::delete_photo_handler(State(state.clone()), Path(id.to_owned()))
        .await
        .into_response()
}

async fn create_review(state: &AppState, body: Value) -> Response {
    reviews::create_review_handler(State(state.clone()), Ok(Json(body)))
        .await
        .into_response()
}

#[tokio::test]
async fn photo_lifecycle_end_to_end() {
    let state = app_state();

    let created = create_photo(&state, json!({"userid": 1, "businessid": 2, "caption": "x"})).await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let created = body_json(created).await;
    let id = created["id"].as_i64().unwrap_or_default().to_string();
    assert_eq!(created["links"]["photo"], json!(format!("/photos/{id}")));
    assert_eq!(created["links"]["business"], json!("/businesses/2"));

    let fetched = get_photo(&state, &id).await;
    assert_eq!(fetched.status(), StatusCode::OK);
    let fetched = body_json(fetched).await;
    assert_eq!(fetched["userid"], json!(1));
    assert_eq!(fetched["businessid"], json!(2));
    assert_eq!(fetched["caption"], json!("x"));

    let updated = update_photo(
        &state,
        &id,
        json!({"userid": 1, "businessid": 2, "caption": "y"}),
    )
    .await;
    assert_eq!(updated.status(), StatusCode::OK);
    let updated = body_json(updated).await;
    assert_eq!(updated["links"]["photo"], json!(format!("/photos/{id}")));
    assert!(updated.get("id").is_none());

    let reassigned = update_photo(
        &state,
        &id,
        json!({"userid": 99, "businessid": 2, "caption": "y"}),
    )
    .await;
    assert_eq!(reassigned.status(), StatusCode::FORBIDDEN);
    let fetched = body_json(get_photo(&state, &id).await).await;
    assert_eq!(fetched["caption"], json!("y"));
    assert_eq!(fetched["userid"], json!(1));

    let deleted = delete_photo(&state, &id).await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let missing = get_photo(&state, &id).await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_bodies_are_bad_requests() {
    let state = app_state();

    let missing_field = create_photo(&state, json!({"businessid": 2})).await;
    assert_eq!(missing_field.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(missing_field).await,
        json!({"error": "Request body is not a valid photo object"})
    );

    let not_object = create_review(&state, json!([1, 2, 3])).await;
    assert_eq!(not_object.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(not_object).await,
        json!({"error": "Request body is not a valid review object"})
    );
}

#[tokio::test]
async fn second_review_of_business_is_forbidden() {
    let state = app_state();
    let body = json!({"userid": 7, "businessid": 3, "dollars": 2, "stars": 4});

    let first = create_review(&state, body.clone()).await;
    assert_eq!(first.status(), StatusCode::CREATED);
    let first = body_json(first).await;
    assert_eq!(first["links"]["business"], json!("/businesses/3"));

    let second = create_review(&state, body).await;
    assert_eq!(second.status(), StatusCode::FORBIDDEN);
    assert_eq!(
        body_json(second).await,
        json!({"error": "User has already posted a review of this business"})
    );

    let review_id = first["id"].as_i64().unwrap_or_default().to_string();
    let fetched = reviews::get_review_handler(State(state.clone()), Path(review_id))
        .await
        .into_response();
    assert_eq!(fetched.status(), StatusCode::OK);
    assert_eq!(body_json(fetched).await["stars"], json!(4));
}

#[tokio::test]
async fn not_found_outcomes_share_the_fallback_body() {
    let state = app_state();
    let fallback_body = body_json(fallback::not_found_handler().await).await;

    let responses = vec![
        get_photo(&state, "41").await,
        update_photo(&state, "41", json!({"userid": 1, "businessid": 2})).await,
        delete_photo(&state, "41").await,
        get_photo(&state, "not-a-number").await,
        reviews::get_review_handler(State(state.clone()), Path("41".to_owned()))
            .await
            .into_response(),
        reviews::delete_review_handler(State(state.clone()), Path("41".to_owned()))
            .await
            .into_response(),
    ];

    for response in responses {
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, fallback_body);
    }
}

#[tokio::test]
async fn store_failures_hide_details() {
    let response =
        ApiError::from(AppError::Internal("connection refused at 10.0.0.5".to_owned()))
            .into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(
        body,
        json!({"error": "Unable to process request. Please try again later."})
    );
}
