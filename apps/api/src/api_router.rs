use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_handler))
        .route("/photos", post(handlers::photos::create_photo_handler))
        .route(
            "/photos/{photo_id}",
            get(handlers::photos::get_photo_handler)
                .put(handlers::photos::update_photo_handler)
                .delete(handlers::photos::delete_photo_handler),
        )
        .route("/reviews", post(handlers::reviews::create_review_handler))
        .route(
            "/reviews/{review_id}",
            get(handlers::reviews::get_review_handler)
                .put(handlers::reviews::update_review_handler)
                .delete(handlers::reviews::delete_review_handler),
        )
        .fallback(handlers::fallback::not_found_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
