use std::sync::Arc;

use bizreviews_application::{PhotoService, ResourceRepository, ReviewService};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub photo_service: PhotoService,
    pub review_service: ReviewService,
}

impl AppState {
    pub fn new(repository: Arc<dyn ResourceRepository>) -> Self {
        Self {
            photo_service: PhotoService::new(repository.clone()),
            review_service: ReviewService::new(repository),
        }
    }
}
