use std::marker::PhantomData;
use std::sync::Arc;

use bizreviews_core::{AppError, AppResult, ResourceId};
use bizreviews_domain::{
    FieldMap, Ownership, Photo, Resource, ResourceLinks, Review, check_ownership_unchanged,
    has_existing_review,
};
use serde_json::Value;

use crate::ResourceRepository;

mod engine;
mod photos;
mod reviews;


pub use photos::PhotoService;
pub use reviews::ReviewService;

use engine::ResourceEngine;

/// Outcome of a successful create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedResource {
    /// Store-assigned id of the new resource.
    pub id: ResourceId,
    /// Links to the resource and its parent business.
    pub links: ResourceLinks,
}
