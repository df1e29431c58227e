//! Resource schemas, typed records, and mutation invariants.

#![forbid(unsafe_code)]

mod ownership;
mod photo;
mod resource;
mod review;
mod schema;

pub use ownership::{Ownership, check_ownership_unchanged};
pub use photo::{PHOTO_SCHEMA, Photo};
pub use resource::{Resource, ResourceKind, ResourceLinks, ResourceRow};
pub use review::{REVIEW_SCHEMA, Review, has_existing_review};
pub use schema::{FieldMap, FieldSpec, FieldType, ResourceSchema, extract, validate};
