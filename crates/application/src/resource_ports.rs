use async_trait::async_trait;
use bizreviews_core::{AppResult, ResourceId};
use bizreviews_domain::{FieldMap, ResourceKind, ResourceRow};

/// Repository port for resource persistence.
///
/// Implementations report connectivity or statement failures as
/// `AppError::Internal` and uniqueness violations as `AppError::Conflict`.
#[async_trait]
pub trait ResourceRepository: Send + Sync {
    /// Inserts a row built from the supplied columns and returns the assigned id.
    async fn insert(&self, kind: ResourceKind, fields: FieldMap) -> AppResult<ResourceId>;

    /// Loads a row by id.
    async fn select_by_id(
        &self,
        kind: ResourceKind,
        id: ResourceId,
    ) -> AppResult<Option<ResourceRow>>;

    /// Writes only the supplied columns and returns the affected row count.
    async fn update(&self, kind: ResourceKind, id: ResourceId, fields: FieldMap) -> AppResult<u64>;

    /// Deletes a row by id and returns the affected row count.
    async fn delete_by_id(&self, kind: ResourceKind, id: ResourceId) -> AppResult<u64>;

    /// Lists rows attached to a business.
    async fn list_by_business(
        &self,
        kind: ResourceKind,
        businessid: i64,
    ) -> AppResult<Vec<ResourceRow>>;
}
