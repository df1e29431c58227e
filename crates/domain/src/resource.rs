use bizreviews_core::{AppError, AppResult, ResourceId};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::ownership::Ownership;
use crate::schema::{FieldMap, ResourceSchema};
use crate::{PHOTO_SCHEMA, REVIEW_SCHEMA};

/// Entity types managed by the resource engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
    /// Photograph attached to a business.
    Photo,
    /// Written review of a business.
    Review,
}

impl ResourceKind {
    /// Returns the singular name used for link keys and log fields.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Photo => "photo",
            Self::Review => "review",
        }
    }

    /// Returns the relational table (and URL collection) name.
    #[must_use]
    pub fn table_name(&self) -> &'static str {
        match self {
            Self::Photo => "photos",
            Self::Review => "reviews",
        }
    }

    /// Returns the field schema governing validation and extraction.
    #[must_use]
    pub fn schema(&self) -> &'static ResourceSchema {
        match self {
            Self::Photo => &PHOTO_SCHEMA,
            Self::Review => &REVIEW_SCHEMA,
        }
    }

    /// Returns whether at most one resource may exist per (userid, businessid) pair.
    #[must_use]
    pub fn is_unique_per_owner(&self) -> bool {
        matches!(self, Self::Review)
    }

    /// Returns the canonical path of a single resource.
    #[must_use]
    pub fn resource_path(&self, id: ResourceId) -> String {
        format!("/{}/{id}", self.table_name())
    }
}

/// Raw persisted row: the store-assigned id plus schema columns.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceRow {
    id: ResourceId,
    fields: FieldMap,
}

impl ResourceRow {
    /// Creates a row projection.
    #[must_use]
    pub fn new(id: ResourceId, fields: FieldMap) -> Self {
        Self { id, fields }
    }

    /// Returns the surrogate key.
    #[must_use]
    pub fn id(&self) -> ResourceId {
        self.id
    }

    /// Returns the column values.
    #[must_use]
    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    /// Decodes the row into a typed record.
    ///
    /// The `id` always comes from the store key, never from column data.
    pub fn decode<R: DeserializeOwned>(self, kind: ResourceKind) -> AppResult<R> {
        let Self { id, mut fields } = self;
        fields.insert("id".to_owned(), Value::from(id.as_i64()));

        serde_json::from_value(Value::Object(fields)).map_err(|error| {
            AppError::Internal(format!(
                "persisted {} row '{id}' is invalid: {error}",
                kind.as_str()
            ))
        })
    }
}

/// Typed record of a resource kind.
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Resource kind handled by this record type.
    const KIND: ResourceKind;

    /// Returns the store-assigned id.
    fn id(&self) -> ResourceId;

    /// Returns the owning foreign keys.
    fn ownership(&self) -> Ownership;

    /// Decodes a persisted row into this record type.
    fn from_row(row: ResourceRow) -> AppResult<Self> {
        row.decode(Self::KIND)
    }
}

/// Cross-links returned after a successful create or update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLinks {
    kind: ResourceKind,
    id: ResourceId,
    businessid: i64,
}

impl ResourceLinks {
    /// Builds links for a resource and its parent business.
    #[must_use]
    pub fn new(kind: ResourceKind, id: ResourceId, businessid: i64) -> Self {
        Self {
            kind,
            id,
            businessid,
        }
    }

    /// Returns the resource kind the links describe.
    #[must_use]
    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Returns the linked resource id.
    #[must_use]
    pub fn id(&self) -> ResourceId {
        self.id
    }

    /// Returns the path of the resource itself.
    #[must_use]
    pub fn resource(&self) -> String {
        self.kind.resource_path(self.id)
    }

    /// Returns the path of the parent business.
    #[must_use]
    pub fn business(&self) -> String {
        format!("/businesses/{}", self.businessid)
    }
}

#[cfg(test)]
mod tests {
    use bizreviews_core::{AppError, ResourceId};
    use serde_json::json;

    use super::{ResourceKind, ResourceLinks, ResourceRow};
    use crate::Photo;

    #[test]
    fn links_point_at_resource_and_business() {
        let links = ResourceLinks::new(ResourceKind::Review, ResourceId::new(4), 12);
        assert_eq!(links.resource(), "/reviews/4");
        assert_eq!(links.business(), "/businesses/12");
    }

    #[test]
    fn decode_takes_id_from_store_key() {
        let fields = json!({"id": 999, "userid": 1, "businessid": 2, "caption": "x"});
        let row = ResourceRow::new(
            ResourceId::new(3),
            fields.as_object().cloned().unwrap_or_default(),
        );

        let photo = row.decode::<Photo>(ResourceKind::Photo);
        assert!(matches!(photo, Ok(photo) if photo.id == ResourceId::new(3)));
    }

    #[test]
    fn decode_rejects_rows_missing_columns() {
        let fields = json!({"userid": 1});
        let row = ResourceRow::new(
            ResourceId::new(3),
            fields.as_object().cloned().unwrap_or_default(),
        );

        let photo = row.decode::<Photo>(ResourceKind::Photo);
        assert!(matches!(photo, Err(AppError::Internal(_))));
    }

    #[test]
    fn only_reviews_are_unique_per_owner() {
        assert!(ResourceKind::Review.is_unique_per_owner());
        assert!(!ResourceKind::Photo.is_unique_per_owner());
    }
}
