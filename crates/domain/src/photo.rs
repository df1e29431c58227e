use bizreviews_core::ResourceId;
use serde::{Deserialize, Serialize};

use crate::ownership::Ownership;
use crate::resource::{Resource, ResourceKind};
use crate::schema::{FieldSpec, FieldType, ResourceSchema};

const PHOTO_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("userid", FieldType::Integer),
    FieldSpec::required("businessid", FieldType::Integer),
    FieldSpec::optional("caption", FieldType::Text),
];

/// Field schema of photo payloads.
pub const PHOTO_SCHEMA: ResourceSchema = ResourceSchema::new(PHOTO_FIELDS);

/// Photograph attached to a business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    /// Store-assigned id.
    pub id: ResourceId,
    /// Uploading user.
    pub userid: i64,
    /// Business the photo belongs to.
    pub businessid: i64,
    /// Optional caption text.
    pub caption: Option<String>,
}

impl Resource for Photo {
    const KIND: ResourceKind = ResourceKind::Photo;

    fn id(&self) -> ResourceId {
        self.id
    }

    fn ownership(&self) -> Ownership {
        Ownership::new(self.userid, self.businessid)
    }
}
