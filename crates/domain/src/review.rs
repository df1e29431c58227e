use bizreviews_core::ResourceId;
use serde::{Deserialize, Serialize};

use crate::ownership::Ownership;
use crate::resource::{Resource, ResourceKind};
use crate::schema::{FieldSpec, FieldType, ResourceSchema};

const REVIEW_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("userid", FieldType::Integer),
    FieldSpec::required("businessid", FieldType::Integer),
    FieldSpec::required("dollars", FieldType::Integer),
    FieldSpec::required("stars", FieldType::Integer),
    FieldSpec::optional("review", FieldType::Text),
];

/// Field schema of review payloads.
pub const REVIEW_SCHEMA: ResourceSchema = ResourceSchema::new(REVIEW_FIELDS);

/// Written review of a business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Store-assigned id.
    pub id: ResourceId,
    /// Reviewing user.
    pub userid: i64,
    /// Reviewed business.
    pub businessid: i64,
    /// Price rating.
    pub dollars: i64,
    /// Star rating.
    pub stars: i64,
    /// Optional review body.
    pub review: Option<String>,
}

impl Resource for Review {
    const KIND: ResourceKind = ResourceKind::Review;

    fn id(&self) -> ResourceId {
        self.id
    }

    fn ownership(&self) -> Ownership {
        Ownership::new(self.userid, self.businessid)
    }
}

/// Returns true if any review was written by `userid` for `businessid`.
#[must_use]
pub fn has_existing_review<'a>(
    reviews: impl IntoIterator<Item = &'a Review>,
    userid: i64,
    businessid: i64,
) -> bool {
    reviews
        .into_iter()
        .any(|review| review.userid == userid && review.businessid == businessid)
}
