use serde_json::Value;

use crate::resource::Resource;
use crate::schema::FieldMap;

/// Owning foreign keys of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ownership {
    /// Authoring user.
    pub userid: i64,
    /// Parent business.
    pub businessid: i64,
}

impl Ownership {
    /// Creates an ownership pair.
    #[must_use]
    pub fn new(userid: i64, businessid: i64) -> Self {
        Self { userid, businessid }
    }

    /// Reads both foreign keys from a field map, if present as integers.
    #[must_use]
    pub fn from_fields(fields: &FieldMap) -> Option<Self> {
        let userid = fields.get("userid").and_then(Value::as_i64)?;
        let businessid = fields.get("businessid").and_then(Value::as_i64)?;
        Some(Self { userid, businessid })
    }
}

/// Returns true only if the candidate keeps the existing `userid` and `businessid`.
#[must_use]
pub fn check_ownership_unchanged<R: Resource>(existing: &R, candidate: &FieldMap) -> bool {
    Ownership::from_fields(candidate) == Some(existing.ownership())
}
