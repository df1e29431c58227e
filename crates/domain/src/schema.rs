use std::collections::BTreeSet;

use bizreviews_core::{AppError, AppResult};
use serde_json::{Map, Value};

/// JSON object carrying resource fields keyed by field name.
pub type FieldMap = Map<String, Value>;

/// Storage type of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// 64-bit signed integer column.
    Integer,
    /// UTF-8 text column.
    Text,
}

impl FieldType {
    /// Returns a stable name for the field type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Text => "text",
        }
    }

    fn accepts(self, value: &Value) -> bool {
        match self {
            Self::Integer => value.as_i64().is_some(),
            Self::Text => value.is_string(),
        }
    }
}

/// Declaration of a single schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    name: &'static str,
    field_type: FieldType,
    required: bool,
}

impl FieldSpec {
    /// Declares a field that every create/update payload must carry.
    #[must_use]
    pub const fn required(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            required: true,
        }
    }

    /// Declares a field that payloads may omit.
    #[must_use]
    pub const fn optional(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            required: false,
        }
    }

    /// Returns the field (and column) name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the declared storage type.
    #[must_use]
    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    /// Returns whether the field is required.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
    }
}

/// Ordered, immutable field declaration for a resource kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceSchema {
    fields: &'static [FieldSpec],
}

impl ResourceSchema {
    /// Creates a schema from a static field list.
    #[must_use]
    pub const fn new(fields: &'static [FieldSpec]) -> Self {
        Self { fields }
    }

    /// Returns declared fields in schema order.
    #[must_use]
    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    /// Looks up a declared field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Returns declared field names.
    #[must_use]
    pub fn field_names(&self) -> BTreeSet<&'static str> {
        self.fields.iter().map(|field| field.name).collect()
    }

    /// Returns true when the input is an object carrying every required field.
    ///
    /// Unknown keys do not invalidate the input; extraction drops them later.
    /// A required field holding JSON `null` counts as missing.
    #[must_use]
    pub fn validate(&self, input: Option<&Value>) -> bool {
        let Some(object) = input.and_then(Value::as_object) else {
            return false;
        };

        self.fields
            .iter()
            .filter(|field| field.required)
            .all(|field| object.get(field.name).is_some_and(|value| !value.is_null()))
    }

    /// Projects the input down to schema-declared keys.
    ///
    /// Declared keys absent from the input stay absent from the result.
    #[must_use]
    pub fn extract(&self, input: &FieldMap) -> FieldMap {
        self.fields
            .iter()
            .filter_map(|field| {
                input
                    .get(field.name)
                    .map(|value| (field.name.to_owned(), value.clone()))
            })
            .collect()
    }

    /// Rejects present, non-null values whose JSON type does not match the declaration.
    pub fn check_field_types(&self, fields: &FieldMap) -> AppResult<()> {
        for (name, value) in fields {
            let Some(field) = self.field(name) else {
                return Err(AppError::Validation(format!("unknown field '{name}'")));
            };

            if value.is_null() {
                if field.required {
                    return Err(AppError::Validation(format!(
                        "field '{name}' must not be null"
                    )));
                }
                continue;
            }

            if !field.field_type.accepts(value) {
                return Err(AppError::Validation(format!(
                    "field '{name}' must be of type '{}'",
                    field.field_type.as_str()
                )));
            }
        }

        Ok(())
    }
}

/// Free-function form of [`ResourceSchema::validate`].
#[must_use]
pub fn validate(input: Option<&Value>, schema: &ResourceSchema) -> bool {
    schema.validate(input)
}

/// Free-function form of [`ResourceSchema::extract`].
#[must_use]
pub fn extract(input: &FieldMap, schema: &ResourceSchema) -> FieldMap {
    schema.extract(input)
}
