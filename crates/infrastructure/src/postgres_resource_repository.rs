use async_trait::async_trait;
use bizreviews_application::ResourceRepository;
use bizreviews_core::{AppError, AppResult, ResourceId};
use bizreviews_domain::{FieldMap, FieldSpec, FieldType, ResourceKind, ResourceRow};
use serde_json::Value;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Postgres, QueryBuilder, Row};
use tracing::debug;

/// PostgreSQL-backed resource repository.
#[derive(Clone)]
pub struct PostgresResourceRepository {
    pool: PgPool,
}

impl PostgresResourceRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResourceRepository for PostgresResourceRepository {
    async fn insert(&self, kind: ResourceKind, fields: FieldMap) -> AppResult<ResourceId> {
        let columns = schema_columns(kind, &fields)?;
        if columns.is_empty() {
            return Err(AppError::Validation(format!(
                "cannot insert an empty {} row",
                kind.as_str()
            )));
        }

        let mut builder: QueryBuilder<'_, Postgres> =
            QueryBuilder::new(format!("INSERT INTO {} (", kind.table_name()));
        let mut names = builder.separated(", ");
        for (field, _) in &columns {
            names.push(field.name());
        }
        builder.push(") VALUES (");
        let mut values = builder.separated(", ");
        for (field, value) in &columns {
            match field.field_type() {
                FieldType::Integer => values.push_bind(value.as_i64()),
                FieldType::Text => values.push_bind(value.as_str().map(str::to_owned)),
            };
        }
        builder.push(") RETURNING id");

        let id = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(|error| {
                write_error(
                    error,
                    format!("failed to insert {} row", kind.as_str()),
                )
            })?;

        debug!(resource = kind.as_str(), id, "inserted resource row");
        Ok(ResourceId::new(id))
    }

    async fn select_by_id(
        &self,
        kind: ResourceKind,
        id: ResourceId,
    ) -> AppResult<Option<ResourceRow>> {
        let sql = format!(
            "SELECT {} FROM {} WHERE id = $1",
            select_list(kind),
            kind.table_name()
        );

        let row = sqlx::query(sql.as_str())
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(|error| {
                AppError::Internal(format!(
                    "failed to load {} '{}': {error}",
                    kind.as_str(),
                    id
                ))
            })?;

        row.map(|row| resource_row_from_pg(kind, &row)).transpose()
    }

    async fn update(&self, kind: ResourceKind, id: ResourceId, fields: FieldMap) -> AppResult<u64> {
        let columns = schema_columns(kind, &fields)?;
        if columns.is_empty() {
            return Err(AppError::Validation(format!(
                "no {} columns to update",
                kind.as_str()
            )));
        }

        let mut builder: QueryBuilder<'_, Postgres> =
            QueryBuilder::new(format!("UPDATE {} SET ", kind.table_name()));
        let mut assignments = builder.separated(", ");
        for (field, value) in &columns {
            assignments.push(field.name());
            assignments.push_unseparated(" = ");
            match field.field_type() {
                FieldType::Integer => assignments.push_bind_unseparated(value.as_i64()),
                FieldType::Text => {
                    assignments.push_bind_unseparated(value.as_str().map(str::to_owned))
                }
            };
        }
        builder.push(" WHERE id = ");
        builder.push_bind(id.as_i64());

        let result = builder.build().execute(&self.pool).await.map_err(|error| {
            write_error(
                error,
                format!("failed to update {} '{}'", kind.as_str(), id),
            )
        })?;

        debug!(
            resource = kind.as_str(),
            id = id.as_i64(),
            affected = result.rows_affected(),
            "updated resource row"
        );
        Ok(result.rows_affected())
    }

    async fn delete_by_id(&self, kind: ResourceKind, id: ResourceId) -> AppResult<u64> {
        let sql = format!("DELETE FROM {} WHERE id = $1", kind.table_name());

        let result = sqlx::query(sql.as_str())
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|error| {
                AppError::Internal(format!(
                    "failed to delete {} '{}': {error}",
                    kind.as_str(),
                    id
                ))
            })?;

        Ok(result.rows_affected())
    }

    async fn list_by_business(
        &self,
        kind: ResourceKind,
        businessid: i64,
    ) -> AppResult<Vec<ResourceRow>> {
        let sql = format!(
            "SELECT {} FROM {} WHERE businessid = $1 ORDER BY id",
            select_list(kind),
            kind.table_name()
        );

        let rows = sqlx::query(sql.as_str())
            .bind(businessid)
            .fetch_all(&self.pool)
            .await
            .map_err(|error| {
                AppError::Internal(format!(
                    "failed to list {} rows for business '{businessid}': {error}",
                    kind.as_str()
                ))
            })?;

        rows.iter()
            .map(|row| resource_row_from_pg(kind, row))
            .collect()
    }
}

/// Pairs supplied values with their schema declarations, in schema order.
fn schema_columns(
    kind: ResourceKind,
    fields: &FieldMap,
) -> AppResult<Vec<(&'static FieldSpec, &Value)>> {
    let schema = kind.schema();
    if let Some(unknown) = fields.keys().find(|name| schema.field(name).is_none()) {
        return Err(AppError::Validation(format!(
            "unknown {} column '{unknown}'",
            kind.as_str()
        )));
    }

    Ok(schema
        .fields()
        .iter()
        .filter_map(|field| fields.get(field.name()).map(|value| (field, value)))
        .collect())
}

fn select_list(kind: ResourceKind) -> String {
    std::iter::once("id")
        .chain(kind.schema().fields().iter().map(FieldSpec::name))
        .collect::<Vec<_>>()
        .join(", ")
}

fn resource_row_from_pg(kind: ResourceKind, row: &PgRow) -> AppResult<ResourceRow> {
    let decode_error = |error: sqlx::Error| {
        AppError::Internal(format!(
            "persisted {} row could not be decoded: {error}",
            kind.as_str()
        ))
    };

    let id = row.try_get::<i64, _>("id").map_err(decode_error)?;
    let mut fields = FieldMap::new();
    for field in kind.schema().fields() {
        let value = match field.field_type() {
            FieldType::Integer => row
                .try_get::<Option<i64>, _>(field.name())
                .map_err(decode_error)?
                .map(Value::from),
            FieldType::Text => row
                .try_get::<Option<String>, _>(field.name())
                .map_err(decode_error)?
                .map(Value::from),
        };
        fields.insert(field.name().to_owned(), value.unwrap_or(Value::Null));
    }

    Ok(ResourceRow::new(ResourceId::new(id), fields))
}

fn write_error(error: sqlx::Error, context: String) -> AppError {
    if let sqlx::Error::Database(database_error) = &error
        && database_error.code().as_deref() == Some("23505")
    {
        return AppError::Conflict(format!("{context}: {}", database_error.message()));
    }

    AppError::Internal(format!("{context}: {error}"))
}
