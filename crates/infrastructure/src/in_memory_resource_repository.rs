use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use bizreviews_application::ResourceRepository;
use bizreviews_core::{AppError, AppResult, ResourceId};
use bizreviews_domain::{FieldMap, Ownership, ResourceKind, ResourceRow};
use serde_json::Value;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Table {
    last_id: i64,
    rows: BTreeMap<i64, FieldMap>,
}

impl Table {
    fn owner_taken(&self, ownership: Ownership, except: Option<i64>) -> bool {
        self.rows.iter().any(|(id, row)| {
            Some(*id) != except && Ownership::from_fields(row) == Some(ownership)
        })
    }
}

/// In-memory resource repository implementation.
///
/// Mirrors the relational constraints: ids come from a per-table sequence and
/// resources unique per owner reject a second (userid, businessid) pair.
#[derive(Debug, Default)]
pub struct InMemoryResourceRepository {
    tables: RwLock<HashMap<ResourceKind, Table>>,
}

impl InMemoryResourceRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl ResourceRepository for InMemoryResourceRepository {
    async fn insert(&self, kind: ResourceKind, fields: FieldMap) -> AppResult<ResourceId> {
        let mut tables = self.tables.write().await;
        let table = tables.entry(kind).or_default();

        if kind.is_unique_per_owner()
            && let Some(ownership) = Ownership::from_fields(&fields)
            && table.owner_taken(ownership, None)
        {
            return Err(owner_conflict_error(kind, ownership));
        }

        table.last_id += 1;
        table.rows.insert(table.last_id, fields);
        Ok(ResourceId::new(table.last_id))
    }

    async fn select_by_id(
        &self,
        kind: ResourceKind,
        id: ResourceId,
    ) -> AppResult<Option<ResourceRow>> {
        Ok(self
            .tables
            .read()
            .await
            .get(&kind)
            .and_then(|table| table.rows.get(&id.as_i64()))
            .map(|fields| ResourceRow::new(id, fields.clone())))
    }

    async fn update(&self, kind: ResourceKind, id: ResourceId, fields: FieldMap) -> AppResult<u64> {
        let mut tables = self.tables.write().await;
        let Some(table) = tables.get_mut(&kind) else {
            return Ok(0);
        };
        let Some(existing) = table.rows.get(&id.as_i64()) else {
            return Ok(0);
        };

        let mut merged = existing.clone();
        merged.extend(fields);

        if kind.is_unique_per_owner()
            && let Some(ownership) = Ownership::from_fields(&merged)
            && table.owner_taken(ownership, Some(id.as_i64()))
        {
            return Err(owner_conflict_error(kind, ownership));
        }

        table.rows.insert(id.as_i64(), merged);
        Ok(1)
    }

    async fn delete_by_id(&self, kind: ResourceKind, id: ResourceId) -> AppResult<u64> {
        let removed = self
            .tables
            .write()
            .await
            .get_mut(&kind)
            .and_then(|table| table.rows.remove(&id.as_i64()));

        Ok(u64::from(removed.is_some()))
    }

    async fn list_by_business(
        &self,
        kind: ResourceKind,
        businessid: i64,
    ) -> AppResult<Vec<ResourceRow>> {
        let tables = self.tables.read().await;
        let Some(table) = tables.get(&kind) else {
            return Ok(Vec::new());
        };

        Ok(table
            .rows
            .iter()
            .filter(|(_, row)| row.get("businessid").and_then(Value::as_i64) == Some(businessid))
            .map(|(id, row)| ResourceRow::new(ResourceId::new(*id), row.clone()))
            .collect())
    }
}

fn owner_conflict_error(kind: ResourceKind, ownership: Ownership) -> AppError {
    AppError::Conflict(format!(
        "{} for user '{}' and business '{}' already exists",
        kind.as_str(),
        ownership.userid,
        ownership.businessid
    ))
}

#[cfg(test)]
mod tests;
