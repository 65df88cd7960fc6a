//! In-memory entity store.
//!
//! Backs tests and offline runs with the same capability surface as
//! the REST store. Records every `update` call in issuance order and
//! supports per-record failure injection so callers can exercise the
//! no-retry persistence contract.

use crate::{EntityStore, ListFilter, StoreError, StoreResult};
use async_trait::async_trait;
use backoffice_types::EntityId;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;
use tokio::sync::RwLock;

/// An in-memory collection of records keyed by id.
pub struct MemoryStore<T> {
    records: RwLock<Vec<(EntityId, T)>>,
    update_log: RwLock<Vec<(EntityId, Value)>>,
    failing: RwLock<HashSet<EntityId>>,
}

impl<T> MemoryStore<T> {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            update_log: RwLock::new(Vec::new()),
            failing: RwLock::new(HashSet::new()),
        }
    }

    /// Seeds a record under a known id (test setup).
    pub async fn insert(&self, id: EntityId, record: T) {
        self.records.write().await.push((id, record));
    }

    /// All `update` calls accepted or rejected so far, in issuance order.
    pub async fn update_log(&self) -> Vec<(EntityId, Value)> {
        self.update_log.read().await.clone()
    }

    /// Makes every future `update` for `id` fail.
    pub async fn fail_updates_for(&self, id: EntityId) {
        self.failing.write().await.insert(id);
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// True when no records are stored.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Merges the fields of a patch object into a record's JSON form.
fn apply_patch<T>(record: &T, patch: &Value) -> StoreResult<T>
where
    T: Serialize + DeserializeOwned,
{
    let Value::Object(fields) = patch else {
        return Err(StoreError::InvalidPatch(patch.to_string()));
    };
    let mut json = serde_json::to_value(record)?;
    let Value::Object(target) = &mut json else {
        return Err(StoreError::InvalidPatch("record is not an object".into()));
    };
    for (key, value) in fields {
        target.insert(key.clone(), value.clone());
    }
    Ok(serde_json::from_value(json)?)
}

#[async_trait]
impl<T> EntityStore<T> for MemoryStore<T>
where
    T: Serialize + DeserializeOwned + Clone + Send + Sync,
{
    async fn create(&self, record: &T) -> StoreResult<EntityId> {
        let id = EntityId::new();
        self.records.write().await.push((id, record.clone()));
        Ok(id)
    }

    async fn update(&self, id: EntityId, patch: Value) -> StoreResult<()> {
        self.update_log.write().await.push((id, patch.clone()));
        if self.failing.read().await.contains(&id) {
            return Err(StoreError::Injected(id));
        }
        let mut records = self.records.write().await;
        let Some((_, record)) = records.iter_mut().find(|(rid, _)| *rid == id) else {
            return Err(StoreError::NotFound(id));
        };
        *record = apply_patch(&*record, &patch)?;
        Ok(())
    }

    async fn delete(&self, id: EntityId) -> StoreResult<()> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|(rid, _)| *rid != id);
        if records.len() == before {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    async fn list(&self, filter: ListFilter) -> StoreResult<Vec<T>> {
        let records = self.records.read().await;
        let mut out = Vec::with_capacity(records.len());
        for (_, record) in records.iter() {
            if let Some(restaurant) = filter.restaurant {
                // Restaurant scoping inspects the serialized form, the
                // same field the REST API filters on.
                let json = serde_json::to_value(record)?;
                if json.get("restaurant") != Some(&Value::String(restaurant.to_string())) {
                    continue;
                }
            }
            out.push(record.clone());
        }
        Ok(out)
    }
}
