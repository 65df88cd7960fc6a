//! Entity-store capability for the Backoffice dashboard engine.
//!
//! List pages and forms talk to a remote collection through the
//! [`EntityStore`] trait: create, partial update, delete, filtered
//! list. The REST implementation targets the dashboard's HTTP+JSON
//! API; the in-memory implementation backs tests and supports
//! failure injection.

mod error;
mod memory;
mod rest;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use rest::RestStore;

use async_trait::async_trait;
use backoffice_types::EntityId;
use serde_json::Value;

/// Scoping applied to a `list` call.
///
/// Mirrors the dashboard's collection queries: an optional content
/// language and an optional owning-restaurant id (restaurant admins
/// only see their own records).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub lang: Option<String>,
    pub restaurant: Option<EntityId>,
}

impl ListFilter {
    /// An unscoped filter (full collection).
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Scopes results to one content language.
    #[must_use]
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    /// Scopes results to records owned by one restaurant.
    #[must_use]
    pub fn with_restaurant(mut self, restaurant: EntityId) -> Self {
        self.restaurant = Some(restaurant);
        self
    }
}

/// Asynchronous access to one remote collection of records.
///
/// `update` takes a partial JSON object and applies only the fields it
/// names; reorder writes always send `{"priority": n}` and nothing
/// else. Failures surface as [`StoreError`], and no retry happens at
/// this layer.
#[async_trait]
pub trait EntityStore<T>: Send + Sync {
    /// Persists a new record, returning its server-assigned id.
    async fn create(&self, record: &T) -> StoreResult<EntityId>;

    /// Applies a partial field set to an existing record.
    async fn update(&self, id: EntityId, patch: Value) -> StoreResult<()>;

    /// Removes a record.
    async fn delete(&self, id: EntityId) -> StoreResult<()>;

    /// Fetches the collection, scoped by `filter`.
    async fn list(&self, filter: ListFilter) -> StoreResult<Vec<T>>;
}
