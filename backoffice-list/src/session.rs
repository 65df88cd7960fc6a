//! One page's record list and the operations on it.

use crate::{ListResult, RefreshBus};
use backoffice_reorder::{Prioritized, Reorderer, StorePriorityWriter};
use backoffice_store::{EntityStore, ListFilter};
use backoffice_types::EntityId;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

/// What a successful save did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created(EntityId),
    Updated(EntityId),
}

/// Owns one list page's records for the lifetime of the page.
///
/// Exactly one session owns a record list at a time; snapshots handed
/// out by [`records`](Self::records) are read-only views and every
/// mutation goes through the session. Persistence failures propagate to
/// the caller, which keeps its dialog open so the user can retry.
pub struct ListSession<T> {
    store: Arc<dyn EntityStore<T>>,
    reorderer: Reorderer,
    filter: ListFilter,
    topic: String,
    refresh: Option<RefreshBus>,
    records: Vec<T>,
}

impl<T> ListSession<T>
where
    T: Prioritized + Clone + Serialize + Send + Sync + 'static,
{
    /// Creates a session over one collection.
    ///
    /// `topic` names the collection on the refresh bus ("menus",
    /// "restaurants", ...). The session starts empty; call
    /// [`load`](Self::load) to populate it.
    pub fn new(store: Arc<dyn EntityStore<T>>, topic: impl Into<String>, filter: ListFilter) -> Self {
        let writer = StorePriorityWriter::new(Arc::clone(&store));
        Self {
            store,
            reorderer: Reorderer::new(Arc::new(writer)),
            filter,
            topic: topic.into(),
            refresh: None,
            records: Vec::new(),
        }
    }

    /// Notifies this bus after every successful save or removal.
    #[must_use]
    pub fn with_refresh(mut self, bus: RefreshBus) -> Self {
        self.refresh = Some(bus);
        self
    }

    /// Replaces the reorderer (to attach a write-failure observer).
    #[must_use]
    pub fn with_reorderer(mut self, reorderer: Reorderer) -> Self {
        self.reorderer = reorderer;
        self
    }

    /// Fetches the collection and adopts it, sorted by priority.
    ///
    /// This is the reconciliation point after failed priority writes:
    /// whatever the remote holds becomes the session's truth.
    pub async fn load(&mut self) -> ListResult<&[T]> {
        let mut records = self.store.list(self.filter.clone()).await?;
        records.sort_by_key(Prioritized::priority);
        debug!(topic = %self.topic, count = records.len(), "loaded records");
        self.records = records;
        Ok(&self.records)
    }

    /// Persists a validated working copy.
    ///
    /// With an id the save is an edit (full-record patch); without one
    /// it is a create. On success the refresh bus is notified; the
    /// session itself is not reloaded; the owning page decides when.
    pub async fn save(&self, id: Option<EntityId>, values: &T) -> ListResult<SaveOutcome> {
        let outcome = match id {
            Some(id) => {
                let patch = serde_json::to_value(values).map_err(backoffice_store::StoreError::from)?;
                self.store.update(id, patch).await?;
                SaveOutcome::Updated(id)
            }
            None => SaveOutcome::Created(self.store.create(values).await?),
        };
        info!(topic = %self.topic, ?outcome, "saved record");
        self.notify();
        Ok(outcome)
    }

    /// Deletes a record remotely and drops it from the session.
    pub async fn remove(&mut self, id: EntityId) -> ListResult<()> {
        self.store.delete(id).await?;
        self.records.retain(|r| r.id() != id);
        info!(topic = %self.topic, %id, "removed record");
        self.notify();
        Ok(())
    }

    /// Applies a drop event: `source` was dragged onto `destination`.
    ///
    /// The session adopts the reorderer's snapshot immediately, sorted
    /// by priority for display; the priority writes it triggered are
    /// in flight when this returns.
    pub fn reorder(&mut self, source: EntityId, destination: EntityId) -> ListResult<&[T]> {
        let mut snapshot = self.reorderer.reorder(&self.records, source, destination)?;
        snapshot.sort_by_key(Prioritized::priority);
        self.records = snapshot;
        Ok(&self.records)
    }

    /// The current snapshot, in priority order.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    fn notify(&self) {
        if let Some(bus) = &self.refresh {
            bus.notify(&self.topic);
        }
    }
}
