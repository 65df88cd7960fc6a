//! Applies reorder plans and issues persistence writes.

use crate::{plan, Prioritized, PriorityWriter, ReorderResult};
use backoffice_store::{EntityStore, StoreError, StoreResult};
use backoffice_types::{EntityId, Priority};
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, warn};

/// Receives persistence failures from in-flight priority writes.
///
/// There is no retry and no rollback behind this callback; it exists
/// so a page can surface a notification if it wants one.
pub trait ReorderObserver: Send + Sync {
    fn write_failed(&self, id: EntityId, error: StoreError);
}

/// Adapts any [`EntityStore`] into a [`PriorityWriter`] by sending
/// `{"priority": n}` partial updates.
pub struct StorePriorityWriter<S: ?Sized, T> {
    store: Arc<S>,
    _record: PhantomData<fn() -> T>,
}

impl<S: ?Sized, T> StorePriorityWriter<S, T> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }
}

#[async_trait::async_trait]
impl<S, T> PriorityWriter for StorePriorityWriter<S, T>
where
    S: EntityStore<T> + ?Sized,
    T: Send + Sync,
{
    async fn write_priority(&self, id: EntityId, priority: Priority) -> StoreResult<()> {
        self.store
            .update(id, serde_json::json!({ "priority": priority }))
            .await
    }
}

/// Converts drop events into updated snapshots plus persistence writes.
///
/// `reorder` returns the new in-memory snapshot synchronously; the
/// writes run in a background task, issued in plan order, without the
/// snapshot waiting on their completion. Overlapping drags are not
/// guarded against: while a previous move's writes are in flight the
/// remote list is an inconsistency window that only the next full
/// reload closes.
pub struct Reorderer {
    writer: Arc<dyn PriorityWriter>,
    observer: Option<Arc<dyn ReorderObserver>>,
}

impl Reorderer {
    pub fn new(writer: Arc<dyn PriorityWriter>) -> Self {
        Self {
            writer,
            observer: None,
        }
    }

    /// Attaches a failure observer for in-flight writes.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn ReorderObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Moves `source` onto `destination` within `records`.
    ///
    /// Returns a new snapshot with all priorities reassigned; the
    /// previous snapshot must be discarded by the caller. One write per
    /// reassignment is issued to the store, shift writes first, the
    /// moved record last; a failed write is logged, reported to the
    /// observer, and otherwise ignored.
    ///
    /// Must be called from within a tokio runtime.
    pub fn reorder<R>(
        &self,
        records: &[R],
        source: EntityId,
        destination: EntityId,
    ) -> ReorderResult<Vec<R>>
    where
        R: Prioritized + Clone,
    {
        let plan = plan(records, source, destination)?;
        if plan.is_noop() {
            return Ok(records.to_vec());
        }

        let mut snapshot = records.to_vec();
        plan.apply(&mut snapshot);
        debug!(%source, %destination, writes = plan.writes().len(), "reorder planned");

        let writes: Vec<_> = plan.writes().to_vec();
        let writer = Arc::clone(&self.writer);
        let observer = self.observer.clone();
        tokio::spawn(async move {
            for write in writes {
                if let Err(error) = writer.write_priority(write.id, write.priority).await {
                    warn!(id = %write.id, priority = %write.priority, %error,
                        "priority write failed; remote stale until next reload");
                    if let Some(observer) = &observer {
                        observer.write_failed(write.id, error);
                    }
                }
            }
        });

        Ok(snapshot)
    }
}
