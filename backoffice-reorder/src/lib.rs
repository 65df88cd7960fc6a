//! Drag-reorder priority protocol.
//!
//! A list page displays records ordered by a dense integer priority.
//! When one record is dragged onto another, the gap it leaves is
//! closed by shifting only the contiguous run of records between the
//! old and new position (O(distance moved) reassignments instead of
//! renumbering the whole list), and each reassignment is persisted as
//! one absolute-priority write against the entity store.
//!
//! [`plan`] is the pure algorithm; [`Reorderer`] applies a plan to an
//! in-memory snapshot and issues the writes.

mod plan;
mod reorderer;

pub use plan::{plan, PriorityWrite, ReorderPlan};
pub use reorderer::{Reorderer, ReorderObserver, StorePriorityWriter};

use backoffice_store::StoreResult;
use backoffice_types::{EntityId, Priority};

/// Result type for reorder operations.
pub type ReorderResult<T> = Result<T, ReorderError>;

/// Errors that can occur when planning or applying a reorder.
#[derive(Debug, thiserror::Error)]
pub enum ReorderError {
    /// The source or destination id is not in the record list.
    #[error("record not in list: {0}")]
    UnknownRecord(EntityId),
}

/// A record that participates in priority ordering.
///
/// Within one sibling list, every record holds a distinct priority and
/// the values are dense from zero.
pub trait Prioritized {
    /// Stable unique identifier.
    fn id(&self) -> EntityId;

    /// Current position in the sibling list.
    fn priority(&self) -> Priority;

    /// Reassigns the position. Only the reorder protocol calls this.
    fn set_priority(&mut self, priority: Priority);
}

/// The persistence seam for priority writes.
///
/// One call per reassigned record, carrying the absolute new priority.
/// Implementations must not retry; a failure leaves that record's
/// remote priority stale until the next full list reload.
#[async_trait::async_trait]
pub trait PriorityWriter: Send + Sync {
    async fn write_priority(&self, id: EntityId, priority: Priority) -> StoreResult<()>;
}
