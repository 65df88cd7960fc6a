//! List-page orchestration.
//!
//! One [`ListSession`] owns one page's record list: it loads the
//! collection, persists creates and edits coming out of a validated
//! form, removes records, and adopts the snapshots produced by the
//! reorder protocol. Cross-page "something changed, reload" signaling
//! goes through a scoped [`RefreshBus`] whose subscriptions end when
//! the receiver is dropped. There is no process-global emitter.

mod refresh;
mod session;

pub use refresh::{RefreshBus, RefreshSignal};
pub use session::{ListSession, SaveOutcome};

use backoffice_reorder::ReorderError;
use backoffice_store::StoreError;

/// Result type for list-session operations.
pub type ListResult<T> = Result<T, ListError>;

/// Errors that can occur in list-session operations.
#[derive(Debug, thiserror::Error)]
pub enum ListError {
    /// The store rejected an operation.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// The drop event referenced a record not in this session's list.
    #[error("reorder error: {0}")]
    Reorder(#[from] ReorderError),
}
