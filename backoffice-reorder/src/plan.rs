//! The pure shift-the-gap algorithm.

use crate::{Prioritized, ReorderError, ReorderResult};
use backoffice_types::{EntityId, Priority};

/// One priority reassignment: `id` takes `priority`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityWrite {
    pub id: EntityId,
    pub priority: Priority,
}

/// The ordered set of reassignments for one drag-and-drop move.
///
/// Shift writes come first, in ascending priority order of the
/// affected run; the moved record's own write is always last. An empty
/// plan means the move was a no-op (source dropped onto itself).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReorderPlan {
    writes: Vec<PriorityWrite>,
}

impl ReorderPlan {
    /// All reassignments in issuance order.
    #[must_use]
    pub fn writes(&self) -> &[PriorityWrite] {
        &self.writes
    }

    /// True when the move changes nothing.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.writes.is_empty()
    }

    /// Assigns every planned priority to its record in `records`.
    ///
    /// The priority value set is unchanged by construction: the plan
    /// permutes which record holds which value.
    pub fn apply<R: Prioritized>(&self, records: &mut [R]) {
        for write in &self.writes {
            if let Some(record) = records.iter_mut().find(|r| r.id() == write.id) {
                record.set_priority(write.priority);
            }
        }
    }
}

/// Plans the reassignments for moving `source` onto `destination`.
///
/// With `p1` the source's priority and `p2` the destination's:
/// - `p1 == p2`: empty plan.
/// - `p1 > p2` (moved toward the front): every other record in
///   `p2 <= p < p1` shifts back by one.
/// - `p1 < p2` (moved toward the back): every other record in
///   `p1 < p <= p2` shifts forward by one.
///
/// The moved record then takes `p2`.
pub fn plan<R: Prioritized>(
    records: &[R],
    source: EntityId,
    destination: EntityId,
) -> ReorderResult<ReorderPlan> {
    let p1 = find(records, source)?.priority();
    let p2 = find(records, destination)?.priority();

    if p1 == p2 {
        return Ok(ReorderPlan::default());
    }

    let mut shifted: Vec<&R> = records
        .iter()
        .filter(|r| r.id() != source)
        .filter(|r| {
            let p = r.priority();
            if p1 > p2 {
                p2 <= p && p < p1
            } else {
                p1 < p && p <= p2
            }
        })
        .collect();
    shifted.sort_by_key(|r| r.priority());

    let mut writes: Vec<PriorityWrite> = shifted
        .into_iter()
        .map(|r| PriorityWrite {
            id: r.id(),
            priority: if p1 > p2 {
                r.priority().succ()
            } else {
                r.priority().pred()
            },
        })
        .collect();
    writes.push(PriorityWrite {
        id: source,
        priority: p2,
    });

    Ok(ReorderPlan { writes })
}

fn find<R: Prioritized>(records: &[R], id: EntityId) -> ReorderResult<&R> {
    records
        .iter()
        .find(|r| r.id() == id)
        .ok_or(ReorderError::UnknownRecord(id))
}
