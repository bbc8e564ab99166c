//! Pure snapshot diffing.
//!
//! # Responsibility
//! - Turn two successive list projections into the minimal batch of
//!   remove/insert/reload operations a renderer applies.
//!
//! # Invariants
//! - Removes come first in descending previous-index order, then inserts
//!   in ascending next-index order, then reloads in next-snapshot order,
//!   so indices stay valid while the batch is applied front to back.
//! - Retained identifiers keep their relative order between snapshots;
//!   point mutations never reorder the list.
//! - An identifier that is freshly inserted is never also reloaded.

use crate::model::reminder::ReminderId;
use crate::projection::ListProjection;
use std::collections::BTreeSet;

/// One incremental list update step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOp {
    /// Remove the row at `index` of the previous snapshot.
    Remove { index: usize, id: ReminderId },
    /// Insert a row at `index` of the next snapshot.
    Insert { index: usize, id: ReminderId },
    /// Re-render the row for `id` in place; position is unchanged.
    Reload { id: ReminderId },
}

/// Computes the update batch that carries `prev` into `next`.
///
/// # Contract
/// - Applying the batch in order to `prev.ids` (removes by stored index,
///   then inserts by stored index) yields exactly `next.ids`.
/// - Reloads are emitted for identifiers marked in `next.reload` that are
///   present in both snapshots.
pub fn diff(prev: &ListProjection, next: &ListProjection) -> Vec<ListOp> {
    let prev_ids: BTreeSet<ReminderId> = prev.ids.iter().copied().collect();
    let next_ids: BTreeSet<ReminderId> = next.ids.iter().copied().collect();

    let mut ops = Vec::new();

    for (index, &id) in prev.ids.iter().enumerate().rev() {
        if !next_ids.contains(&id) {
            ops.push(ListOp::Remove { index, id });
        }
    }

    for (index, &id) in next.ids.iter().enumerate() {
        if !prev_ids.contains(&id) {
            ops.push(ListOp::Insert { index, id });
        }
    }

    for &id in &next.ids {
        if next.reload.contains(&id) && prev_ids.contains(&id) {
            ops.push(ListOp::Reload { id });
        }
    }

    ops
}
