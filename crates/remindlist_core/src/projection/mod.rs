//! List snapshot projections.
//!
//! # Responsibility
//! - Capture the ordered identifier sequence handed to a rendering layer.
//! - Track which identifiers need a forced re-render next cycle.
//!
//! # Invariants
//! - `ids` mirrors store order exactly: no duplicates, no omissions.
//! - `reload` only contains identifiers present in `ids`.
//! - Projections are value snapshots; they never observe later store
//!   mutations.

use crate::model::reminder::ReminderId;
use std::collections::BTreeSet;

pub mod diff;

pub use diff::{diff, ListOp};

/// Ordered identifier snapshot plus forced-reload markers.
///
/// Derived from a `ReminderStore` at projection time. The rendering layer
/// applies successive projections as minimal-diff updates; `reload` marks
/// rows whose attributes changed while identity and position did not.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListProjection {
    /// Identifiers in display order.
    pub ids: Vec<ReminderId>,
    /// Identifiers to re-render in place on the next update cycle.
    pub reload: BTreeSet<ReminderId>,
}

impl ListProjection {
    /// Returns the number of rows in the snapshot.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns whether the snapshot holds no rows.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns whether the given row is marked for forced re-render.
    pub fn needs_reload(&self, id: ReminderId) -> bool {
        self.reload.contains(&id)
    }
}
