//! In-memory reminder store.
//!
//! # Responsibility
//! - Own the ordered reminder collection as the single source of truth.
//! - Provide identity lookup, full-record replacement, and list
//!   projections for the rendering layer.
//!
//! # Invariants
//! - Identifiers are unique within the store; uniqueness is checked when
//!   the seed is accepted.
//! - Store order is display order and only `replace` mutates records, in
//!   place, without touching order.
//! - Missing identifiers surface as `StoreError::NotFound`, never as a
//!   panic.

use crate::model::reminder::{Reminder, ReminderId};
use crate::projection::ListProjection;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error for lookup, mutation, and seeding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No reminder with the given identifier exists in the store.
    NotFound(ReminderId),
    /// The seed list carried the same identifier twice.
    DuplicateId(ReminderId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "reminder not found: {id}"),
            Self::DuplicateId(id) => write!(f, "duplicate reminder id in seed: {id}"),
        }
    }
}

impl Error for StoreError {}

/// Ordered, single-threaded collection of reminders.
///
/// Constructed once per session from a seed list and handed to consumers
/// by reference; there is no process-wide instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderStore {
    reminders: Vec<Reminder>,
}

impl Default for ReminderStore {
    /// An empty store; sessions normally start from `from_seed` instead.
    fn default() -> Self {
        Self {
            reminders: Vec::new(),
        }
    }
}

impl ReminderStore {
    /// Builds a store from an externally supplied seed list.
    ///
    /// Seed order becomes display order.
    ///
    /// # Errors
    /// - `StoreError::DuplicateId` when two seed records share an
    ///   identifier; the store is not created.
    pub fn from_seed(seed: Vec<Reminder>) -> StoreResult<Self> {
        let mut seen = BTreeSet::new();
        for reminder in &seed {
            if !seen.insert(reminder.id) {
                return Err(StoreError::DuplicateId(reminder.id));
            }
        }
        Ok(Self { reminders: seed })
    }

    /// Returns the number of reminders in the store.
    pub fn len(&self) -> usize {
        self.reminders.len()
    }

    /// Returns whether the store holds no reminders.
    pub fn is_empty(&self) -> bool {
        self.reminders.is_empty()
    }

    /// Iterates records in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Reminder> {
        self.reminders.iter()
    }

    /// Returns the reminder with the given identifier.
    ///
    /// # Contract
    /// - Callers only pass identifiers obtained from a projection of this
    ///   store; `NotFound` in correct usage is unreachable but still
    ///   reported as an error for testability.
    pub fn find(&self, id: ReminderId) -> StoreResult<&Reminder> {
        let index = self.position_of(id)?;
        Ok(&self.reminders[index])
    }

    /// Replaces the record at the position matching `id` with `new_value`.
    ///
    /// # Contract
    /// - `new_value.id` must equal `id`; identity is immutable once
    ///   created and record order never changes through this path.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when no record matches `id`.
    pub fn replace(&mut self, id: ReminderId, new_value: Reminder) -> StoreResult<()> {
        debug_assert_eq!(new_value.id, id, "replace must preserve identity");
        let index = self.position_of(id)?;
        self.reminders[index] = new_value;
        Ok(())
    }

    /// Flips the completion flag of the reminder with the given identifier.
    ///
    /// Composed from `find` + `replace`; returns the updated record so
    /// callers can refresh derived state without a second lookup.
    pub fn toggle_completion(&mut self, id: ReminderId) -> StoreResult<Reminder> {
        let toggled = self.find(id)?.toggled();
        self.replace(id, toggled.clone())?;
        Ok(toggled)
    }

    /// Projects the current ordered identifier list with no forced reloads.
    pub fn project_list(&self) -> ListProjection {
        self.project_list_reloading([])
    }

    /// Projects the current ordered identifier list, marking `reload_ids`
    /// for re-render even though their position and identity are
    /// unchanged.
    ///
    /// Identifiers not present in the store are dropped from the reload
    /// set rather than reported; the ordered sequence is unaffected either
    /// way.
    pub fn project_list_reloading(
        &self,
        reload_ids: impl IntoIterator<Item = ReminderId>,
    ) -> ListProjection {
        let ids: Vec<ReminderId> = self.reminders.iter().map(|reminder| reminder.id).collect();
        let present: BTreeSet<ReminderId> = ids.iter().copied().collect();
        let reload = reload_ids
            .into_iter()
            .filter(|id| present.contains(id))
            .collect();
        ListProjection { ids, reload }
    }

    // Linear scan on identity equality; fine at personal-list scale.
    fn position_of(&self, id: ReminderId) -> StoreResult<usize> {
        self.reminders
            .iter()
            .position(|reminder| reminder.id == id)
            .ok_or(StoreError::NotFound(id))
    }
}
