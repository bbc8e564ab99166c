//! Reminder domain model.
//!
//! # Responsibility
//! - Define the canonical record rendered by the list and detail views.
//! - Provide constructors for generated and externally supplied identity.
//!
//! # Invariants
//! - `id` is stable and never reused for another reminder.
//! - `is_complete` is the source of truth for completion state.
//! - Attribute changes go through full-record replacement; no field-level
//!   patch path exists.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every reminder in a store.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ReminderId = Uuid;

/// Canonical reminder record.
///
/// The same shape backs the scrollable list row and the detail screen;
/// projections carry identifiers only and resolve records on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    /// Stable global ID used for list snapshots and lookups.
    pub id: ReminderId,
    /// Short display title.
    pub title: String,
    /// Due moment in unix epoch milliseconds.
    pub due_at: i64,
    /// Optional free-form notes shown on the detail screen.
    pub notes: Option<String>,
    /// Completion flag toggled by the done action.
    pub is_complete: bool,
}

impl Reminder {
    /// Creates a new reminder with a generated stable ID.
    ///
    /// # Invariants
    /// - `notes` starts as `None`.
    /// - `is_complete` starts as `false`.
    pub fn new(title: impl Into<String>, due_at: i64) -> Self {
        Self::with_id(Uuid::new_v4(), title, due_at)
    }

    /// Creates a new reminder with a caller-provided stable ID.
    ///
    /// Used by seed/import paths where identity already exists externally.
    ///
    /// # Invariants
    /// - The provided `id` must remain stable for this reminder lifetime.
    pub fn with_id(id: ReminderId, title: impl Into<String>, due_at: i64) -> Self {
        Self {
            id,
            title: title.into(),
            due_at,
            notes: None,
            is_complete: false,
        }
    }

    /// Attaches notes, consuming and returning the record for seed chaining.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Returns a copy of this reminder with the completion flag flipped.
    ///
    /// Full-record replacement is the only mutation primitive; callers pass
    /// the result to `ReminderStore::replace`.
    pub fn toggled(&self) -> Self {
        let mut next = self.clone();
        next.is_complete = !next.is_complete;
        next
    }
}

#[cfg(test)]
mod tests {
    use super::Reminder;

    #[test]
    fn toggled_flips_only_the_completion_flag() {
        let reminder = Reminder::new("water plants", 1_700_000_000_000).with_notes("balcony too");

        let toggled = reminder.toggled();
        assert!(toggled.is_complete);
        assert_eq!(toggled.id, reminder.id);
        assert_eq!(toggled.title, reminder.title);
        assert_eq!(toggled.due_at, reminder.due_at);
        assert_eq!(toggled.notes, reminder.notes);
    }

    #[test]
    fn toggled_twice_restores_the_original_record() {
        let reminder = Reminder::new("feed cat", 1_700_000_060_000);
        assert_eq!(reminder.toggled().toggled(), reminder);
    }
}
