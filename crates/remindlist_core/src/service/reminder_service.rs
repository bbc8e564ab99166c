//! Reminder list use-case service.
//!
//! # Responsibility
//! - Provide the entry points user actions are dispatched into: refresh,
//!   toggle completion, detail lookup.
//! - Keep the published list snapshot consistent with the store after
//!   every mutation.
//!
//! # Invariants
//! - Exactly one projection is "published" at a time; every mutation
//!   publishes its successor before returning.
//! - Returned update batches always carry the previously published
//!   snapshot into the newly published one.

use crate::model::reminder::{Reminder, ReminderId};
use crate::projection::{diff, ListOp, ListProjection};
use crate::store::{ReminderStore, StoreResult};
use log::{debug, info};

/// Use-case facade over a `ReminderStore`.
///
/// Owns the store for the lifetime of a session and remembers the last
/// snapshot handed to the rendering layer, so each user action yields an
/// incremental update batch rather than a full reload.
pub struct ReminderService {
    store: ReminderStore,
    published: ListProjection,
}

impl ReminderService {
    /// Creates a service over the given store and publishes the initial
    /// snapshot.
    pub fn new(store: ReminderStore) -> Self {
        let published = store.project_list();
        info!(
            "event=session_open module=service status=ok reminders={}",
            store.len()
        );
        Self { store, published }
    }

    /// Read access for callers that resolve rows while rendering.
    pub fn store(&self) -> &ReminderStore {
        &self.store
    }

    /// Returns the last published snapshot.
    pub fn current_projection(&self) -> &ListProjection {
        &self.published
    }

    /// Re-projects the store with no forced reloads and publishes the
    /// result.
    ///
    /// Returns the update batch from the previously published snapshot;
    /// empty when nothing changed.
    pub fn refresh(&mut self) -> Vec<ListOp> {
        let next = self.store.project_list();
        let ops = diff(&self.published, &next);
        self.published = next;
        ops
    }

    /// Toggles completion for `id` and publishes a snapshot that marks the
    /// row for re-render.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when `id` does not exist; nothing is
    ///   published in that case.
    pub fn toggle_completion(&mut self, id: ReminderId) -> StoreResult<Vec<ListOp>> {
        let updated = self.store.toggle_completion(id)?;
        debug!(
            "event=toggle_completion module=service status=ok id={id} complete={}",
            updated.is_complete
        );

        let next = self.store.project_list_reloading([id]);
        let ops = diff(&self.published, &next);
        self.published = next;
        Ok(ops)
    }

    /// Returns a copy of the reminder for the detail screen.
    pub fn detail(&self, id: ReminderId) -> StoreResult<Reminder> {
        self.store.find(id).cloned()
    }
}
