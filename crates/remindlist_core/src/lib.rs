//! Core domain logic for RemindList.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod projection;
pub mod seed;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::reminder::{Reminder, ReminderId};
pub use projection::{diff, ListOp, ListProjection};
pub use seed::sample_reminders;
pub use service::reminder_service::ReminderService;
pub use store::{ReminderStore, StoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
