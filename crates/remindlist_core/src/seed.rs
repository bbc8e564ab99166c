//! Built-in sample seed data.
//!
//! # Responsibility
//! - Supply the fixed reminder list sessions start from when the host
//!   provides no seed of its own.
//!
//! # Invariants
//! - Identifiers are unique and stable across calls within a process run.
//! - Due moments are relative to wall clock at seed time; tests construct
//!   their own records with fixed timestamps instead of using this list.

use crate::model::reminder::Reminder;
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

const MINUTE_MS: i64 = 60 * 1000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Returns the built-in sample reminder list in display order.
pub fn sample_reminders() -> Vec<Reminder> {
    let now = now_epoch_ms();
    vec![
        Reminder::with_id(
            Uuid::from_u128(0x5eed_0001),
            "Submit reimbursement report",
            now + 10 * MINUTE_MS,
        ),
        Reminder::with_id(Uuid::from_u128(0x5eed_0002), "Code review", now + 8 * HOUR_MS)
            .with_notes("Check tests"),
        Reminder::with_id(Uuid::from_u128(0x5eed_0003), "Pick up new key", now + DAY_MS)
            .with_notes("Front desk closes at 19:00"),
        Reminder::with_id(
            Uuid::from_u128(0x5eed_0004),
            "Vacuum living room",
            now + 3 * DAY_MS,
        ),
        Reminder::with_id(
            Uuid::from_u128(0x5eed_0005),
            "Haircut appointment",
            now + 4 * DAY_MS,
        ),
        Reminder::with_id(
            Uuid::from_u128(0x5eed_0006),
            "Call plumber about the sink",
            now + 5 * DAY_MS,
        )
        .with_notes("Ask about the kitchen tap too"),
        Reminder::with_id(
            Uuid::from_u128(0x5eed_0007),
            "Water the ficus",
            now + 6 * DAY_MS,
        ),
        Reminder::with_id(
            Uuid::from_u128(0x5eed_0008),
            "Renew gym membership",
            now + 7 * DAY_MS,
        ),
    ]
}

fn now_epoch_ms() -> i64 {
    // Seeds never predate the epoch; saturate instead of failing.
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::sample_reminders;
    use std::collections::BTreeSet;

    #[test]
    fn sample_ids_are_unique() {
        let seed = sample_reminders();
        let ids: BTreeSet<_> = seed.iter().map(|reminder| reminder.id).collect();
        assert_eq!(ids.len(), seed.len());
    }

    #[test]
    fn sample_starts_incomplete() {
        assert!(sample_reminders().iter().all(|r| !r.is_complete));
    }
}
