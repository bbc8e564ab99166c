//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `remindlist_core` linkage.
//! - Walk the seeded list/toggle flow with deterministic output shape.

use remindlist_core::{Reminder, ReminderService, ReminderStore};
use uuid::Uuid;

fn main() {
    println!("remindlist_core ping={}", remindlist_core::ping());
    println!("remindlist_core version={}", remindlist_core::core_version());

    // Fixed seed instead of the wall-clock sample list, so repeated runs
    // print identical lines.
    let seed = vec![
        Reminder::with_id(Uuid::from_u128(1), "Buy milk", 1_700_000_000_000),
        Reminder::with_id(Uuid::from_u128(2), "Pay rent", 1_700_003_600_000)
            .with_notes("transfer before noon"),
    ];
    let store = match ReminderStore::from_seed(seed) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("seed rejected: {err}");
            std::process::exit(1);
        }
    };
    let mut service = ReminderService::new(store);

    print_rows(&service);

    let first = service.current_projection().ids[0];
    match service.toggle_completion(first) {
        Ok(ops) => println!("toggle id={first} ops={}", ops.len()),
        Err(err) => {
            eprintln!("toggle failed: {err}");
            std::process::exit(1);
        }
    }

    print_rows(&service);
}

fn print_rows(service: &ReminderService) {
    for id in &service.current_projection().ids {
        match service.detail(*id) {
            Ok(reminder) => {
                let mark = if reminder.is_complete { "x" } else { " " };
                println!("[{mark}] {} due_at={}", reminder.title, reminder.due_at);
            }
            Err(err) => eprintln!("row lookup failed: {err}"),
        }
    }
}
