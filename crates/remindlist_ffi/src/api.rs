//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Keep error semantics simple for list/detail/toggle UI integration.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Missing identifiers surface as `ok=false` envelopes, never crashes.
//! - The session store is created once per process and serialized behind
//!   a mutex; core stays single-threaded underneath.

use log::warn;
use remindlist_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    sample_reminders, ReminderId, ReminderService, ReminderStore,
};
use std::sync::{Mutex, OnceLock};
use uuid::Uuid;

static SESSION: OnceLock<Mutex<ReminderService>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - UI-thread safe for current implementation.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - UI-thread safe for current implementation.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Reconfiguration attempts with different level or directory return error.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Generic action response envelope for session-level commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Number of reminders in the session store.
    pub reminder_count: u32,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

/// List snapshot envelope handed to the diffable list on the UI side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSnapshotResponse {
    /// Whether the snapshot was produced.
    pub ok: bool,
    /// Row identifiers in display order (string form of stable IDs).
    pub ordered_ids: Vec<String>,
    /// Identifiers whose rows must re-render in place this cycle.
    pub reload_ids: Vec<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

/// Detail envelope backing the reminder detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderDetailResponse {
    /// Whether the identifier resolved to a reminder.
    pub found: bool,
    /// Stable ID in string form (empty when not found).
    pub id: String,
    /// Display title.
    pub title: String,
    /// Due moment in unix epoch milliseconds.
    pub due_at_epoch_ms: i64,
    /// Optional free-form notes.
    pub notes: Option<String>,
    /// Completion flag.
    pub is_complete: bool,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ReminderDetailResponse {
    fn not_found(message: impl Into<String>) -> Self {
        Self {
            found: false,
            id: String::new(),
            title: String::new(),
            due_at_epoch_ms: 0,
            notes: None,
            is_complete: false,
            message: message.into(),
        }
    }
}

/// Opens the process session store from the built-in sample seed.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Idempotent: repeated calls keep the existing session untouched.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn session_open() -> SessionActionResponse {
    match with_session(|service| service.store().len()) {
        Ok(count) => SessionActionResponse {
            ok: true,
            reminder_count: count as u32,
            message: "Session ready.".to_string(),
        },
        Err(message) => SessionActionResponse {
            ok: false,
            reminder_count: 0,
            message,
        },
    }
}

/// Returns the current list snapshot for the host's diffable list.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Never panics.
/// - Ordering of `ordered_ids` is authoritative display order.
#[flutter_rust_bridge::frb(sync)]
pub fn list_snapshot() -> ListSnapshotResponse {
    match with_session(|service| snapshot_of(service)) {
        Ok(snapshot) => snapshot,
        Err(message) => ListSnapshotResponse {
            ok: false,
            ordered_ids: Vec::new(),
            reload_ids: Vec::new(),
            message,
        },
    }
}

/// Resolves one reminder for the detail screen.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Never panics; unknown or malformed identifiers return `found=false`.
#[flutter_rust_bridge::frb(sync)]
pub fn reminder_detail(id: String) -> ReminderDetailResponse {
    let reminder_id = match parse_reminder_id(&id) {
        Ok(reminder_id) => reminder_id,
        Err(message) => return ReminderDetailResponse::not_found(message),
    };

    let lookup = with_session(|service| service.detail(reminder_id));
    match lookup {
        Ok(Ok(reminder)) => ReminderDetailResponse {
            found: true,
            id: reminder.id.to_string(),
            title: reminder.title,
            due_at_epoch_ms: reminder.due_at,
            notes: reminder.notes,
            is_complete: reminder.is_complete,
            message: "Reminder resolved.".to_string(),
        },
        Ok(Err(err)) => ReminderDetailResponse::not_found(format!("reminder_detail failed: {err}")),
        Err(message) => ReminderDetailResponse::not_found(message),
    }
}

/// Toggles completion for one reminder and returns the fresh snapshot.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Never panics; unknown or malformed identifiers return `ok=false`
///   and leave the published snapshot unchanged.
/// - On success `reload_ids` contains exactly the toggled identifier.
#[flutter_rust_bridge::frb(sync)]
pub fn toggle_completion(id: String) -> ListSnapshotResponse {
    let reminder_id = match parse_reminder_id(&id) {
        Ok(reminder_id) => reminder_id,
        Err(message) => {
            return ListSnapshotResponse {
                ok: false,
                ordered_ids: Vec::new(),
                reload_ids: Vec::new(),
                message,
            }
        }
    };

    let toggled = with_session(|service| {
        service
            .toggle_completion(reminder_id)
            .map(|_ops| snapshot_of(service))
    });
    match toggled {
        Ok(Ok(snapshot)) => ListSnapshotResponse {
            message: "Completion toggled.".to_string(),
            ..snapshot
        },
        Ok(Err(err)) => ListSnapshotResponse {
            ok: false,
            ordered_ids: Vec::new(),
            reload_ids: Vec::new(),
            message: format!("toggle_completion failed: {err}"),
        },
        Err(message) => ListSnapshotResponse {
            ok: false,
            ordered_ids: Vec::new(),
            reload_ids: Vec::new(),
            message,
        },
    }
}

fn snapshot_of(service: &ReminderService) -> ListSnapshotResponse {
    let projection = service.current_projection();
    ListSnapshotResponse {
        ok: true,
        ordered_ids: projection.ids.iter().map(Uuid::to_string).collect(),
        reload_ids: projection.reload.iter().map(Uuid::to_string).collect(),
        message: "Snapshot ready.".to_string(),
    }
}

fn parse_reminder_id(raw: &str) -> Result<ReminderId, String> {
    Uuid::parse_str(raw.trim()).map_err(|err| {
        warn!("event=parse_reminder_id module=ffi status=error input_len={}", raw.len());
        format!("invalid reminder id `{raw}`: {err}")
    })
}

fn with_session<T>(f: impl FnOnce(&mut ReminderService) -> T) -> Result<T, String> {
    let session = SESSION.get_or_init(|| {
        // The built-in seed has unique ids; fall back to empty if a host
        // ever swaps in a broken one.
        let store = ReminderStore::from_seed(sample_reminders()).unwrap_or_default();
        Mutex::new(ReminderService::new(store))
    });
    let mut guard = session
        .lock()
        .map_err(|_| "session state poisoned by a previous panic".to_string())?;
    Ok(f(&mut guard))
}
