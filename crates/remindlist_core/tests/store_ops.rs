use remindlist_core::{Reminder, ReminderStore, StoreError};
use uuid::Uuid;

fn seed() -> Vec<Reminder> {
    vec![
        Reminder::with_id(Uuid::from_u128(1), "buy milk", 1_700_000_000_000),
        Reminder::with_id(Uuid::from_u128(2), "pay rent", 1_700_003_600_000)
            .with_notes("transfer before noon"),
        Reminder::with_id(Uuid::from_u128(3), "call mom", 1_700_007_200_000),
    ]
}

#[test]
fn find_returns_the_matching_reminder() {
    let store = ReminderStore::from_seed(seed()).unwrap();

    let found = store.find(Uuid::from_u128(2)).unwrap();
    assert_eq!(found.title, "pay rent");
    assert_eq!(found.notes.as_deref(), Some("transfer before noon"));
}

#[test]
fn find_unknown_id_returns_not_found() {
    let store = ReminderStore::from_seed(seed()).unwrap();

    let missing = Uuid::from_u128(99);
    let err = store.find(missing).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(id) if id == missing));
}

#[test]
fn replace_changes_only_the_target_record() {
    let mut store = ReminderStore::from_seed(seed()).unwrap();

    let id = Uuid::from_u128(2);
    let mut updated = store.find(id).unwrap().clone();
    updated.title = "pay rent and utilities".to_string();
    store.replace(id, updated).unwrap();

    let titles: Vec<&str> = store.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["buy milk", "pay rent and utilities", "call mom"]);
    assert_eq!(store.find(Uuid::from_u128(1)).unwrap().due_at, 1_700_000_000_000);
    assert_eq!(store.find(Uuid::from_u128(3)).unwrap().due_at, 1_700_007_200_000);
}

#[test]
fn replace_unknown_id_returns_not_found() {
    let mut store = ReminderStore::from_seed(seed()).unwrap();

    let missing = Uuid::from_u128(99);
    let err = store
        .replace(missing, Reminder::with_id(missing, "ghost", 0))
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound(id) if id == missing));
}

#[test]
fn toggle_completion_flips_and_reports_the_record() {
    let mut store = ReminderStore::from_seed(seed()).unwrap();

    let id = Uuid::from_u128(1);
    let updated = store.toggle_completion(id).unwrap();
    assert!(updated.is_complete);
    assert!(store.find(id).unwrap().is_complete);
}

#[test]
fn toggle_completion_twice_restores_the_original_store() {
    let original = ReminderStore::from_seed(seed()).unwrap();
    let mut store = original.clone();

    let id = Uuid::from_u128(3);
    store.toggle_completion(id).unwrap();
    assert_ne!(store, original);

    store.toggle_completion(id).unwrap();
    assert_eq!(store, original);
}

#[test]
fn from_seed_rejects_duplicate_ids() {
    let duplicate = Uuid::from_u128(7);
    let err = ReminderStore::from_seed(vec![
        Reminder::with_id(duplicate, "first", 1_000),
        Reminder::with_id(duplicate, "second", 2_000),
    ])
    .unwrap_err();
    assert!(matches!(err, StoreError::DuplicateId(id) if id == duplicate));
}

#[test]
fn from_seed_accepts_an_empty_list() {
    let store = ReminderStore::from_seed(Vec::new()).unwrap();
    assert!(store.is_empty());
    assert!(store.project_list().is_empty());
}
