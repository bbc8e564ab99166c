use remindlist_core::Reminder;
use uuid::Uuid;

#[test]
fn reminder_new_sets_defaults() {
    let reminder = Reminder::new("buy milk", 1_700_000_000_000);

    assert!(!reminder.id.is_nil());
    assert_eq!(reminder.title, "buy milk");
    assert_eq!(reminder.due_at, 1_700_000_000_000);
    assert_eq!(reminder.notes, None);
    assert!(!reminder.is_complete);
}

#[test]
fn with_id_keeps_the_supplied_identity() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let reminder = Reminder::with_id(id, "pay rent", 1_700_003_600_000);
    assert_eq!(reminder.id, id);
}

#[test]
fn reminder_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let reminder =
        Reminder::with_id(id, "dentist", 1_700_000_360_000).with_notes("bring insurance card");

    let json = serde_json::to_value(&reminder).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["title"], "dentist");
    assert_eq!(json["due_at"], 1_700_000_360_000_i64);
    assert_eq!(json["notes"], "bring insurance card");
    assert_eq!(json["is_complete"], false);

    let decoded: Reminder = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, reminder);
}

#[test]
fn host_seed_lists_deserialize() {
    let value = serde_json::json!([
        {
            "id": "11111111-2222-4333-8444-555555555555",
            "title": "buy milk",
            "due_at": 1_700_000_000_000_i64,
            "notes": null,
            "is_complete": false
        },
        {
            "id": "22222222-2222-4333-8444-555555555555",
            "title": "pay rent",
            "due_at": 1_700_003_600_000_i64,
            "notes": "transfer before noon",
            "is_complete": true
        }
    ]);

    let seed: Vec<Reminder> = serde_json::from_value(value).unwrap();
    assert_eq!(seed.len(), 2);
    assert_eq!(seed[1].notes.as_deref(), Some("transfer before noon"));
    assert!(seed[1].is_complete);
}
