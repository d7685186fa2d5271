use crate::testing::fixture_row;
use crate::{ProfilePatch, ProfileRow, ProfileStatus};

#[test]
fn given_table_json_when_deserialized_then_maps_column_names() {
    let json = r#"{
        "id": "00000000-0000-0000-0000-000000000001",
        "email": "ada@example.com",
        "first_name": "Ada",
        "last_name": "Lovelace",
        "created_at": "2024-03-01T10:15:00.123456+00:00",
        "last_sign": "2024-03-02T08:00:00+00:00",
        "is_blocked": true
    }"#;

    let row: ProfileRow = serde_json::from_str(json).unwrap();

    assert_eq!(row.email, "ada@example.com");
    assert_eq!(row.full_name(), "Ada Lovelace");
    assert!(row.last_sign_in.is_some());
    assert_eq!(row.status(), ProfileStatus::Blocked);
}

#[test]
fn given_nullable_columns_missing_when_deserialized_then_defaults_apply() {
    let json = r#"{
        "id": "00000000-0000-0000-0000-000000000002",
        "created_at": "2024-03-01T10:15:00Z",
        "last_sign": null
    }"#;

    let row: ProfileRow = serde_json::from_str(json).unwrap();

    assert_eq!(row.email, "");
    assert!(row.first_name.is_none());
    assert!(row.last_sign_in.is_none());
    assert!(!row.is_blocked);
}

#[test]
fn given_null_email_and_flag_when_deserialized_then_defaults_apply() {
    let json = r#"{
        "id": "00000000-0000-0000-0000-000000000003",
        "email": null,
        "created_at": "2024-03-01T10:15:00Z",
        "is_blocked": null
    }"#;

    let row: ProfileRow = serde_json::from_str(json).unwrap();

    assert_eq!(row.email, "");
    assert_eq!(row.status(), ProfileStatus::Active);
}

#[test]
fn given_timestamps_without_offset_when_deserialized_then_read_as_utc() {
    let json = r#"{
        "id": "00000000-0000-0000-0000-000000000004",
        "created_at": "2024-01-02 10:00:00",
        "last_sign": "2024-01-02T10:00:00.123456"
    }"#;

    let row: ProfileRow = serde_json::from_str(json).unwrap();

    assert_eq!(row.created_at.to_rfc3339(), "2024-01-02T10:00:00+00:00");
    assert_eq!(
        row.last_sign_in.map(|at| at.timestamp_micros()),
        Some(row.created_at.timestamp_micros() + 123_456)
    );
}

#[test]
fn given_garbage_timestamp_when_deserialized_then_error_names_value() {
    let json = r#"{
        "id": "00000000-0000-0000-0000-000000000005",
        "created_at": "yesterday"
    }"#;

    let err = serde_json::from_str::<ProfileRow>(json).unwrap_err();

    assert!(err.to_string().contains("yesterday"));
}

#[test]
fn given_only_last_name_when_full_name_then_no_leading_space() {
    let mut row = fixture_row(1, false);
    row.first_name = None;
    row.last_name = Some("Hopper".into());

    assert_eq!(row.full_name(), "Hopper");
}

#[test]
fn given_block_patch_when_applied_then_flag_set() {
    let mut row = fixture_row(1, false);

    row.apply(&ProfilePatch::blocked(true));

    assert!(row.is_blocked);
}

#[test]
fn given_empty_patch_when_applied_then_row_unchanged() {
    let mut row = fixture_row(1, true);
    let before = row.clone();

    row.apply(&ProfilePatch::default());

    assert_eq!(row, before);
}

#[test]
fn given_row_when_serialized_then_uses_last_sign_column() {
    let row = fixture_row(3, false);

    let json = serde_json::to_string(&row).unwrap();

    assert!(json.contains("\"last_sign\""));
    assert!(!json.contains("last_sign_in"));
}
