use crate::wire::{TokenResponse, signed_up_user_id};

use serde_json::json;
use uuid::Uuid;

#[test]
fn given_confirmation_required_body_when_reading_id_then_top_level_id() {
    let body = json!({ "id": "00000000-0000-0000-0000-000000000005", "email": "a@b.co" });
    assert_eq!(signed_up_user_id(&body), Some(Uuid::from_u128(5)));
}

#[test]
fn given_autoconfirm_body_when_reading_id_then_nested_user_id() {
    let body = json!({
        "access_token": "t",
        "user": { "id": "00000000-0000-0000-0000-000000000006" }
    });
    assert_eq!(signed_up_user_id(&body), Some(Uuid::from_u128(6)));
}

#[test]
fn given_body_without_id_when_reading_id_then_none() {
    assert_eq!(signed_up_user_id(&json!({ "msg": "ok" })), None);
}

#[test]
fn given_expires_in_only_when_converting_then_expires_at_computed() {
    let response: TokenResponse = serde_json::from_value(json!({
        "access_token": "a",
        "refresh_token": "r",
        "expires_in": 3600,
        "user": { "id": "00000000-0000-0000-0000-000000000001" }
    }))
    .unwrap();

    let before = chrono::Utc::now().timestamp();
    let session = response.into_session();

    assert_eq!(session.token_type, "bearer");
    let expires_at = session.expires_at.unwrap();
    assert!(expires_at >= before + 3600);
    assert!(expires_at <= before + 3600 + 5);
}
