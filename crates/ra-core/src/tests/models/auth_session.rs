use crate::AuthSession;

use chrono::{DateTime, Utc};

fn session(expires_at: Option<i64>) -> AuthSession {
    AuthSession {
        access_token: "a".into(),
        refresh_token: "r".into(),
        token_type: "bearer".into(),
        expires_in: Some(3600),
        expires_at,
    }
}

#[test]
fn given_past_expiry_when_checked_then_expired() {
    let now = DateTime::<Utc>::from_timestamp(2_000, 0).unwrap();

    assert!(session(Some(1_000)).is_expired(now));
    assert!(!session(Some(3_000)).is_expired(now));
}

#[test]
fn given_no_expiry_when_checked_then_not_expired() {
    assert!(!session(None).is_expired(Utc::now()));
}

#[test]
fn given_token_response_without_type_when_deserialized_then_bearer() {
    let json = r#"{"access_token":"a","refresh_token":"r"}"#;

    let session: AuthSession = serde_json::from_str(json).unwrap();

    assert_eq!(session.token_type, "bearer");
    assert!(session.expires_at.is_none());
}
