use crate::{CallerId, ProfileId};

use std::str::FromStr;

#[test]
fn given_caller_when_profile_id_then_same_uuid() {
    let caller = CallerId::from_str("00000000-0000-0000-0000-00000000000a").unwrap();

    assert_eq!(caller.profile_id().0, caller.0);
    assert_eq!(ProfileId::from(caller), caller.profile_id());
}

#[test]
fn given_padded_uuid_when_parsed_then_trimmed() {
    let id = ProfileId::from_str("  00000000-0000-0000-0000-000000000001 ").unwrap();

    assert_eq!(id.to_string(), "00000000-0000-0000-0000-000000000001");
}

#[test]
fn given_garbage_when_parsed_then_error() {
    assert!(ProfileId::from_str("not-a-uuid").is_err());
}

#[test]
fn given_profile_id_when_serialized_then_plain_string() {
    let id = ProfileId::from_str("00000000-0000-0000-0000-000000000001").unwrap();

    let json = serde_json::to_string(&id).unwrap();

    assert_eq!(json, "\"00000000-0000-0000-0000-000000000001\"");
}
