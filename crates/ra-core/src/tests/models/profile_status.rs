use crate::ProfileStatus;

use std::str::FromStr;

#[test]
fn test_profile_status_from_blocked_flag() {
    assert_eq!(ProfileStatus::from(true), ProfileStatus::Blocked);
    assert_eq!(ProfileStatus::from(false), ProfileStatus::Active);
}

#[test]
fn test_profile_status_from_str() {
    assert_eq!(
        ProfileStatus::from_str("Blocked").unwrap(),
        ProfileStatus::Blocked
    );
    assert_eq!(
        ProfileStatus::from_str("active").unwrap(),
        ProfileStatus::Active
    );
    assert!(ProfileStatus::from_str("suspended").is_err());
}

#[test]
fn test_profile_status_label() {
    assert_eq!(ProfileStatus::Active.to_string(), "Active");
    assert_eq!(ProfileStatus::Blocked.to_string(), "Blocked");
}
