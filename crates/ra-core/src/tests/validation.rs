use crate::validation::{
    DEFAULT_MIN_PASSWORD_LENGTH, is_valid_email, validate_email, validate_password,
    validate_password_confirmation, validate_required,
};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use proptest::prelude::*;

#[test]
fn given_well_formed_addresses_when_checked_then_valid() {
    for email in ["a@b.co", "first.last@example.com", "x+tag@sub.domain.org"] {
        assert!(is_valid_email(email), "{email} should be valid");
    }
}

#[test]
fn given_malformed_addresses_when_checked_then_invalid() {
    for email in [
        "plain",
        "@example.com",
        "user@",
        "user@example",
        "user@.com",
        "user@example.",
        "us er@example.com",
        "a@b@c.com",
    ] {
        assert!(!is_valid_email(email), "{email} should be invalid");
    }
}

#[test]
fn given_empty_email_when_validated_then_required_message() {
    let result = validate_email("");

    assert_that!(result, err(anything()));
    let error = result.unwrap_err();
    assert_eq!(error.field(), Some("email"));
    assert_that!(error.user_message().as_str(), eq("Email required"));
}

#[test]
fn given_bad_email_when_validated_then_correct_email_message() {
    let error = validate_email("nope").unwrap_err();

    assert_that!(error.user_message().as_str(), eq("Enter a correct email"));
}

#[test]
fn given_short_password_when_validated_then_length_message() {
    let error = validate_password("12345", DEFAULT_MIN_PASSWORD_LENGTH).unwrap_err();

    assert_that!(
        error.user_message().as_str(),
        eq("Password must be at least 6 characters long")
    );
}

#[test]
fn given_six_char_password_when_validated_then_ok() {
    assert_that!(validate_password("123456", DEFAULT_MIN_PASSWORD_LENGTH), ok(anything()));
}

#[test]
fn given_blank_name_when_required_then_error() {
    let error = validate_required("first_name", "First name", "   ").unwrap_err();

    assert_that!(error.user_message().as_str(), eq("First name required"));
}

#[test]
fn given_mismatched_confirmation_when_validated_then_error() {
    let error = validate_password_confirmation("secret1", "secret2").unwrap_err();

    assert_that!(error.user_message().as_str(), eq("Passwords don't match"));
    assert_eq!(error.field(), Some("confirm_password"));
}

proptest! {
    #[test]
    fn given_whitespace_anywhere_when_checked_then_invalid(
        local in "[a-z]{1,8}",
        domain in "[a-z]{1,8}",
        ws in prop_oneof![Just(" "), Just("\t"), Just("\n")],
    ) {
        let email = format!("{local}{ws}@{domain}.com");
        prop_assert!(!is_valid_email(&email));
    }

    #[test]
    fn given_simple_address_when_checked_then_valid(
        local in "[a-z0-9._%+-]{1,12}",
        domain in "[a-z0-9-]{1,12}",
        tld in "[a-z]{2,6}",
    ) {
        let email = format!("{local}@{domain}.{tld}");
        prop_assert!(is_valid_email(&email));
    }
}
