use crate::{SignInForm, SignUpForm, UpdatePasswordForm};

use googletest::assert_that;
use googletest::prelude::{anything, eq, ok};

fn sign_up_form() -> SignUpForm {
    SignUpForm {
        email: "ada@example.com".to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        password: "secret1".to_string(),
    }
}

#[test]
fn given_complete_sign_up_when_validating_then_ok() {
    let result = sign_up_form().validate(6);
    assert_that!(result, ok(anything()));
}

#[test]
fn given_blank_last_name_when_validating_then_last_name_required() {
    let form = SignUpForm {
        last_name: "   ".to_string(),
        ..sign_up_form()
    };

    let err = form.validate(6).unwrap_err();
    assert_eq!(err.field(), Some("last_name"));
    assert_that!(err.user_message().as_str(), eq("Last name required"));
}

#[test]
fn given_padded_names_when_building_attributes_then_trimmed() {
    let form = SignUpForm {
        first_name: " Ada ".to_string(),
        ..sign_up_form()
    };
    assert_that!(form.attributes().first_name.as_str(), eq("Ada"));
}

#[test]
fn given_sign_in_without_email_when_validating_then_email_reported_first() {
    let form = SignInForm::default();

    let err = form.validate(6).unwrap_err();
    assert_that!(err.user_message().as_str(), eq("Email required"));
}

#[test]
fn given_short_password_when_validating_sign_in_then_length_message() {
    let form = SignInForm {
        email: "ada@example.com".to_string(),
        password: "abc".to_string(),
        remember_me: false,
    };

    let err = form.validate(6).unwrap_err();
    assert_that!(
        err.user_message().as_str(),
        eq("Password must be at least 6 characters long")
    );
}

#[test]
fn given_mismatched_confirmation_when_validating_then_passwords_dont_match() {
    let form = UpdatePasswordForm {
        password: "secret1".to_string(),
        confirm_password: "secret2".to_string(),
    };

    let err = form.validate(6).unwrap_err();
    assert_eq!(err.field(), Some("confirm_password"));
    assert_that!(err.user_message().as_str(), eq("Passwords don't match"));
}
