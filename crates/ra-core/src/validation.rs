//! Form input rules shared by the credential flows.

use crate::{CoreError, Result as CoreErrorResult};

pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;

/// `local@domain.tld` with no whitespace and exactly one `@`
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    // Needs a dot with at least one character on each side
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

#[track_caller]
pub fn validate_email(email: &str) -> CoreErrorResult<()> {
    if email.is_empty() {
        return Err(CoreError::validation("email", "Email required"));
    }
    if !is_valid_email(email) {
        return Err(CoreError::validation("email", "Enter a correct email"));
    }
    Ok(())
}

#[track_caller]
pub fn validate_password(password: &str, min_length: usize) -> CoreErrorResult<()> {
    if password.is_empty() {
        return Err(CoreError::validation("password", "Password required"));
    }
    if password.chars().count() < min_length {
        return Err(CoreError::validation(
            "password",
            format!("Password must be at least {min_length} characters long"),
        ));
    }
    Ok(())
}

#[track_caller]
pub fn validate_required(field: &'static str, label: &str, value: &str) -> CoreErrorResult<()> {
    if value.trim().is_empty() {
        return Err(CoreError::validation(field, format!("{label} required")));
    }
    Ok(())
}

#[track_caller]
pub fn validate_password_confirmation(password: &str, confirmation: &str) -> CoreErrorResult<()> {
    if password != confirmation {
        return Err(CoreError::validation("confirm_password", "Passwords don't match"));
    }
    Ok(())
}
