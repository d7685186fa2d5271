//! Field values as typed into the credential forms

use ra_core::validation::{
    validate_email, validate_password, validate_password_confirmation, validate_required,
};
use ra_core::{ProfileAttributes, Result as CoreResult};

#[derive(Debug, Clone, Default)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

impl SignInForm {
    pub fn validate(&self, min_password_length: usize) -> CoreResult<()> {
        validate_email(&self.email)?;
        validate_password(&self.password, min_password_length)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SignUpForm {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

impl SignUpForm {
    pub fn validate(&self, min_password_length: usize) -> CoreResult<()> {
        validate_email(&self.email)?;
        validate_required("first_name", "First name", &self.first_name)?;
        validate_required("last_name", "Last name", &self.last_name)?;
        validate_password(&self.password, min_password_length)
    }

    pub fn attributes(&self) -> ProfileAttributes {
        ProfileAttributes {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ForgotPasswordForm {
    pub email: String,
}

impl ForgotPasswordForm {
    pub fn validate(&self) -> CoreResult<()> {
        validate_email(&self.email)
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdatePasswordForm {
    pub password: String,
    pub confirm_password: String,
}

impl UpdatePasswordForm {
    pub fn validate(&self, min_password_length: usize) -> CoreResult<()> {
        validate_password(&self.password, min_password_length)?;
        validate_password_confirmation(&self.password, &self.confirm_password)
    }
}
