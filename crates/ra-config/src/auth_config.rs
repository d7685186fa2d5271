use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_MIN_PASSWORD_LENGTH, DEFAULT_PASSWORD_RESET_REDIRECT,
    MAX_MIN_PASSWORD_LENGTH, MIN_MIN_PASSWORD_LENGTH,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Where the password-reset email sends the user
    pub password_reset_redirect: String,
    pub min_password_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            password_reset_redirect: String::from(DEFAULT_PASSWORD_RESET_REDIRECT),
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.min_password_length < MIN_MIN_PASSWORD_LENGTH
            || self.min_password_length > MAX_MIN_PASSWORD_LENGTH
        {
            return Err(ConfigError::auth(format!(
                "auth.min_password_length must be {}-{}, got {}",
                MIN_MIN_PASSWORD_LENGTH, MAX_MIN_PASSWORD_LENGTH, self.min_password_length
            )));
        }

        if !(self.password_reset_redirect.starts_with("http://")
            || self.password_reset_redirect.starts_with("https://"))
        {
            return Err(ConfigError::auth(format!(
                "auth.password_reset_redirect must be an http(s) URL, got '{}'",
                self.password_reset_redirect
            )));
        }

        Ok(())
    }
}
