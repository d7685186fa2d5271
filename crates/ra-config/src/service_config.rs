use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SERVICE_URL,
    MAX_REQUEST_TIMEOUT_SECS, MIN_REQUEST_TIMEOUT_SECS,
};

use serde::Deserialize;

/// Connection settings for the hosted backend
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Project URL; `/auth/v1` and `/rest/v1` hang off it
    pub url: String,
    /// Public key sent as `apikey` on every request
    pub anon_key: Option<String>,
    /// Privileged key for user administration (deleting users)
    pub service_role_key: Option<String>,
    pub request_timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            url: String::from(DEFAULT_SERVICE_URL),
            anon_key: None,
            service_role_key: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ServiceConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.url.starts_with("http://") || self.url.starts_with("https://")) {
            return Err(ConfigError::service(format!(
                "service.url must start with http:// or https://, got '{}'",
                self.url
            )));
        }

        match self.anon_key.as_deref() {
            None => {
                return Err(ConfigError::service(
                    "service.anon_key must be set (or RA_SERVICE_ANON_KEY)",
                ));
            }
            Some(key) if key.trim().is_empty() => {
                return Err(ConfigError::service("service.anon_key cannot be empty"));
            }
            Some(_) => {}
        }

        if self.request_timeout_secs < MIN_REQUEST_TIMEOUT_SECS
            || self.request_timeout_secs > MAX_REQUEST_TIMEOUT_SECS
        {
            return Err(ConfigError::service(format!(
                "service.request_timeout_secs must be {}-{}, got {}",
                MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS, self.request_timeout_secs
            )));
        }

        Ok(())
    }
}
