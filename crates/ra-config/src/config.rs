use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR_NAME, LoggingConfig, ServiceConfig, SessionConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub service: ServiceConfig,
    pub auth: AuthConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
    /// Directory the config was loaded from; relative paths hang off it
    #[serde(skip)]
    dir: PathBuf,
}

impl Config {
    /// Load config from the default directory.
    ///
    /// Loading order:
    /// 1. Check for RA_CONFIG_DIR env var, else use ./.roster/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply RA_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        Self::load_from(None)
    }

    /// Load config from `dir`, or from the default directory when `None`.
    pub fn load_from(dir: Option<&Path>) -> ConfigErrorResult<Self> {
        let config_dir = match dir {
            Some(dir) => dir.to_path_buf(),
            None => Self::config_dir()?,
        };

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.dir = config_dir;

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: RA_CONFIG_DIR env var > ./.roster/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.service.validate()?;
        self.auth.validate()?;
        self.session.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// The directory this config was loaded from
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the token cache directory.
    pub fn session_dir(&self) -> PathBuf {
        self.dir.join(&self.session.dir)
    }

    /// Path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> Option<PathBuf> {
        self.logging
            .file
            .as_ref()
            .map(|filename| self.dir.join(&self.logging.dir).join(filename))
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        let set_or_unset = |key: &Option<String>| if key.is_some() { "set" } else { "unset" };

        info!("Configuration loaded:");
        info!(
            "  service: {} (timeout {}s)",
            self.service.url, self.service.request_timeout_secs
        );
        info!(
            "  keys: anon={}, service_role={}",
            set_or_unset(&self.service.anon_key),
            set_or_unset(&self.service.service_role_key)
        );
        info!(
            "  auth: reset_redirect={}, min_password_length={}",
            self.auth.password_reset_redirect, self.auth.min_password_length
        );
        info!("  config dir: {}", self.dir.display());
        info!("  session: {}", self.session.dir);
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Service
        Self::apply_env_string("RA_SERVICE_URL", &mut self.service.url);
        Self::apply_env_option_string("RA_SERVICE_ANON_KEY", &mut self.service.anon_key);
        Self::apply_env_option_string("RA_SERVICE_ROLE_KEY", &mut self.service.service_role_key);
        Self::apply_env_parse(
            "RA_REQUEST_TIMEOUT_SECS",
            &mut self.service.request_timeout_secs,
        );

        // Auth
        Self::apply_env_string(
            "RA_PASSWORD_RESET_REDIRECT",
            &mut self.auth.password_reset_redirect,
        );
        Self::apply_env_parse(
            "RA_MIN_PASSWORD_LENGTH",
            &mut self.auth.min_password_length,
        );

        // Session
        Self::apply_env_string("RA_SESSION_DIR", &mut self.session.dir);

        // Logging
        Self::apply_env_parse("RA_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("RA_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("RA_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
