mod auth_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod service_config;
mod session_config;

#[cfg(test)]
mod tests;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use service_config::ServiceConfig;
pub use session_config::SessionConfig;

const CONFIG_DIR_ENV: &str = "RA_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".roster";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:54321";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;
const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

const DEFAULT_PASSWORD_RESET_REDIRECT: &str = "http://localhost:3000/update-password";
const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;
const MIN_MIN_PASSWORD_LENGTH: usize = 6;
// bcrypt ignores everything past 72 bytes
const MAX_MIN_PASSWORD_LENGTH: usize = 72;

const DEFAULT_SESSION_DIR: &str = "sessions";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
