use ra_auth::AuthError;
use ra_client::ClientError;
use ra_config::ConfigError;
use ra_roster::RosterError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Backend error: {0}")]
    Client(#[from] ClientError),

    #[error("{0}")]
    Auth(#[from] AuthError),

    #[error("{0}")]
    Roster(#[from] RosterError),

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// What the user sees after `Error: `. Form and roster failures show the
    /// inline message; setup failures keep their full context.
    pub fn user_message(&self) -> String {
        match self {
            Self::Auth(e) => e.user_message(),
            Self::Roster(e) => e.user_message(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
