use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failures reported by the hosted identity and data services.
///
/// The variants follow the backend split rather than the transport: a 4xx from
/// the auth API is `Auth`, a 4xx from the data API is `Db`, and anything that
/// never produced a response is `Network`.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Auth error: {message} {location}")]
    Auth {
        status: Option<u16>,
        message: String,
        location: ErrorLocation,
    },

    #[error("Database error: {message} (code: {code}) {location}")]
    Db {
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Network error: {message} {location}")]
    Network {
        message: String,
        location: ErrorLocation,
    },

    #[error("Session storage error: {message} {location}")]
    Storage {
        message: String,
        location: ErrorLocation,
    },
}

impl ServiceError {
    #[track_caller]
    pub fn auth<S: Into<String>>(message: S) -> Self {
        Self::Auth {
            status: None,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn auth_status<S: Into<String>>(status: u16, message: S) -> Self {
        Self::Auth {
            status: Some(status),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn db<C: Into<String>, S: Into<String>>(code: C, message: S) -> Self {
        Self::Db {
            code: code.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn storage<S: Into<String>>(message: S) -> Self {
        Self::Storage {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The backend's message without the source location suffix
    pub fn message(&self) -> &str {
        match self {
            Self::Auth { message, .. }
            | Self::Db { message, .. }
            | Self::Network { message, .. }
            | Self::Storage { message, .. } => message,
        }
    }

    /// HTTP status of an auth rejection, when the backend sent one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Auth { status, .. } => *status,
            _ => None,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
