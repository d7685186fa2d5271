use ra_core::{CoreError, ServiceError};

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

pub const ACCOUNT_BLOCKED_MESSAGE: &str = "Your account is blocked or deleted";
pub const INVALID_LINK_MESSAGE: &str = "Invalid or expired link";

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("{source}")]
    Validation {
        #[from]
        source: CoreError,
    },

    #[error("Identity service rejected the request: {source} {location}")]
    Remote {
        #[source]
        source: ServiceError,
        location: ErrorLocation,
    },

    #[error("Account blocked or deleted {location}")]
    AccountBlocked { location: ErrorLocation },

    #[error("Invalid or expired recovery link {location}")]
    InvalidLink { location: ErrorLocation },
}

impl AuthError {
    #[track_caller]
    pub fn remote(source: ServiceError) -> Self {
        Self::Remote {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn account_blocked() -> Self {
        Self::AccountBlocked {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_link() -> Self {
        Self::InvalidLink {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Inline text for the form, without source locations
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { source } => source.user_message(),
            Self::Remote { source, .. } => source.message().to_string(),
            Self::AccountBlocked { .. } => ACCOUNT_BLOCKED_MESSAGE.to_string(),
            Self::InvalidLink { .. } => INVALID_LINK_MESSAGE.to_string(),
        }
    }

    /// The form field to highlight, for validation failures
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation { source } => source.field(),
            _ => None,
        }
    }
}

impl From<ServiceError> for AuthError {
    #[track_caller]
    fn from(source: ServiceError) -> Self {
        Self::remote(source)
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
