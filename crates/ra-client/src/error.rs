use ra_core::ServiceError;

use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Which backend API produced a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Api {
    Auth,
    Data,
}

/// Errors that can occur during API calls
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error: {message} (status: {status}, code: {code}) {location}")]
    Api {
        api: Api,
        status: u16,
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid URL '{url}': {message} {location}")]
    Url {
        url: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Session file error at {path}: {source} {location}")]
    Io {
        path: PathBuf,
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },

    #[error("Not configured: {message} {location}")]
    NotConfigured {
        message: String,
        location: ErrorLocation,
    },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create an API error with location
    #[track_caller]
    pub fn api_error(api: Api, status: u16, code: String, message: String) -> Self {
        ClientError::Api {
            api,
            status,
            code,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn url<E: std::fmt::Display>(url: String, err: E) -> Self {
        ClientError::Url {
            url,
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn io(path: PathBuf, source: std::io::Error) -> Self {
        ClientError::Io {
            path,
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }

    #[track_caller]
    pub fn not_configured<S: Into<String>>(message: S) -> Self {
        ClientError::NotConfigured {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// HTTP status of an API rejection
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Fold into the service taxonomy. `api` decides how undecodable
    /// responses are classified.
    #[track_caller]
    pub fn into_service(self, api: Api) -> ServiceError {
        match self {
            Self::Http { message, .. } => ServiceError::network(message),
            Self::Url { url, message, .. } => ServiceError::network(format!("{url}: {message}")),
            Self::Api {
                api: Api::Auth,
                status,
                message,
                ..
            } => ServiceError::auth_status(status, message),
            Self::Api {
                api: Api::Data,
                code,
                message,
                ..
            } => ServiceError::db(code, message),
            Self::Json { message, .. } => match api {
                Api::Auth => ServiceError::auth(format!("unexpected response: {message}")),
                Api::Data => ServiceError::db("DECODE", format!("unexpected response: {message}")),
            },
            Self::Io { path, source, .. } => {
                ServiceError::storage(format!("{}: {source}", path.display()))
            }
            Self::NotConfigured { message, .. } => match api {
                Api::Auth => ServiceError::auth(message),
                Api::Data => ServiceError::db("CONFIG", message),
            },
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
