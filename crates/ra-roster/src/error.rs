use crate::{MutationKind, ViewState};

use ra_core::ServiceError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Roster is busy with {kind} {location}")]
    Busy {
        kind: MutationKind,
        location: ErrorLocation,
    },

    #[error("Roster is not ready (state: {state}) {location}")]
    NotReady {
        state: ViewState,
        location: ErrorLocation,
    },

    #[error("Remote call failed: {source} {location}")]
    Remote {
        #[source]
        source: ServiceError,
        location: ErrorLocation,
    },
}

impl RosterError {
    #[track_caller]
    pub fn busy(kind: MutationKind) -> Self {
        Self::Busy {
            kind,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// `Busy` while a mutation runs, `NotReady` for every other state
    #[track_caller]
    pub fn not_ready(state: &ViewState) -> Self {
        match state {
            ViewState::Mutating(kind) => Self::busy(*kind),
            other => Self::NotReady {
                state: other.clone(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }

    #[track_caller]
    pub fn remote(source: ServiceError) -> Self {
        Self::Remote {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Text for the error banner above the table
    pub fn user_message(&self) -> String {
        match self {
            Self::Busy { .. } => String::from("Another operation is still in progress"),
            Self::NotReady { state, .. } => match state {
                ViewState::Loading => String::from("The user list is still loading"),
                ViewState::Failed(_) => {
                    String::from("The user list failed to load, reload it first")
                }
                ViewState::Redirected(_) => {
                    String::from("Your session has ended, sign in again")
                }
                ViewState::Ready | ViewState::Mutating(_) => {
                    String::from("The user list is not ready")
                }
            },
            Self::Remote { source, .. } => source.message().to_string(),
        }
    }
}

impl From<ServiceError> for RosterError {
    #[track_caller]
    fn from(source: ServiceError) -> Self {
        Self::remote(source)
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
