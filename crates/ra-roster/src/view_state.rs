use crate::MutationKind;

use ra_auth::Route;

use std::fmt;

/// Lifecycle of one roster view.
///
/// `Loading -> Ready <-> Mutating -> Ready`, with `Redirected` reachable from
/// any guard re-check and `Failed` holding the message of a failed load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Loading,
    Ready,
    Mutating(MutationKind),
    Failed(String),
    Redirected(Route),
}

impl ViewState {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Loading | Self::Mutating(_))
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading => write!(f, "loading"),
            Self::Ready => write!(f, "ready"),
            Self::Mutating(kind) => write!(f, "mutating ({kind})"),
            Self::Failed(message) => write!(f, "failed: {message}"),
            Self::Redirected(route) => write!(f, "redirected to {route}"),
        }
    }
}
