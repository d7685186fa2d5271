use ra_core::CallerId;

use std::fmt;

/// Outcome of a session check.
///
/// `Blocked` is kept apart from `Unauthenticated` for logging only; the
/// caller has already been signed out and every accessor treats the two alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessState {
    Unauthenticated,
    Active(CallerId),
    Blocked,
}

impl AccessState {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }

    pub fn caller(&self) -> Option<CallerId> {
        match self {
            Self::Active(caller) => Some(*caller),
            Self::Unauthenticated | Self::Blocked => None,
        }
    }
}

impl fmt::Display for AccessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthenticated => write!(f, "unauthenticated"),
            Self::Active(caller) => write!(f, "active({caller})"),
            Self::Blocked => write!(f, "blocked"),
        }
    }
}
