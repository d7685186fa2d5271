use crate::{AuthSession, CallerId};

/// Result of a successful password sign-in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedIn {
    pub caller: CallerId,
    pub session: AuthSession,
}
