use ra_core::AuthSession;

use std::sync::{Arc, RwLock};

/// The current session, shared by the identity and profile clients.
///
/// The profile client needs the caller's access token so row-level security
/// applies; the identity client is the only writer.
#[derive(Debug, Clone, Default)]
pub struct SessionHandle {
    inner: Arc<RwLock<Option<AuthSession>>>,
}

impl SessionHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<AuthSession> {
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn access_token(&self) -> Option<String> {
        self.get().map(|s| s.access_token)
    }

    pub fn set(&self, session: AuthSession) {
        *self
            .inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(session);
    }

    /// Drop the session, returning what was there
    pub fn take(&self) -> Option<AuthSession> {
        self.inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take()
    }

    pub fn is_present(&self) -> bool {
        self.get().is_some()
    }
}
