mod forms;
mod session_guard;

use crate::{AuthFlows, FlowSettings, SessionGuard};

use ra_core::testing::{FakeIdentity, FakeProfileStore};

use std::sync::Arc;

pub(crate) struct Harness {
    pub identity: Arc<FakeIdentity>,
    pub profiles: Arc<FakeProfileStore>,
}

impl Harness {
    pub fn new(identity: FakeIdentity, profiles: FakeProfileStore) -> Self {
        Self {
            identity: Arc::new(identity),
            profiles: Arc::new(profiles),
        }
    }

    pub fn guard(&self) -> SessionGuard {
        SessionGuard::new(self.identity.clone(), self.profiles.clone())
    }

    pub fn flows(&self) -> AuthFlows {
        AuthFlows::new(
            self.identity.clone(),
            self.profiles.clone(),
            FlowSettings::default(),
        )
    }
}
