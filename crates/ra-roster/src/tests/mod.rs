
use crate::RosterManager;

use ra_core::testing::{FakeIdentity, FakeProfileStore, fixture_caller, fixture_row};
use ra_core::ProfileRow;

use std::sync::Arc;

pub(crate) const ADMIN: u128 = 100;

pub(crate) struct Harness {
    pub identity: Arc<FakeIdentity>,
    pub profiles: Arc<FakeProfileStore>,
    pub manager: RosterManager,
}

impl Harness {
    /// Signed in as an active admin whose own profile is stored but not part
    /// of `rows`
    pub fn new(rows: Vec<ProfileRow>) -> Self {
        let identity = Arc::new(FakeIdentity::signed_in_as(fixture_caller(ADMIN)));
        let profiles = Arc::new(FakeProfileStore::with_rows(rows));
        let manager = RosterManager::new(identity.clone(), profiles.clone());

        Self {
            identity,
            profiles,
            manager,
        }
    }

    /// Like [`Harness::new`] with the roster already loaded. The admin's own
    /// row is only added to the store afterwards, so the roster is exactly
    /// `rows`.
    pub async fn loaded(rows: Vec<ProfileRow>) -> Self {
        let mut harness = Self::new(rows);
        harness.manager.load_roster().await.unwrap();
        harness.profiles.state().rows.push(fixture_row(ADMIN, false));
        harness
    }

    pub fn block_admin(&self) {
        for row in self.profiles.state().rows.iter_mut() {
            if row.id.0 == fixture_caller(ADMIN).0 {
                row.is_blocked = true;
            }
        }
    }
}
