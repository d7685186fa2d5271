use crate::{NewProfile, ProfileId, ProfilePatch, ProfileRow, ProfileStore, ServiceError, ServiceResult};

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    SelectAll,
    SelectOne(ProfileId),
    SelectBlocked(ProfileId),
    Insert(ProfileId),
    Update { ids: Vec<ProfileId>, patch: ProfilePatch },
}

#[derive(Debug, Default)]
pub struct StoreState {
    pub rows: Vec<ProfileRow>,
    pub fail_select_all: bool,
    pub fail_select_one: bool,
    /// Fails the blocked-flag lookup used by the guard and sign-in
    pub fail_select_blocked: bool,
    pub fail_insert: bool,
    pub fail_update: bool,
    pub calls: Vec<StoreCall>,
}

#[derive(Debug, Default)]
pub struct FakeProfileStore {
    state: Mutex<StoreState>,
}

impl FakeProfileStore {
    pub fn with_rows(rows: Vec<ProfileRow>) -> Self {
        Self {
            state: Mutex::new(StoreState {
                rows,
                ..StoreState::default()
            }),
        }
    }

    pub fn state(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.state().calls.clone()
    }

    pub fn blocked_lookups(&self) -> usize {
        self.state()
            .calls
            .iter()
            .filter(|c| matches!(c, StoreCall::SelectBlocked(_)))
            .count()
    }

    pub fn row(&self, id: ProfileId) -> Option<ProfileRow> {
        self.state().rows.iter().find(|r| r.id == id).cloned()
    }

    fn record(&self, call: StoreCall) -> MutexGuard<'_, StoreState> {
        let mut state = self.state();
        state.calls.push(call);
        state
    }
}

#[async_trait]
impl ProfileStore for FakeProfileStore {
    async fn select_all(&self) -> ServiceResult<Vec<ProfileRow>> {
        let state = self.record(StoreCall::SelectAll);
        if state.fail_select_all {
            return Err(ServiceError::db("42501", "permission denied for table profiles"));
        }

        let mut rows = state.rows.clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn select_one(&self, id: ProfileId) -> ServiceResult<Option<ProfileRow>> {
        let state = self.record(StoreCall::SelectOne(id));
        if state.fail_select_one {
            return Err(ServiceError::network("timed out"));
        }
        Ok(state.rows.iter().find(|r| r.id == id).cloned())
    }

    async fn select_blocked(&self, id: ProfileId) -> ServiceResult<Option<bool>> {
        let state = self.record(StoreCall::SelectBlocked(id));
        if state.fail_select_blocked {
            return Err(ServiceError::network("timed out"));
        }
        Ok(state.rows.iter().find(|r| r.id == id).map(|r| r.is_blocked))
    }

    async fn insert(&self, row: &NewProfile) -> ServiceResult<()> {
        let mut state = self.record(StoreCall::Insert(row.id));
        if state.fail_insert {
            return Err(ServiceError::db("23505", "duplicate key value violates unique constraint"));
        }

        state.rows.push(ProfileRow {
            id: row.id,
            email: row.email.clone(),
            first_name: Some(row.first_name.clone()),
            last_name: Some(row.last_name.clone()),
            created_at: Utc::now(),
            last_sign_in: None,
            is_blocked: row.is_blocked,
        });
        Ok(())
    }

    async fn update_where_id_in(
        &self,
        ids: &[ProfileId],
        patch: &ProfilePatch,
    ) -> ServiceResult<()> {
        let mut state = self.record(StoreCall::Update {
            ids: ids.to_vec(),
            patch: *patch,
        });
        if state.fail_update {
            return Err(ServiceError::db("PGRST301", "JWT expired"));
        }

        for row in state.rows.iter_mut().filter(|r| ids.contains(&r.id)) {
            row.apply(patch);
        }
        Ok(())
    }
}
