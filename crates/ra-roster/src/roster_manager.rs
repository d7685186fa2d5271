use crate::in_flight::InFlight;
use crate::{
    MutationKind, MutationOutcome, Result as RosterResult, RosterError, SelectionSummary,
    ViewState,
};

use ra_auth::{GateDecision, Navigation, Route, RouteGate, SessionGuard};
use ra_core::{IdentityService, ProfileId, ProfilePatch, ProfileRow, ProfileStore};

use std::collections::BTreeSet;
use std::sync::Arc;

use log::{debug, info, warn};

/// One user-management view: the loaded roster, the ticked rows and the
/// bulk actions over them.
///
/// Every destructive action re-runs the [`SessionGuard`] first and only
/// touches local state after the remote call succeeded. Mutating methods take
/// `&mut self`, so a second action cannot start while one is in flight.
pub struct RosterManager {
    identity: Arc<dyn IdentityService>,
    profiles: Arc<dyn ProfileStore>,
    guard: SessionGuard,
    rows: Vec<ProfileRow>,
    selection: BTreeSet<ProfileId>,
    state: ViewState,
}

impl RosterManager {
    pub fn new(identity: Arc<dyn IdentityService>, profiles: Arc<dyn ProfileStore>) -> Self {
        let guard = SessionGuard::new(identity.clone(), profiles.clone());
        Self {
            identity,
            profiles,
            guard,
            rows: Vec::new(),
            selection: BTreeSet::new(),
            state: ViewState::Loading,
        }
    }

    pub fn rows(&self) -> &[ProfileRow] {
        &self.rows
    }

    pub fn selection(&self) -> &BTreeSet<ProfileId> {
        &self.selection
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    // =====================================================================
    // Loading
    // =====================================================================

    /// View entry: run the protected-route gate, then load the roster
    pub async fn enter(&mut self) -> RosterResult<Navigation> {
        match self.guard.admit(RouteGate::RequireAuthenticated).await {
            GateDecision::Allow => {
                self.load_roster().await?;
                Ok(Navigation::Stay)
            }
            GateDecision::Redirect(route) => {
                self.state = ViewState::Redirected(route);
                Ok(Navigation::Redirect(route))
            }
        }
    }

    /// Fetch every profile, newest first. Clears the selection; on failure
    /// the roster stays empty and the view shows the error.
    pub async fn load_roster(&mut self) -> RosterResult<&[ProfileRow]> {
        if let ViewState::Mutating(kind) = self.state {
            debug!("Refusing reload during {kind}");
            return Err(RosterError::busy(kind));
        }

        self.state = ViewState::Loading;
        self.selection.clear();
        self.rows.clear();

        match self.profiles.select_all().await {
            Ok(mut rows) => {
                rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                debug!("Loaded {} profiles", rows.len());
                self.rows = rows;
                self.state = ViewState::Ready;
                Ok(&self.rows)
            }
            Err(e) => {
                warn!("Loading profiles failed: {e}");
                self.state = ViewState::Failed(e.message().to_string());
                Err(RosterError::remote(e))
            }
        }
    }

    // =====================================================================
    // Selection
    // =====================================================================

    fn contains(&self, id: ProfileId) -> bool {
        self.rows.iter().any(|row| row.id == id)
    }

    /// Flip one row. Ids not in the roster are ignored.
    pub fn toggle_row(&mut self, id: ProfileId) {
        if !self.contains(id) {
            return;
        }
        if !self.selection.remove(&id) {
            self.selection.insert(id);
        }
    }

    /// Tick every row, or none
    pub fn select_all(&mut self, selected: bool) {
        self.selection = if selected {
            self.rows.iter().map(|row| row.id).collect()
        } else {
            BTreeSet::new()
        };
    }

    /// Add a batch of ids to the selection, skipping unknown ones. Returns how
    /// many of them are in the roster.
    pub fn select_ids<I>(&mut self, ids: I) -> usize
    where
        I: IntoIterator<Item = ProfileId>,
    {
        let mut matched = 0;
        for id in ids {
            if self.contains(id) {
                self.selection.insert(id);
                matched += 1;
            }
        }
        matched
    }

    pub fn all_selected(&self) -> bool {
        !self.selection.is_empty() && self.selection.len() == self.rows.len()
    }

    pub fn partially_selected(&self) -> bool {
        !self.selection.is_empty() && self.selection.len() < self.rows.len()
    }

    pub fn selection_summary(&self) -> SelectionSummary {
        SelectionSummary {
            selected: self.selection.len(),
            total: self.rows.len(),
        }
    }

    /// Whether the bulk-action controls are enabled
    pub fn can_mutate(&self) -> bool {
        !self.state.is_busy() && !self.selection.is_empty()
    }

    // =====================================================================
    // Bulk actions
    // =====================================================================

    fn ensure_ready(&self) -> RosterResult<()> {
        if self.state.is_ready() {
            Ok(())
        } else {
            Err(RosterError::not_ready(&self.state))
        }
    }

    /// Delete every selected account. All or nothing locally: on failure the
    /// roster and selection stay as they were.
    pub async fn delete_selected(&mut self) -> RosterResult<MutationOutcome> {
        if self.selection.is_empty() {
            return Ok(MutationOutcome::NothingSelected);
        }
        self.ensure_ready()?;

        let ids: Vec<ProfileId> = self.selection.iter().copied().collect();
        let in_flight = InFlight::begin(&mut self.state, MutationKind::Delete);

        if !self.guard.check_access().await.is_active() {
            in_flight.settle(ViewState::Redirected(Route::Login));
            return Ok(MutationOutcome::Aborted {
                redirect: Route::Login,
            });
        }

        if let Err(e) = self.identity.bulk_delete_users(&ids).await {
            warn!("Deleting {} users failed: {e}", ids.len());
            in_flight.settle(ViewState::Ready);
            return Err(RosterError::remote(e));
        }
        in_flight.settle(ViewState::Ready);

        let deleted: BTreeSet<ProfileId> = ids.into_iter().collect();
        self.rows.retain(|row| !deleted.contains(&row.id));
        self.selection.clear();

        info!("Deleted {} users", deleted.len());
        Ok(MutationOutcome::Applied {
            affected: deleted.len(),
            navigation: Navigation::Stay,
        })
    }

    /// Block or unblock every selected account, then re-check the caller's
    /// own access in case they were among them.
    pub async fn set_blocked(&mut self, blocked: bool) -> RosterResult<MutationOutcome> {
        if self.selection.is_empty() {
            return Ok(MutationOutcome::NothingSelected);
        }
        self.ensure_ready()?;

        let ids: Vec<ProfileId> = self.selection.iter().copied().collect();
        let kind = MutationKind::for_blocked(blocked);
        let in_flight = InFlight::begin(&mut self.state, kind);

        if !self.guard.check_access().await.is_active() {
            in_flight.settle(ViewState::Redirected(Route::Login));
            return Ok(MutationOutcome::Aborted {
                redirect: Route::Login,
            });
        }

        let patch = ProfilePatch::blocked(blocked);
        if let Err(e) = self.profiles.update_where_id_in(&ids, &patch).await {
            warn!("Failed to {kind} {} users: {e}", ids.len());
            in_flight.settle(ViewState::Ready);
            return Err(RosterError::remote(e));
        }

        for row in self.rows.iter_mut().filter(|row| ids.contains(&row.id)) {
            row.apply(&patch);
        }
        self.selection.clear();
        info!("Applied {kind} to {} users", ids.len());

        let navigation = if self.guard.check_access().await.is_active() {
            in_flight.settle(ViewState::Ready);
            Navigation::Stay
        } else {
            in_flight.settle(ViewState::Redirected(Route::Login));
            Navigation::Redirect(Route::Login)
        };

        Ok(MutationOutcome::Applied {
            affected: ids.len(),
            navigation,
        })
    }

    /// Best-effort sign-out; always ends on the sign-in view
    pub async fn sign_out(&mut self) -> Navigation {
        if let Err(e) = self.identity.sign_out().await {
            warn!("Sign-out failed (ignored): {e}");
        }

        self.rows.clear();
        self.selection.clear();
        self.state = ViewState::Redirected(Route::Login);
        Navigation::Redirect(Route::Login)
    }
}
