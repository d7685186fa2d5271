use crate::{AccessState, GateDecision, Route, RouteGate};

use ra_core::{IdentityService, ProfileStore};

use std::sync::Arc;

use log::{debug, warn};

/// Decides whether the current caller may enter a view.
///
/// Fails closed: a profile lookup that errors or finds no row is treated as a
/// blocked account and the caller is signed out.
#[derive(Clone)]
pub struct SessionGuard {
    identity: Arc<dyn IdentityService>,
    profiles: Arc<dyn ProfileStore>,
}

impl SessionGuard {
    pub fn new(identity: Arc<dyn IdentityService>, profiles: Arc<dyn ProfileStore>) -> Self {
        Self { identity, profiles }
    }

    /// Full check: identity lookup, then the caller's blocked flag
    pub async fn check_access(&self) -> AccessState {
        let caller = match self.check_caller_only().await {
            AccessState::Active(caller) => caller,
            other => return other,
        };

        let blocked = match self.profiles.select_blocked(caller.profile_id()).await {
            Ok(Some(is_blocked)) => is_blocked,
            Ok(None) => {
                warn!("No profile row for {caller}, treating as blocked");
                true
            }
            Err(e) => {
                warn!("Profile lookup for {caller} failed, treating as blocked: {e}");
                true
            }
        };

        if !blocked {
            debug!("Access granted to {caller}");
            return AccessState::Active(caller);
        }

        warn!("Signing out blocked caller {caller}");
        if let Err(e) = self.identity.sign_out().await {
            debug!("Forced sign-out failed (ignored): {e}");
        }
        AccessState::Blocked
    }

    /// Identity lookup alone, without consulting the profile table
    pub async fn check_caller_only(&self) -> AccessState {
        match self.identity.current_caller().await {
            Ok(Some(caller)) => AccessState::Active(caller),
            Ok(None) => {
                debug!("No current caller");
                AccessState::Unauthenticated
            }
            Err(e) => {
                debug!("Identity lookup failed, treating as unauthenticated: {e}");
                AccessState::Unauthenticated
            }
        }
    }

    /// Run `gate` against the current session
    pub async fn admit(&self, gate: RouteGate) -> GateDecision {
        let access = match gate {
            RouteGate::RequireAuthenticated => self.check_access().await,
            RouteGate::RequireUnauthenticated => self.check_caller_only().await,
        };

        let decision = gate.evaluate(&access);
        debug!("{gate:?} with {access}: {decision:?}");
        decision
    }

    /// Resolve `path` and run its gate. Unknown paths redirect home without
    /// touching the services.
    pub async fn enter(&self, path: &str) -> GateDecision {
        match Route::from_path(path) {
            Some(route) => self.admit(route.gate()).await,
            None => {
                debug!("Unknown path '{path}', redirecting to {}", Route::Home);
                GateDecision::Redirect(Route::Home)
            }
        }
    }
}
