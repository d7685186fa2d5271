use crate::{AccessState, Navigation, Route};

/// The two route-level gates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteGate {
    /// Protected views: only active callers get in
    RequireAuthenticated,
    /// Sign-in and recovery views: active callers are sent home
    RequireUnauthenticated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Allow,
    Redirect(Route),
}

impl RouteGate {
    pub fn evaluate(&self, access: &AccessState) -> GateDecision {
        match (self, access.is_active()) {
            (Self::RequireAuthenticated, true) => GateDecision::Allow,
            (Self::RequireAuthenticated, false) => GateDecision::Redirect(Route::Login),
            (Self::RequireUnauthenticated, true) => GateDecision::Redirect(Route::Home),
            (Self::RequireUnauthenticated, false) => GateDecision::Allow,
        }
    }
}

impl GateDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    pub fn navigation(&self) -> Navigation {
        match self {
            Self::Allow => Navigation::Stay,
            Self::Redirect(route) => Navigation::Redirect(*route),
        }
    }
}
