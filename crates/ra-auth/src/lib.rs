//! Session gating and the credential forms.
//!
//! [`SessionGuard`] answers "may this caller see this view?" against the
//! hosted services; [`AuthFlows`] drives sign-in, sign-up and password
//! recovery. Neither navigates on its own: both hand back a [`Navigation`]
//! or [`GateDecision`] for the caller to act on.

pub mod access_state;
pub mod auth_flows;
pub mod error;
pub mod forms;
pub mod route;
pub mod route_gate;
pub mod session_guard;

pub use access_state::AccessState;
pub use auth_flows::{AuthFlows, FlowSettings, Notice, SignInOutcome, SignUpOutcome};
pub use error::{AuthError, Result};
pub use forms::{ForgotPasswordForm, SignInForm, SignUpForm, UpdatePasswordForm};
pub use route::{Navigation, Route};
pub use route_gate::{GateDecision, RouteGate};
pub use session_guard::SessionGuard;

#[cfg(test)]
mod tests;
