use crate::RouteGate;

use std::fmt;

use serde::{Serialize, Serializer};

/// Every view the front-end knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Signup,
    ForgotPassword,
    UpdatePassword,
    Home,
    Main,
}

impl Route {
    pub const ALL: [Route; 6] = [
        Route::Login,
        Route::Signup,
        Route::ForgotPassword,
        Route::UpdatePassword,
        Route::Home,
        Route::Main,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::ForgotPassword => "/forgot-password",
            Self::UpdatePassword => "/update-password",
            Self::Home => "/",
            Self::Main => "/main",
        }
    }

    /// Match a path against the route table. Query string, fragment and a
    /// trailing slash are ignored.
    pub fn from_path(path: &str) -> Option<Route> {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        Self::ALL.into_iter().find(|route| route.path() == path)
    }

    /// The gate guarding this route's group
    pub fn gate(&self) -> RouteGate {
        match self {
            Self::Login | Self::Signup | Self::ForgotPassword | Self::UpdatePassword => {
                RouteGate::RequireUnauthenticated
            }
            Self::Home | Self::Main => RouteGate::RequireAuthenticated,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl Serialize for Route {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.path())
    }
}

/// What the view should do after an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Navigation {
    #[default]
    Stay,
    Redirect(Route),
}

impl Navigation {
    pub fn target(&self) -> Option<Route> {
        match self {
            Self::Stay => None,
            Self::Redirect(route) => Some(*route),
        }
    }
}
