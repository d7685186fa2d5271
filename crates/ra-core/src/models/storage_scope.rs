use serde::{Deserialize, Serialize};

/// Where a signed-in session token is cached, chosen by "remember me"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StorageScope {
    /// Survives until explicit sign-out
    Durable,
    /// Dropped when the invoking terminal session ends
    #[default]
    SessionScoped,
}

impl StorageScope {
    pub fn from_remember_me(remember_me: bool) -> Self {
        if remember_me {
            Self::Durable
        } else {
            Self::SessionScoped
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Durable => "durable",
            Self::SessionScoped => "session_scoped",
        }
    }
}
