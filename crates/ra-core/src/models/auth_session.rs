use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tokens issued by the identity service for a signed-in caller.
///
/// The shape matches the token endpoint's response so it can be cached and
/// restored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: Option<i64>,
    /// Unix timestamp (seconds)
    #[serde(default)]
    pub expires_at: Option<i64>,
}

fn default_token_type() -> String {
    String::from("bearer")
}

impl AuthSession {
    /// A session without an expiry is assumed valid; the server has the final say.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at
            .map(|expires_at| now.timestamp() >= expires_at)
            .unwrap_or(false)
    }
}
