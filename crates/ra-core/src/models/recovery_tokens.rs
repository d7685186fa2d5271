use serde::{Deserialize, Serialize};

/// Tokens carried by a password-reset link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoveryTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
}

impl RecoveryTokens {
    /// Build from link parameters. All three must be present and non-empty,
    /// otherwise the link is not a recovery link.
    pub fn from_parts(
        access_token: Option<String>,
        refresh_token: Option<String>,
        token_type: Option<String>,
    ) -> Option<Self> {
        let non_empty = |v: Option<String>| v.filter(|s| !s.is_empty());

        Some(Self {
            access_token: non_empty(access_token)?,
            refresh_token: non_empty(refresh_token)?,
            token_type: non_empty(token_type)?,
        })
    }
}
