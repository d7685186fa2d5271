//! Response bodies of the auth API that the client reads.

use ra_core::{AuthSession, CallerId};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub(crate) struct UserResponse {
    pub id: Uuid,
}

/// `POST /token` response (password and refresh_token grants)
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: UserResponse,
}

impl TokenResponse {
    pub fn caller(&self) -> CallerId {
        CallerId(self.user.id)
    }

    pub fn into_session(self) -> AuthSession {
        let expires_at = self
            .expires_at
            .or_else(|| self.expires_in.map(|secs| Utc::now().timestamp() + secs));

        AuthSession {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            token_type: self.token_type.unwrap_or_else(|| String::from("bearer")),
            expires_in: self.expires_in,
            expires_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct PasswordGrant<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct RefreshGrant<'a> {
    pub refresh_token: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct SignUpRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub data: SignUpData<'a>,
}

#[derive(Debug, Serialize)]
pub(crate) struct SignUpData<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct RecoverRequest<'a> {
    pub email: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct PasswordUpdate<'a> {
    pub password: &'a str,
}

/// Sign-up answers with the bare user when confirmation is required and with
/// `{user, session}` when it is not.
pub(crate) fn signed_up_user_id(body: &Value) -> Option<Uuid> {
    body.get("id")
        .or_else(|| body.get("user").and_then(|user| user.get("id")))
        .and_then(Value::as_str)
        .and_then(|id| Uuid::parse_str(id).ok())
}
