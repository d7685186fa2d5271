use crate::{
    AuthSession, CallerId, IdentityService, ProfileAttributes, ProfileId, RecoveryTokens,
    ServiceError, ServiceResult, SignedIn, StorageScope,
};

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityCall {
    CurrentCaller,
    SignIn { email: String },
    SignUp { email: String },
    PasswordReset { email: String, redirect_to: String },
    SetSession { access_token: String },
    UpdatePassword,
    Persist(StorageScope),
    SignOut,
    BulkDelete(Vec<ProfileId>),
}

#[derive(Debug, Clone)]
struct Account {
    email: String,
    password: String,
    id: CallerId,
}

/// Mutable knobs and recorded history of a [`FakeIdentity`]
#[derive(Debug, Default)]
pub struct IdentityState {
    pub caller: Option<CallerId>,
    pub persisted: Option<StorageScope>,
    pub fail_current_caller: bool,
    pub fail_sign_out: bool,
    pub fail_delete: bool,
    pub fail_reset: bool,
    pub fail_update_password: bool,
    pub reject_recovery_tokens: bool,
    /// Bulk delete never resolves
    pub stall_delete: bool,
    pub calls: Vec<IdentityCall>,
    accounts: Vec<Account>,
}

#[derive(Debug, Default)]
pub struct FakeIdentity {
    state: Mutex<IdentityState>,
}

impl FakeIdentity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signed_in_as(caller: CallerId) -> Self {
        let fake = Self::default();
        fake.state().caller = Some(caller);
        fake
    }

    pub fn with_account(self, email: &str, password: &str, id: CallerId) -> Self {
        self.state().accounts.push(Account {
            email: email.to_string(),
            password: password.to_string(),
            id,
        });
        self
    }

    /// Lock the fake to tweak knobs or read history
    pub fn state(&self) -> MutexGuard<'_, IdentityState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn calls(&self) -> Vec<IdentityCall> {
        self.state().calls.clone()
    }

    pub fn sign_out_calls(&self) -> usize {
        self.state()
            .calls
            .iter()
            .filter(|c| **c == IdentityCall::SignOut)
            .count()
    }

    fn record(&self, call: IdentityCall) -> MutexGuard<'_, IdentityState> {
        let mut state = self.state();
        state.calls.push(call);
        state
    }

    fn session_for(id: CallerId) -> AuthSession {
        AuthSession {
            access_token: format!("access-{id}"),
            refresh_token: format!("refresh-{id}"),
            token_type: String::from("bearer"),
            expires_in: Some(3600),
            expires_at: None,
        }
    }
}

#[async_trait]
impl IdentityService for FakeIdentity {
    async fn current_caller(&self) -> ServiceResult<Option<CallerId>> {
        let state = self.record(IdentityCall::CurrentCaller);
        if state.fail_current_caller {
            return Err(ServiceError::network("connection refused"));
        }
        Ok(state.caller)
    }

    async fn sign_in_with_password(&self, email: &str, password: &str) -> ServiceResult<SignedIn> {
        let mut state = self.record(IdentityCall::SignIn {
            email: email.to_string(),
        });

        let id = state
            .accounts
            .iter()
            .find(|a| a.email == email && a.password == password)
            .map(|a| a.id)
            .ok_or_else(|| ServiceError::auth_status(400, "Invalid login credentials"))?;

        state.caller = Some(id);
        Ok(SignedIn {
            caller: id,
            session: Self::session_for(id),
        })
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        _attributes: &ProfileAttributes,
    ) -> ServiceResult<CallerId> {
        let mut state = self.record(IdentityCall::SignUp {
            email: email.to_string(),
        });

        if state.accounts.iter().any(|a| a.email == email) {
            return Err(ServiceError::auth_status(422, "User already registered"));
        }

        let id = CallerId(Uuid::new_v4());
        state.accounts.push(Account {
            email: email.to_string(),
            password: password.to_string(),
            id,
        });
        Ok(id)
    }

    async fn send_password_reset(&self, email: &str, redirect_to: &str) -> ServiceResult<()> {
        let state = self.record(IdentityCall::PasswordReset {
            email: email.to_string(),
            redirect_to: redirect_to.to_string(),
        });
        if state.fail_reset {
            return Err(ServiceError::auth_status(429, "Email rate limit exceeded"));
        }
        Ok(())
    }

    async fn set_session_from_tokens(&self, tokens: &RecoveryTokens) -> ServiceResult<()> {
        let state = self.record(IdentityCall::SetSession {
            access_token: tokens.access_token.clone(),
        });
        if state.reject_recovery_tokens {
            return Err(ServiceError::auth_status(401, "Token has expired or is invalid"));
        }
        Ok(())
    }

    async fn update_password(&self, _new_password: &str) -> ServiceResult<()> {
        let state = self.record(IdentityCall::UpdatePassword);
        if state.fail_update_password {
            return Err(ServiceError::auth_status(
                422,
                "New password should be different from the old password.",
            ));
        }
        Ok(())
    }

    async fn persist_session(&self, scope: StorageScope) -> ServiceResult<()> {
        let mut state = self.record(IdentityCall::Persist(scope));
        if state.caller.is_none() {
            return Err(ServiceError::storage("no active session to persist"));
        }
        state.persisted = Some(scope);
        Ok(())
    }

    async fn sign_out(&self) -> ServiceResult<()> {
        let mut state = self.record(IdentityCall::SignOut);
        state.caller = None;
        state.persisted = None;
        if state.fail_sign_out {
            return Err(ServiceError::network("connection reset"));
        }
        Ok(())
    }

    async fn bulk_delete_users(&self, ids: &[ProfileId]) -> ServiceResult<()> {
        let (stall, fail) = {
            let state = self.record(IdentityCall::BulkDelete(ids.to_vec()));
            (state.stall_delete, state.fail_delete)
        };

        if stall {
            std::future::pending::<()>().await;
        }
        if fail {
            return Err(ServiceError::auth_status(403, "User not allowed"));
        }
        Ok(())
    }
}
