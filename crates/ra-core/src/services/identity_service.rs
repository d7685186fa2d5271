use crate::{
    CallerId, ProfileAttributes, ProfileId, RecoveryTokens, ServiceResult, SignedIn,
    StorageScope,
};

use async_trait::async_trait;

/// The hosted auth service: sign-in, sign-up, password recovery, sessions and
/// user administration.
///
/// Implementations keep the current session themselves; callers never handle
/// raw tokens except through [`RecoveryTokens`].
#[async_trait]
pub trait IdentityService: Send + Sync {
    /// Who is signed in right now, if anyone
    async fn current_caller(&self) -> ServiceResult<Option<CallerId>>;

    /// Exchange credentials for a session. The session becomes current but is
    /// not persisted until [`IdentityService::persist_session`].
    async fn sign_in_with_password(&self, email: &str, password: &str) -> ServiceResult<SignedIn>;

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        attributes: &ProfileAttributes,
    ) -> ServiceResult<CallerId>;

    /// Ask the service to email a reset link that lands on `redirect_to`
    async fn send_password_reset(&self, email: &str, redirect_to: &str) -> ServiceResult<()>;

    /// Install the session carried by a reset link
    async fn set_session_from_tokens(&self, tokens: &RecoveryTokens) -> ServiceResult<()>;

    /// Change the current caller's password
    async fn update_password(&self, new_password: &str) -> ServiceResult<()>;

    /// Cache the current session in the given storage
    async fn persist_session(&self, scope: StorageScope) -> ServiceResult<()>;

    /// End the current session. Local session state is dropped even when the
    /// remote call fails.
    async fn sign_out(&self) -> ServiceResult<()>;

    /// Delete the given users from the identity service. All-or-nothing from
    /// the caller's point of view.
    async fn bulk_delete_users(&self, ids: &[ProfileId]) -> ServiceResult<()>;
}
