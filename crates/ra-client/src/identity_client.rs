use crate::error::{Api, ClientError, Result as ClientResult};
use crate::wire::{
    PasswordGrant, PasswordUpdate, RecoverRequest, RefreshGrant, SignUpData, SignUpRequest,
    TokenResponse, UserResponse, signed_up_user_id,
};
use crate::{AUTH_PREFIX, BackendClient, SessionHandle, SessionStore};

use ra_core::{
    AuthSession, CallerId, IdentityService, ProfileAttributes, ProfileId, RecoveryTokens,
    ServiceError, ServiceResult, SignedIn, StorageScope,
};

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info, warn};
use reqwest::Method;
use serde_json::Value;

/// Identity service over the GoTrue auth API
#[derive(Debug, Clone)]
pub struct IdentityClient {
    backend: BackendClient,
    session: SessionHandle,
    store: Option<SessionStore>,
    service_role_key: Option<String>,
}

impl IdentityClient {
    pub fn new(
        backend: BackendClient,
        session: SessionHandle,
        store: Option<SessionStore>,
        service_role_key: Option<String>,
    ) -> Self {
        Self {
            backend,
            session,
            store,
            service_role_key,
        }
    }

    pub fn session(&self) -> &SessionHandle {
        &self.session
    }

    /// Bring back a cached session. Expired access tokens are exchanged with
    /// the refresh token; a rejected refresh clears the cache.
    pub async fn restore_session(&self) -> ClientResult<Option<StorageScope>> {
        let Some(store) = self.store.as_ref() else {
            return Ok(None);
        };
        let Some((scope, session)) = store.load()? else {
            debug!("No cached session");
            return Ok(None);
        };

        if !session.is_expired(Utc::now()) {
            self.session.set(session);
            debug!("Restored {} session", scope.as_str());
            return Ok(Some(scope));
        }

        match self.refresh(&session.refresh_token).await {
            Ok(refreshed) => {
                store.save(scope, &refreshed)?;
                self.session.set(refreshed);
                info!("Refreshed expired {} session", scope.as_str());
                Ok(Some(scope))
            }
            Err(e) if e.status().is_some() => {
                warn!("Cached session could not be refreshed, discarding: {e}");
                store.clear()?;
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    async fn refresh(&self, refresh_token: &str) -> ClientResult<AuthSession> {
        let mut url = self.backend.url(&format!("{AUTH_PREFIX}/token"))?;
        url.query_pairs_mut()
            .append_pair("grant_type", "refresh_token");

        let req = self
            .backend
            .request(Method::POST, url, None)
            .json(&RefreshGrant { refresh_token });
        let response: TokenResponse = self.backend.execute(Api::Auth, req).await?;
        Ok(response.into_session())
    }

    async fn fetch_user(&self, access_token: &str) -> ClientResult<UserResponse> {
        let url = self.backend.url(&format!("{AUTH_PREFIX}/user"))?;
        let req = self.backend.request(Method::GET, url, Some(access_token));
        self.backend.execute(Api::Auth, req).await
    }

    async fn delete_user(&self, service_key: &str, id: ProfileId) -> ClientResult<()> {
        let url = self
            .backend
            .url(&format!("{AUTH_PREFIX}/admin/users/{id}"))?;
        let req = self.backend.request(Method::DELETE, url, Some(service_key));
        self.backend.execute_empty(Api::Auth, req).await
    }

    fn require_access_token(&self) -> ServiceResult<String> {
        self.session
            .access_token()
            .ok_or_else(|| ServiceError::auth("Auth session missing!"))
    }
}

#[async_trait]
impl IdentityService for IdentityClient {
    async fn current_caller(&self) -> ServiceResult<Option<CallerId>> {
        let Some(access_token) = self.session.access_token() else {
            return Ok(None);
        };

        match self.fetch_user(&access_token).await {
            Ok(user) => Ok(Some(CallerId(user.id))),
            Err(e) if matches!(e.status(), Some(401 | 403)) => {
                debug!("Access token rejected: {e}");
                Ok(None)
            }
            Err(e) => Err(e.into_service(Api::Auth)),
        }
    }

    async fn sign_in_with_password(&self, email: &str, password: &str) -> ServiceResult<SignedIn> {
        let result: ClientResult<TokenResponse> = async {
            let mut url = self.backend.url(&format!("{AUTH_PREFIX}/token"))?;
            url.query_pairs_mut().append_pair("grant_type", "password");

            let req = self
                .backend
                .request(Method::POST, url, None)
                .json(&PasswordGrant { email, password });
            self.backend.execute(Api::Auth, req).await
        }
        .await;

        let response = result.map_err(|e| e.into_service(Api::Auth))?;
        let caller = response.caller();
        let session = response.into_session();

        self.session.set(session.clone());
        info!("Signed in as {caller}");

        Ok(SignedIn { caller, session })
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        attributes: &ProfileAttributes,
    ) -> ServiceResult<CallerId> {
        let result: ClientResult<Value> = async {
            let url = self.backend.url(&format!("{AUTH_PREFIX}/signup"))?;
            let req = self
                .backend
                .request(Method::POST, url, None)
                .json(&SignUpRequest {
                    email,
                    password,
                    data: SignUpData {
                        first_name: &attributes.first_name,
                        last_name: &attributes.last_name,
                    },
                });
            self.backend.execute(Api::Auth, req).await
        }
        .await;

        let body = result.map_err(|e| e.into_service(Api::Auth))?;
        let id = signed_up_user_id(&body)
            .ok_or_else(|| ServiceError::auth("sign-up response did not contain a user id"))?;

        info!("Registered {email} as {id}");
        Ok(CallerId(id))
    }

    async fn send_password_reset(&self, email: &str, redirect_to: &str) -> ServiceResult<()> {
        let result: ClientResult<()> = async {
            let mut url = self.backend.url(&format!("{AUTH_PREFIX}/recover"))?;
            url.query_pairs_mut().append_pair("redirect_to", redirect_to);

            let req = self
                .backend
                .request(Method::POST, url, None)
                .json(&RecoverRequest { email });
            self.backend.execute_empty(Api::Auth, req).await
        }
        .await;

        result.map_err(|e| e.into_service(Api::Auth))
    }

    async fn set_session_from_tokens(&self, tokens: &RecoveryTokens) -> ServiceResult<()> {
        let user = self
            .fetch_user(&tokens.access_token)
            .await
            .map_err(|e| e.into_service(Api::Auth))?;

        self.session.set(AuthSession {
            access_token: tokens.access_token.clone(),
            refresh_token: tokens.refresh_token.clone(),
            token_type: tokens.token_type.clone(),
            expires_in: None,
            expires_at: None,
        });
        debug!("Installed recovery session for {}", user.id);
        Ok(())
    }

    async fn update_password(&self, new_password: &str) -> ServiceResult<()> {
        let access_token = self.require_access_token()?;

        let result: ClientResult<()> = async {
            let url = self.backend.url(&format!("{AUTH_PREFIX}/user"))?;
            let req = self
                .backend
                .request(Method::PUT, url, Some(&access_token))
                .json(&PasswordUpdate {
                    password: new_password,
                });
            self.backend.execute_empty(Api::Auth, req).await
        }
        .await;

        result.map_err(|e| e.into_service(Api::Auth))
    }

    async fn persist_session(&self, scope: StorageScope) -> ServiceResult<()> {
        let session = self
            .session
            .get()
            .ok_or_else(|| ServiceError::storage("no active session to persist"))?;

        match self.store.as_ref() {
            Some(store) => store
                .save(scope, &session)
                .map_err(|e| e.into_service(Api::Auth)),
            None => {
                debug!("No session store configured, keeping session in memory");
                Ok(())
            }
        }
    }

    async fn sign_out(&self) -> ServiceResult<()> {
        let previous = self.session.take();

        let cleared = match self.store.as_ref() {
            Some(store) => store.clear(),
            None => Ok(()),
        };

        if let Some(session) = previous {
            let url = self
                .backend
                .url(&format!("{AUTH_PREFIX}/logout"))
                .map_err(|e| e.into_service(Api::Auth))?;
            let req = self
                .backend
                .request(Method::POST, url, Some(&session.access_token));
            match self.backend.execute_empty(Api::Auth, req).await {
                Ok(()) => info!("Signed out"),
                Err(e) if matches!(e.status(), Some(401 | 403 | 404)) => {
                    debug!("Session was already invalid on the backend: {e}");
                }
                Err(e) => return Err(e.into_service(Api::Auth)),
            }
        }

        cleared.map_err(|e| e.into_service(Api::Auth))
    }

    async fn bulk_delete_users(&self, ids: &[ProfileId]) -> ServiceResult<()> {
        let service_key = self.service_role_key.as_deref().ok_or_else(|| {
            ClientError::not_configured("service.service_role_key is required to delete users")
                .into_service(Api::Auth)
        })?;

        for (done, id) in ids.iter().enumerate() {
            if let Err(e) = self.delete_user(service_key, *id).await {
                warn!(
                    "Deleting user {id} failed after {done} of {} deletions: {e}",
                    ids.len()
                );
                return Err(e.into_service(Api::Auth));
            }
        }

        info!("Deleted {} users", ids.len());
        Ok(())
    }
}
