use crate::error::{ClientError, Result as ClientResult};
use crate::{BackendClient, IdentityClient, ProfileClient, SessionHandle, SessionStore};

use ra_config::Config;

use std::sync::Arc;
use std::time::Duration;

use log::info;

/// Both service clients, sharing one HTTP client and one session.
#[derive(Debug, Clone)]
pub struct Backend {
    pub identity: Arc<IdentityClient>,
    pub profiles: Arc<ProfileClient>,
}

impl Backend {
    /// Build the clients from configuration and restore any cached session.
    pub async fn connect(config: &Config) -> ClientResult<Self> {
        let anon_key = config
            .service
            .anon_key
            .as_deref()
            .ok_or_else(|| ClientError::not_configured("service.anon_key is not set"))?;

        let client = BackendClient::new(
            &config.service.url,
            anon_key,
            Duration::from_secs(config.service.request_timeout_secs),
        )?;

        let store = SessionStore::new(config.session_dir());
        let backend = Self::with_parts(
            client,
            Some(store),
            config.service.service_role_key.clone(),
        );

        if let Some(scope) = backend.identity.restore_session().await? {
            info!("Using cached {} session", scope.as_str());
        }

        Ok(backend)
    }

    /// Wire the clients around an existing HTTP client
    pub fn with_parts(
        client: BackendClient,
        store: Option<SessionStore>,
        service_role_key: Option<String>,
    ) -> Self {
        let session = SessionHandle::new();

        Self {
            identity: Arc::new(IdentityClient::new(
                client.clone(),
                session.clone(),
                store,
                service_role_key,
            )),
            profiles: Arc::new(ProfileClient::new(client, session)),
        }
    }
}
