use crate::{
    AuthError, ForgotPasswordForm, Navigation, Result as AuthResult, Route, SignInForm,
    SignUpForm, UpdatePasswordForm,
};

use ra_config::AuthConfig;
use ra_core::validation::DEFAULT_MIN_PASSWORD_LENGTH;
use ra_core::{
    CallerId, IdentityService, NewProfile, ProfileStore, RecoveryTokens, StorageScope,
};

use std::sync::Arc;

use log::{debug, info, warn};

pub const RESET_EMAIL_SENT: &str = "An email with instructions has been sent to your email";
pub const PASSWORD_UPDATED: &str =
    "The password has been successfully updated! Redirect to the login page...";

/// Knobs of the credential flows
#[derive(Debug, Clone)]
pub struct FlowSettings {
    pub min_password_length: usize,
    pub password_reset_redirect: String,
}

impl Default for FlowSettings {
    fn default() -> Self {
        Self {
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            password_reset_redirect: String::from("http://localhost:3000/update-password"),
        }
    }
}

impl From<&AuthConfig> for FlowSettings {
    fn from(config: &AuthConfig) -> Self {
        Self {
            min_password_length: config.min_password_length,
            password_reset_redirect: config.password_reset_redirect.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInOutcome {
    pub caller: CallerId,
    pub scope: StorageScope,
    pub navigation: Navigation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpOutcome {
    pub caller: CallerId,
    pub navigation: Navigation,
}

/// Success text for the form plus where to go next
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: &'static str,
    pub navigation: Navigation,
}

/// The sign-in, sign-up and password recovery forms.
///
/// Each operation validates its form before any remote call. Failures come
/// back as [`AuthError`] for inline display; nothing navigates on error.
#[derive(Clone)]
pub struct AuthFlows {
    identity: Arc<dyn IdentityService>,
    profiles: Arc<dyn ProfileStore>,
    settings: FlowSettings,
}

impl AuthFlows {
    pub fn new(
        identity: Arc<dyn IdentityService>,
        profiles: Arc<dyn ProfileStore>,
        settings: FlowSettings,
    ) -> Self {
        Self {
            identity,
            profiles,
            settings,
        }
    }

    /// Sign in, refuse blocked or profile-less accounts, then cache the
    /// session where "remember me" says.
    pub async fn sign_in(&self, form: &SignInForm) -> AuthResult<SignInOutcome> {
        form.validate(self.settings.min_password_length)?;

        let signed_in = self
            .identity
            .sign_in_with_password(form.email.trim(), &form.password)
            .await?;
        let caller = signed_in.caller;

        let active = match self.profiles.select_blocked(caller.profile_id()).await {
            Ok(Some(is_blocked)) => !is_blocked,
            Ok(None) => false,
            Err(e) => {
                warn!("Profile lookup after sign-in failed for {caller}: {e}");
                false
            }
        };

        if !active {
            warn!("Refusing sign-in of blocked or deleted account {caller}");
            if let Err(e) = self.identity.sign_out().await {
                debug!("Sign-out after refused sign-in failed (ignored): {e}");
            }
            return Err(AuthError::account_blocked());
        }

        let scope = StorageScope::from_remember_me(form.remember_me);
        self.identity.persist_session(scope).await?;

        info!("Signed in {caller} ({} session)", scope.as_str());
        Ok(SignInOutcome {
            caller,
            scope,
            navigation: Navigation::Redirect(Route::Main),
        })
    }

    /// Register the account and its profile row
    pub async fn sign_up(&self, form: &SignUpForm) -> AuthResult<SignUpOutcome> {
        form.validate(self.settings.min_password_length)?;

        let email = form.email.trim();
        let attributes = form.attributes();

        let caller = self
            .identity
            .sign_up(email, &form.password, &attributes)
            .await?;

        self.profiles
            .insert(&NewProfile::new(caller, email, &attributes))
            .await?;

        info!("Registered {caller}");
        Ok(SignUpOutcome {
            caller,
            navigation: Navigation::Redirect(Route::Login),
        })
    }

    /// Mail a recovery link pointing at the update-password view
    pub async fn forgot_password(&self, form: &ForgotPasswordForm) -> AuthResult<Notice> {
        form.validate()?;

        self.identity
            .send_password_reset(form.email.trim(), &self.settings.password_reset_redirect)
            .await?;

        debug!("Password reset requested");
        Ok(Notice {
            message: RESET_EMAIL_SENT,
            navigation: Navigation::Stay,
        })
    }

    /// Install the session carried by a recovery link. Missing or rejected
    /// tokens both read as an invalid link.
    pub async fn open_recovery_link(&self, tokens: Option<&RecoveryTokens>) -> AuthResult<()> {
        let tokens = tokens.ok_or_else(AuthError::invalid_link)?;

        self.identity
            .set_session_from_tokens(tokens)
            .await
            .map_err(|e| {
                debug!("Recovery tokens rejected: {e}");
                AuthError::invalid_link()
            })
    }

    /// Set a new password for the session installed from the recovery link
    pub async fn update_password(&self, form: &UpdatePasswordForm) -> AuthResult<Notice> {
        form.validate(self.settings.min_password_length)?;

        self.identity.update_password(&form.password).await?;

        info!("Password updated");
        Ok(Notice {
            message: PASSWORD_UPDATED,
            navigation: Navigation::Redirect(Route::Login),
        })
    }
}
