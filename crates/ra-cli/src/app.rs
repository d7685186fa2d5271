use crate::commands::Commands;
use crate::error::{CliError, Result as CliResult};
use crate::user_commands::{Selection, UserCommands};
use crate::{Cli, logger, output};

use ra_auth::{
    AuthFlows, FlowSettings, ForgotPasswordForm, GateDecision, Navigation, Route, SessionGuard,
    SignInForm, SignUpForm, UpdatePasswordForm,
};
use ra_client::{Backend, parse_recovery_link};
use ra_config::Config;
use ra_core::{IdentityService, ProfileStore};
use ra_roster::{MutationKind, RosterManager};

use std::sync::Arc;

use log::{info, warn};
use serde_json::{Value, json};

/// Load configuration, start logging, connect and run one command
pub async fn run(cli: &Cli) -> CliResult<Value> {
    let config = Config::load_from(cli.config_dir.as_deref())?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path(),
        config.logging.colored,
    )?;
    config.log_summary();

    let backend = Backend::connect(&config).await?;
    let app = App::new(
        backend.identity,
        backend.profiles,
        FlowSettings::from(&config.auth),
    );

    app.execute(&cli.command).await
}

/// The views, wired to a pair of services
pub struct App {
    identity: Arc<dyn IdentityService>,
    profiles: Arc<dyn ProfileStore>,
    guard: SessionGuard,
    flows: AuthFlows,
}

impl App {
    pub fn new(
        identity: Arc<dyn IdentityService>,
        profiles: Arc<dyn ProfileStore>,
        settings: FlowSettings,
    ) -> Self {
        let guard = SessionGuard::new(identity.clone(), profiles.clone());
        let flows = AuthFlows::new(identity.clone(), profiles.clone(), settings);

        Self {
            identity,
            profiles,
            guard,
            flows,
        }
    }

    pub async fn execute(&self, command: &Commands) -> CliResult<Value> {
        match command {
            Commands::Login {
                email,
                password,
                remember,
            } => {
                self.on_route(Route::Login, async {
                    let form = SignInForm {
                        email: email.clone(),
                        password: password.clone(),
                        remember_me: *remember,
                    };
                    let outcome = self.flows.sign_in(&form).await?;
                    Ok::<_, CliError>(output::with_navigation(
                        json!({ "caller": outcome.caller, "session": outcome.scope.as_str() }),
                        outcome.navigation,
                    ))
                })
                .await
            }

            Commands::Signup {
                email,
                first_name,
                last_name,
                password,
            } => {
                self.on_route(Route::Signup, async {
                    let form = SignUpForm {
                        email: email.clone(),
                        first_name: first_name.clone(),
                        last_name: last_name.clone(),
                        password: password.clone(),
                    };
                    let outcome = self.flows.sign_up(&form).await?;
                    Ok::<_, CliError>(output::with_navigation(
                        json!({ "caller": outcome.caller }),
                        outcome.navigation,
                    ))
                })
                .await
            }

            Commands::ForgotPassword { email } => {
                self.on_route(Route::ForgotPassword, async {
                    let form = ForgotPasswordForm {
                        email: email.clone(),
                    };
                    let notice = self.flows.forgot_password(&form).await?;
                    Ok::<_, CliError>(output::with_navigation(
                        json!({ "message": notice.message }),
                        notice.navigation,
                    ))
                })
                .await
            }

            Commands::UpdatePassword {
                link,
                password,
                confirm,
            } => {
                self.on_route(Route::UpdatePassword, async {
                    let tokens = parse_recovery_link(link);
                    self.flows.open_recovery_link(tokens.as_ref()).await?;

                    let form = UpdatePasswordForm {
                        password: password.clone(),
                        confirm_password: confirm.clone(),
                    };
                    let notice = self.flows.update_password(&form).await?;
                    Ok::<_, CliError>(output::with_navigation(
                        json!({ "message": notice.message }),
                        notice.navigation,
                    ))
                })
                .await
            }

            Commands::Users { action } => self.users(action).await,

            Commands::Logout => {
                let mut manager = self.roster();
                match self.guard.enter(Route::Home.path()).await {
                    GateDecision::Allow => Ok(output::redirect(
                        manager.sign_out().await.target().unwrap_or(Route::Login),
                    )),
                    GateDecision::Redirect(route) => Ok(output::redirect(route)),
                }
            }

            Commands::Open { path } => {
                let decision = self.guard.enter(path).await;
                Ok(output::gate(path, decision))
            }
        }
    }

    fn roster(&self) -> RosterManager {
        RosterManager::new(self.identity.clone(), self.profiles.clone())
    }

    /// Run `body` only if the route's gate lets the caller in
    async fn on_route<F>(&self, route: Route, body: F) -> CliResult<Value>
    where
        F: Future<Output = CliResult<Value>>,
    {
        match self.guard.enter(route.path()).await {
            GateDecision::Allow => body.await,
            GateDecision::Redirect(target) => {
                info!("{route} redirected to {target}");
                Ok(output::redirect(target))
            }
        }
    }

    async fn users(&self, action: &UserCommands) -> CliResult<Value> {
        let mut manager = self.roster();

        if let Navigation::Redirect(route) = manager.enter().await? {
            return Ok(output::redirect(route));
        }

        let (kind, selection) = match action {
            UserCommands::List => {
                return Ok(output::roster(
                    manager.rows(),
                    manager.selection_summary(),
                ));
            }
            UserCommands::Block(selection) => (MutationKind::Block, selection),
            UserCommands::Unblock(selection) => (MutationKind::Unblock, selection),
            UserCommands::Delete(selection) => (MutationKind::Delete, selection),
        };

        Self::select(&mut manager, selection);
        let summary = manager.selection_summary();
        info!("{summary}");

        let outcome = match kind {
            MutationKind::Delete => manager.delete_selected().await?,
            MutationKind::Block => manager.set_blocked(true).await?,
            MutationKind::Unblock => manager.set_blocked(false).await?,
        };

        Ok(output::mutation(kind, outcome, summary))
    }

    fn select(manager: &mut RosterManager, selection: &Selection) {
        if selection.all {
            manager.select_all(true);
            return;
        }

        let matched = manager.select_ids(selection.ids.iter().copied());
        if matched < selection.ids.len() {
            warn!(
                "{} of {} ids are not in the roster and were skipped",
                selection.ids.len() - matched,
                selection.ids.len()
            );
        }
    }
}
