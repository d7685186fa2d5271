use crate::user_commands::UserCommands;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and cache the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Keep the session after this terminal session ends
        #[arg(long)]
        remember: bool,
    },

    /// Register a new account and its profile
    Signup {
        #[arg(long)]
        email: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        password: String,
    },

    /// Send a password reset email
    ForgotPassword {
        #[arg(long)]
        email: String,
    },

    /// Set a new password using the link from the reset email
    UpdatePassword {
        /// The full link (or its `#access_token=...` part)
        #[arg(long)]
        link: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm: String,
    },

    /// User management
    Users {
        #[command(subcommand)]
        action: UserCommands,
    },

    /// Sign out and forget the cached session
    Logout,

    /// Show where navigating to a path would land
    Open {
        /// Route path, e.g. /main
        path: String,
    },
}
