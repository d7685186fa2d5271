use ra_core::ProfileId;

use clap::{Args, Subcommand};

#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// List every profile, newest first
    List,
    /// Block the selected users
    Block(Selection),
    /// Unblock the selected users
    Unblock(Selection),
    /// Delete the selected users
    Delete(Selection),
}

#[derive(Args, Debug, Clone)]
pub struct Selection {
    /// Profile ids (UUID)
    pub ids: Vec<ProfileId>,

    /// Select every loaded profile
    #[arg(long, conflicts_with = "ids")]
    pub all: bool,
}
