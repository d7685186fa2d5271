pub mod app;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod output;
pub mod user_commands;

pub use app::{App, run};
pub use cli::Cli;
pub use error::{CliError, Result};

#[cfg(test)]
mod tests;
