use crate::Cli;
use crate::commands::Commands;
use crate::user_commands::UserCommands;

use ra_core::testing::fixture_id;

use clap::Parser;

#[test]
fn given_login_flags_when_parsing_then_remember_defaults_off() {
    let cli = Cli::try_parse_from([
        "roster",
        "login",
        "--email",
        "admin@example.com",
        "--password",
        "secret1",
    ])
    .unwrap();

    match cli.command {
        Commands::Login {
            email, remember, ..
        } => {
            assert_eq!(email, "admin@example.com");
            assert!(!remember);
        }
        other => panic!("unexpected command: {other:?}"),
    }
    assert!(!cli.pretty);
}

#[test]
fn given_global_flags_after_subcommand_when_parsing_then_accepted() {
    let cli = Cli::try_parse_from([
        "roster",
        "users",
        "list",
        "--pretty",
        "--config-dir",
        "/tmp/roster",
    ])
    .unwrap();

    assert!(cli.pretty);
    assert_eq!(
        cli.config_dir.as_deref(),
        Some(std::path::Path::new("/tmp/roster"))
    );
    assert!(matches!(
        cli.command,
        Commands::Users {
            action: UserCommands::List
        }
    ));
}

#[test]
fn given_uuid_arguments_when_parsing_block_then_ids_parsed() {
    let id = fixture_id(7).to_string();
    let cli = Cli::try_parse_from(["roster", "users", "block", id.as_str()]).unwrap();

    match cli.command {
        Commands::Users {
            action: UserCommands::Block(selection),
        } => {
            assert_eq!(selection.ids, vec![fixture_id(7)]);
            assert!(!selection.all);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn given_malformed_id_when_parsing_then_rejected() {
    let result = Cli::try_parse_from(["roster", "users", "delete", "not-a-uuid"]);
    assert!(result.is_err());
}

#[test]
fn given_all_and_ids_when_parsing_then_conflict() {
    let id = fixture_id(1).to_string();
    let result = Cli::try_parse_from(["roster", "users", "delete", "--all", id.as_str()]);
    assert!(result.is_err());
}

#[test]
fn given_open_path_when_parsing_then_positional() {
    let cli = Cli::try_parse_from(["roster", "open", "/main"]).unwrap();
    assert!(matches!(cli.command, Commands::Open { ref path } if path == "/main"));
}
