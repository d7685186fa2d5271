//! roster - user administration CLI
//!
//! Every command goes through the same route gates as the views it stands
//! in for; a gate redirect prints `{"redirect": "/login"}` and exits 0.
//!
//! # Examples
//!
//! ```bash
//! roster login --email admin@example.com --password secret --remember
//! roster users list --pretty
//! roster users block <uuid> <uuid>
//! roster users delete --all
//! ```

use ra_cli::{Cli, output};

use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error: failed to start async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(ra_cli::run(&cli)) {
        Ok(value) => match output::render(&value, cli.pretty) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error serializing response: {e}");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}
