//! todo - command-line client for the Todo Management API
//!
//! # Examples
//!
//! ```bash
//! # Welcome message
//! todo message
//!
//! # Create, rename and delete
//! todo add "Buy milk"
//! todo update 1 "Buy oat milk"
//! todo delete 1
//!
//! # Point at another server
//! TODO_API_BASE_URL=http://10.0.0.5:5001/api todo list
//! ```

use std::io;
use std::process::ExitCode;

use clap::Parser;
use todo_cli::{execute, Cli, CliError};
use todo_core::TodoApi;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_core=warn,todo_cli=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let api = TodoApi::from_config(&cli.client_config());

    match execute(&api, &cli.command, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Api { message, .. }) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
        Err(err) => {
            tracing::error!(error = %err, "output failed");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
