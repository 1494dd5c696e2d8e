//! Command-line front end for the todo API.
//!
//! Each invocation runs one command against the server and prints plain
//! text. Failures are reported with a fixed message per command; the
//! detailed error is logged by `todo-core` and then discarded.

pub mod cli;
pub mod commands;

use std::io::{self, Write};

use todo_core::{ApiError, Todo, TodoApi, TodoCreation, TodoUpdate, Transport};

pub use cli::Cli;
pub use commands::Commands;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A client call failed; `message` is what the user sees.
    #[error("{message}")]
    Api {
        message: &'static str,
        #[source]
        source: ApiError,
    },

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Run `command` against `api`, writing the result to `out`.
pub fn execute<T: Transport>(
    api: &TodoApi<T>,
    command: &Commands,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let failed = |source: ApiError| CliError::Api {
        message: command.failure_message(),
        source,
    };

    match command {
        Commands::Message => {
            let message = api.get_main_message().map_err(failed)?;
            writeln!(out, "{message}")?;
        }
        Commands::Hello => {
            let message = api.get_hello_world().map_err(failed)?;
            writeln!(out, "{message}")?;
        }
        Commands::List => {
            let todos = api.get_todos().map_err(failed)?;
            write_todos(out, &todos)?;
        }
        Commands::Get { id } => {
            let todo = api.get_todo_by_id(*id).map_err(failed)?;
            write_todo(out, &todo)?;
        }
        Commands::Add { title } => {
            let todo = api
                .create_todo(&TodoCreation {
                    title: title.clone(),
                })
                .map_err(failed)?;
            write_todo(out, &todo)?;
        }
        Commands::Update { id, title } => {
            let todo = api
                .update_todo(
                    *id,
                    &TodoUpdate {
                        title: title.clone(),
                    },
                )
                .map_err(failed)?;
            write_todo(out, &todo)?;
        }
        Commands::Delete { id } => {
            let response = api.delete_todo(*id).map_err(failed)?;
            writeln!(out, "{}", response.message)?;
        }
    }

    Ok(())
}

fn write_todo(out: &mut impl Write, todo: &Todo) -> io::Result<()> {
    writeln!(out, "{}\t{}", todo.id, todo.title)
}

fn write_todos(out: &mut impl Write, todos: &[Todo]) -> io::Result<()> {
    if todos.is_empty() {
        return writeln!(out, "No todos available");
    }
    todos.iter().try_for_each(|todo| write_todo(out, todo))
}
