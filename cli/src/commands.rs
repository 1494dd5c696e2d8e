use clap::Subcommand;
use todo_core::TodoId;

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Show the API welcome message
    Message,
    /// Show the Hello World diagnostic message
    Hello,
    /// List all todos
    List,
    /// Show a single todo
    Get { id: TodoId },
    /// Create a todo
    Add { title: String },
    /// Rename a todo
    Update { id: TodoId, title: String },
    /// Delete a todo
    Delete { id: TodoId },
}

impl Commands {
    /// User-facing text shown when the command fails. The underlying error is
    /// logged by the client and not shown.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Commands::Message | Commands::Hello => {
                "Failed to load the message. Please try again later."
            }
            Commands::List => "Failed to load todos. Please try again later.",
            Commands::Get { .. } => "Failed to load the todo. Please try again later.",
            Commands::Add { .. } => "Failed to add todo. Please try again.",
            Commands::Update { .. } => "Failed to update todo. Please try again.",
            Commands::Delete { .. } => "Failed to delete todo. Please try again.",
        }
    }
}
