//! Domain types and response envelopes for the todo API.
//!
//! # Design
//! The server wraps payloads in envelopes (`{message}`, `{todos: [...]}`,
//! `{todo: {...}}`). Older deployments return the bare payload instead, so
//! list and single-todo bodies are modeled as untagged enums over both
//! shapes and unwrapped with an exhaustive `match`.

use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned identifier of a todo.
pub type TodoId = u64;

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
}

/// Request payload for creating a new todo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoCreation {
    pub title: String,
}

/// Request payload for updating an existing todo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoUpdate {
    pub title: String,
}

/// Generic acknowledgement or error envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiResponse {
    pub message: String,
}

/// Envelope around the todo collection.
///
/// The `todos` key must be present; `null` means the server has none.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoListResponse {
    #[serde(deserialize_with = "required_nullable")]
    pub todos: Option<Vec<Todo>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl TodoListResponse {
    pub fn into_todos(self) -> Vec<Todo> {
        self.todos.unwrap_or_default()
    }
}

/// A present-but-`null` field is `None`; an absent one is an error.
fn required_nullable<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::deserialize(deserializer)
}

/// Acknowledgement sent instead of a collection when there is nothing to list.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct NoTodos {
    #[allow(dead_code)]
    message: String,
}

/// Envelope around a single todo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoResponse {
    pub todo: Todo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Body of a collection response: enveloped, a bare array, or a lone
/// `{message}` reporting an empty collection. Any other object is rejected.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum TodoListBody {
    Bare(Vec<Todo>),
    Envelope(TodoListResponse),
    Empty(NoTodos),
}

impl TodoListBody {
    pub(crate) fn into_todos(self) -> Vec<Todo> {
        match self {
            TodoListBody::Bare(todos) => todos,
            TodoListBody::Envelope(envelope) => envelope.into_todos(),
            TodoListBody::Empty(_) => Vec::new(),
        }
    }
}

/// Body of a single-todo response: enveloped or a bare object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum TodoBody {
    Envelope(TodoResponse),
    Bare(Todo),
}

impl TodoBody {
    pub(crate) fn into_todo(self) -> Todo {
        match self {
            TodoBody::Envelope(envelope) => envelope.todo,
            TodoBody::Bare(todo) => todo,
        }
    }
}
