use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub title: String,
}

#[derive(Deserialize)]
pub struct TodoInput {
    pub title: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TodoList {
    pub todos: Vec<Todo>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TodoEnvelope {
    pub message: String,
    pub todo: Todo,
}

#[derive(Default)]
pub struct Store {
    todos: BTreeMap<u64, Todo>,
    last_id: u64,
}

impl Store {
    fn insert(&mut self, title: String) -> Todo {
        self.last_id += 1;
        let todo = Todo {
            id: self.last_id,
            title,
        };
        self.todos.insert(todo.id, todo.clone());
        todo
    }
}

pub type Db = Arc<RwLock<Store>>;

type Reply<T> = Result<T, (StatusCode, Json<Message>)>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/api/", get(index))
        .route("/api/helloworld/", get(hello_world))
        .route("/api/todos/", get(list_todos).post(create_todo))
        .route(
            "/api/todos/{id}/",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn message(text: &str) -> Json<Message> {
    Json(Message {
        message: text.to_string(),
    })
}

fn not_found() -> (StatusCode, Json<Message>) {
    (StatusCode::NOT_FOUND, message("Todo not found"))
}

fn validated_title(input: TodoInput) -> Reply<String> {
    let title = input.title.trim();
    if title.is_empty() {
        return Err((StatusCode::BAD_REQUEST, message("Title is required")));
    }
    Ok(title.to_string())
}

async fn index() -> Json<Message> {
    message("Welcome to the Todo Management API!")
}

async fn hello_world() -> Json<Message> {
    message("Hello, World!")
}

async fn list_todos(State(db): State<Db>) -> Json<TodoList> {
    let store = db.read().await;
    Json(TodoList {
        todos: store.todos.values().cloned().collect(),
    })
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<TodoInput>,
) -> Reply<(StatusCode, Json<TodoEnvelope>)> {
    let title = validated_title(input)?;
    let todo = db.write().await.insert(title);
    tracing::info!(id = todo.id, "todo created");
    Ok((
        StatusCode::CREATED,
        Json(TodoEnvelope {
            message: "Todo created".to_string(),
            todo,
        }),
    ))
}

async fn get_todo(State(db): State<Db>, Path(id): Path<u64>) -> Reply<Json<TodoEnvelope>> {
    let store = db.read().await;
    let todo = store.todos.get(&id).cloned().ok_or_else(not_found)?;
    Ok(Json(TodoEnvelope {
        message: "Todo found".to_string(),
        todo,
    }))
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<TodoInput>,
) -> Reply<Json<TodoEnvelope>> {
    let title = validated_title(input)?;
    let mut store = db.write().await;
    let todo = store.todos.get_mut(&id).ok_or_else(not_found)?;
    todo.title = title;
    tracing::info!(id, "todo updated");
    Ok(Json(TodoEnvelope {
        message: "Todo updated".to_string(),
        todo: todo.clone(),
    }))
}

async fn delete_todo(State(db): State<Db>, Path(id): Path<u64>) -> Reply<Json<Message>> {
    let mut store = db.write().await;
    store.todos.remove(&id).ok_or_else(not_found)?;
    tracing::info!(id, "todo deleted");
    Ok(message("Todo deleted"))
}
