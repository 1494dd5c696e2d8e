//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! Paths keep their trailing slash; the server treats `/todos` and
//! `/todos/` as different routes.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{ApiResponse, Todo, TodoBody, TodoCreation, TodoId, TodoListBody, TodoUpdate};

/// Synchronous, stateless client for the todo API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(&config.base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_get_main_message(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/")
    }

    pub fn build_get_hello_world(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/helloworld/")
    }

    pub fn build_get_todos(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/todos/")
    }

    pub fn build_get_todo(&self, id: TodoId) -> HttpRequest {
        self.request(HttpMethod::Get, &format!("/todos/{id}/"))
    }

    pub fn build_create_todo(&self, input: &TodoCreation) -> ApiResult<HttpRequest> {
        self.json_request(HttpMethod::Post, "/todos/", input)
    }

    pub fn build_update_todo(&self, id: TodoId, input: &TodoUpdate) -> ApiResult<HttpRequest> {
        self.json_request(HttpMethod::Put, &format!("/todos/{id}/"), input)
    }

    pub fn build_delete_todo(&self, id: TodoId) -> HttpRequest {
        self.request(HttpMethod::Delete, &format!("/todos/{id}/"))
    }

    pub fn parse_get_main_message(&self, response: HttpResponse) -> ApiResult<String> {
        decode::<ApiResponse>(response).map(|envelope| envelope.message)
    }

    pub fn parse_get_hello_world(&self, response: HttpResponse) -> ApiResult<String> {
        decode::<ApiResponse>(response).map(|envelope| envelope.message)
    }

    pub fn parse_get_todos(&self, response: HttpResponse) -> ApiResult<Vec<Todo>> {
        decode::<TodoListBody>(response).map(TodoListBody::into_todos)
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> ApiResult<Todo> {
        decode::<TodoBody>(response).map(TodoBody::into_todo)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> ApiResult<Todo> {
        decode::<TodoBody>(response).map(TodoBody::into_todo)
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> ApiResult<Todo> {
        decode::<TodoBody>(response).map(TodoBody::into_todo)
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> ApiResult<ApiResponse> {
        decode::<ApiResponse>(response)
    }

    fn request(&self, method: HttpMethod, path: &str) -> HttpRequest {
        HttpRequest {
            method,
            url: format!("{}{path}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    fn json_request<B: Serialize>(&self, method: HttpMethod, path: &str, input: &B) -> ApiResult<HttpRequest> {
        let body = serde_json::to_string(input).map_err(ApiError::SerializationError)?;
        Ok(HttpRequest {
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
            ..self.request(method, path)
        })
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> ApiResult<()> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

fn decode<T: DeserializeOwned>(response: HttpResponse) -> ApiResult<T> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(ApiError::DeserializationError)
}
