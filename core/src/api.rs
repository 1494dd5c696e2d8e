//! Network-facing todo API: one `Transport` round-trip per operation.
//!
//! # Design
//! `TodoApi` pairs a stateless `TodoClient` with a `Transport`. Every
//! operation builds its request, executes it exactly once and parses the
//! response. Nothing is cached and nothing is retried. Failures are logged
//! and then handed back to the caller untouched.

use std::fmt;

use crate::client::TodoClient;
use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{Transport, UreqTransport};
use crate::types::{ApiResponse, Todo, TodoCreation, TodoId, TodoUpdate};

pub struct TodoApi<T = UreqTransport> {
    client: TodoClient,
    transport: T,
}

impl TodoApi<UreqTransport> {
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(TodoClient::new(base_url), UreqTransport::new())
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::with_transport(TodoClient::from_config(config), UreqTransport::new())
    }
}

impl<T: Transport> TodoApi<T> {
    pub fn with_transport(client: TodoClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &TodoClient {
        &self.client
    }

    /// Fetch the welcome message served at the API root.
    pub fn get_main_message(&self) -> ApiResult<String> {
        self.send(self.client.build_get_main_message())
            .and_then(|response| self.client.parse_get_main_message(response))
            .inspect_err(|err| tracing::error!(error = %err, "Error fetching main message"))
    }

    pub fn get_hello_world(&self) -> ApiResult<String> {
        self.send(self.client.build_get_hello_world())
            .and_then(|response| self.client.parse_get_hello_world(response))
            .inspect_err(|err| tracing::error!(error = %err, "Error fetching Hello World message"))
    }

    /// Fetch every todo. An empty collection is `Ok(vec![])`.
    pub fn get_todos(&self) -> ApiResult<Vec<Todo>> {
        self.send(self.client.build_get_todos())
            .and_then(|response| self.client.parse_get_todos(response))
            .inspect_err(|err| tracing::error!(error = %err, "Error fetching todos"))
    }

    /// Fetch a single todo; a missing id yields `ApiError::NotFound`.
    pub fn get_todo_by_id(&self, id: TodoId) -> ApiResult<Todo> {
        self.send(self.client.build_get_todo(id))
            .and_then(|response| self.client.parse_get_todo(response))
            .inspect_err(|err| tracing::error!(id, error = %err, "Error fetching todo"))
    }

    /// Create a todo. The returned value carries the id the server assigned.
    pub fn create_todo(&self, input: &TodoCreation) -> ApiResult<Todo> {
        self.client
            .build_create_todo(input)
            .and_then(|request| self.send(request))
            .and_then(|response| self.client.parse_create_todo(response))
            .inspect_err(|err| tracing::error!(error = %err, "Error creating todo"))
    }

    pub fn update_todo(&self, id: TodoId, input: &TodoUpdate) -> ApiResult<Todo> {
        self.client
            .build_update_todo(id, input)
            .and_then(|request| self.send(request))
            .and_then(|response| self.client.parse_update_todo(response))
            .inspect_err(|err| tracing::error!(id, error = %err, "Error updating todo"))
    }

    pub fn delete_todo(&self, id: TodoId) -> ApiResult<ApiResponse> {
        self.send(self.client.build_delete_todo(id))
            .and_then(|response| self.client.parse_delete_todo(response))
            .inspect_err(|err| tracing::error!(id, error = %err, "Error deleting todo"))
    }

    fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        tracing::debug!(method = %request.method, url = %request.url, "sending request");
        let response = self.transport.execute(request).map_err(ApiError::Transport)?;
        tracing::debug!(status = response.status, "received response");
        Ok(response)
    }
}

impl<T> fmt::Debug for TodoApi<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TodoApi")
            .field("base_url", &self.client.base_url())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;
    use std::io;
    use std::sync::Mutex;

    use super::*;
    use crate::error::TransportError;
    use crate::http::HttpMethod;

    /// Replays canned responses in order and records every request.
    struct ScriptedTransport {
        responses: Mutex<Vec<Result<HttpResponse, TransportError>>>,
        requests: Mutex<Vec<HttpRequest>>,
    }

    impl ScriptedTransport {
        fn new(mut responses: Vec<Result<HttpResponse, TransportError>>) -> Self {
            responses.reverse();
            Self {
                responses: Mutex::new(responses),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn replying(status: u16, body: &str) -> Self {
            Self::new(vec![Ok(HttpResponse {
                status,
                headers: Vec::new(),
                body: body.to_string(),
            })])
        }

        fn failing() -> Self {
            let err: TransportError =
                Box::new(io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused"));
            Self::new(vec![Err(err)])
        }

        fn requests(&self) -> Vec<HttpRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl Transport for ScriptedTransport {
        fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            self.requests.lock().unwrap().push(request);
            self.responses
                .lock()
                .unwrap()
                .pop()
                .expect("no scripted response left")
        }
    }

    fn api(transport: &ScriptedTransport) -> TodoApi<&ScriptedTransport> {
        TodoApi::with_transport(TodoClient::new("http://localhost:5001/api"), transport)
    }

    fn assert_connection_refused(err: ApiError) {
        assert!(matches!(err, ApiError::Transport(_)));
        let source = err.source().expect("transport error keeps its source");
        let io_err = source.downcast_ref::<io::Error>().expect("source is the io::Error");
        assert_eq!(io_err.kind(), io::ErrorKind::ConnectionRefused);
    }

    #[test]
    fn get_main_message_returns_message() {
        let transport =
            ScriptedTransport::replying(200, r#"{"message":"Welcome to the Todo Management API!"}"#);
        let message = api(&transport).get_main_message().unwrap();
        assert_eq!(message, "Welcome to the Todo Management API!");
        assert_eq!(transport.requests()[0].url, "http://localhost:5001/api/");
    }

    #[test]
    fn get_hello_world_returns_message() {
        let transport = ScriptedTransport::replying(200, r#"{"message":"Hello, World!"}"#);
        assert_eq!(api(&transport).get_hello_world().unwrap(), "Hello, World!");
        assert_eq!(transport.requests()[0].url, "http://localhost:5001/api/helloworld/");
    }

    #[test]
    fn get_todos_on_empty_collection_is_empty() {
        let transport = ScriptedTransport::replying(200, r#"{"todos":[]}"#);
        assert!(api(&transport).get_todos().unwrap().is_empty());
    }

    #[test]
    fn get_todo_by_id_missing_is_not_found() {
        let transport = ScriptedTransport::replying(404, r#"{"message":"Todo not found"}"#);
        let err = api(&transport).get_todo_by_id(999).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
        assert_eq!(transport.requests()[0].url, "http://localhost:5001/api/todos/999/");
    }

    #[test]
    fn create_todo_returns_server_assigned_id() {
        let transport = ScriptedTransport::replying(
            201,
            r#"{"message":"Todo created","todo":{"id":2,"title":"New Todo"}}"#,
        );
        let todo = api(&transport)
            .create_todo(&TodoCreation {
                title: "New Todo".to_string(),
            })
            .unwrap();
        assert_eq!(
            todo,
            Todo {
                id: 2,
                title: "New Todo".to_string()
            }
        );

        let sent = &transport.requests()[0];
        assert_eq!(sent.method, HttpMethod::Post);
        let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"title": "New Todo"}));
    }

    #[test]
    fn update_todo_returns_echoed_resource() {
        let transport = ScriptedTransport::replying(200, r#"{"id":1,"title":"Updated Todo"}"#);
        let todo = api(&transport)
            .update_todo(
                1,
                &TodoUpdate {
                    title: "Updated Todo".to_string(),
                },
            )
            .unwrap();
        assert_eq!(
            todo,
            Todo {
                id: 1,
                title: "Updated Todo".to_string()
            }
        );
        assert_eq!(transport.requests()[0].method, HttpMethod::Put);
    }

    #[test]
    fn delete_todo_returns_exact_envelope() {
        let transport = ScriptedTransport::replying(200, r#"{"message":"Todo deleted"}"#);
        let response = api(&transport).delete_todo(1).unwrap();
        assert_eq!(
            response,
            ApiResponse {
                message: "Todo deleted".to_string()
            }
        );
        assert_eq!(transport.requests()[0].method, HttpMethod::Delete);
    }

    #[test]
    fn server_error_is_surfaced() {
        let transport = ScriptedTransport::replying(500, r#"{"message":"boom"}"#);
        let err = api(&transport).get_todos().unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
    }

    #[test]
    fn network_error_propagates_from_every_operation() {
        let update = TodoUpdate {
            title: "x".to_string(),
        };
        let create = TodoCreation {
            title: "x".to_string(),
        };

        let t = ScriptedTransport::failing();
        assert_connection_refused(api(&t).get_main_message().unwrap_err());
        let t = ScriptedTransport::failing();
        assert_connection_refused(api(&t).get_hello_world().unwrap_err());
        let t = ScriptedTransport::failing();
        assert_connection_refused(api(&t).get_todos().unwrap_err());
        let t = ScriptedTransport::failing();
        assert_connection_refused(api(&t).get_todo_by_id(1).unwrap_err());
        let t = ScriptedTransport::failing();
        assert_connection_refused(api(&t).create_todo(&create).unwrap_err());
        let t = ScriptedTransport::failing();
        assert_connection_refused(api(&t).update_todo(1, &update).unwrap_err());
        let t = ScriptedTransport::failing();
        assert_connection_refused(api(&t).delete_todo(1).unwrap_err());
    }

    #[test]
    fn every_call_hits_the_transport() {
        let ok = || {
            Ok(HttpResponse {
                status: 200,
                headers: Vec::new(),
                body: r#"{"todos":[]}"#.to_string(),
            })
        };
        let transport = ScriptedTransport::new(vec![ok(), ok()]);
        let api = api(&transport);
        api.get_todos().unwrap();
        api.get_todos().unwrap();
        assert_eq!(transport.requests().len(), 2);
    }
}
