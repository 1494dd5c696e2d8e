//! Blocking API client for the todo service.
//!
//! # Overview
//! `TodoClient` builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network. `TodoApi` drives one round-trip per
//! operation through a `Transport`, by default `UreqTransport`.
//!
//! # Design
//! - `TodoClient` is stateless; it holds only `base_url`.
//! - Each operation is split into `build_*` and `parse_*`, so the I/O
//!   boundary stays explicit and the pure half is testable without a server.
//! - Response envelopes are typed; any 2xx status counts as success.
//! - Errors are never swallowed or retried; `TodoApi` logs them through
//!   `tracing` and returns them.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.
//!
//! ```no_run
//! use todo_core::{ClientConfig, TodoApi, TodoCreation};
//!
//! let api = TodoApi::from_config(&ClientConfig::from_env());
//! let todo = api.create_todo(&TodoCreation { title: "Buy milk".into() })?;
//! println!("created #{}", todo.id);
//! # Ok::<(), todo_core::ApiError>(())
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use api::TodoApi;
pub use client::TodoClient;
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{Transport, UreqTransport};
pub use types::{ApiResponse, Todo, TodoCreation, TodoId, TodoListResponse, TodoResponse, TodoUpdate};
