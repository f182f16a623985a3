//! Tasklist API - a minimal in-memory task list over HTTP/JSON
//!
//! The crate contains both sides of the system:
//! - the server: an Actix Web application that authorizes every `/items`
//!   request with a bearer token and reads or mutates a shared [`TaskStore`]
//! - the session client: a reqwest-based [`SessionClient`] that logs in,
//!   caches the task list, and refetches the whole list after each mutation
//!
//! ## Architecture
//!
//! - `models/` - Task records and request/response bodies
//! - `handlers/` - HTTP handlers and the application factory
//! - `middleware/` - Request IDs, metrics, bearer authorization
//! - `services/` - Task store, credential verification, metrics
//! - `client/` - Session client and its HTTP transport
//! - `config/` - Environment-driven configuration
//!
//! ## Quick Start
//!
//! ```no_run
//! use actix_web::HttpServer;
//! use tasklist_api::{AppState, Authenticator, MetricsConfig, TaskStore, create_app};
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     let state = AppState::new(TaskStore::seeded(), Authenticator::default(), MetricsConfig::default())
//!         .expect("metrics registry");
//!     HttpServer::new(move || create_app(state.clone()))
//!         .bind(("127.0.0.1", 4000))?
//!         .run()
//!         .await
//! }
//! ```

pub mod client;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod telemetry;
pub mod utils;

pub use client::{ClientError, SessionClient, SessionState, TasksApi};
pub use config::{AuthConfig, ClientConfig, MetricsConfig, RetryConfig, ServerConfig};
pub use errors::ApiError;
pub use handlers::{AppState, create_app, create_openapi_spec};
pub use middleware::{BearerAuth, MetricsMiddleware, RequestId, RequestIdMiddleware};
pub use models::{
    CreateTaskRequest, ErrorResponse, HealthResponse, LoginRequest, LoginResponse, Task, TaskId,
    UpdateTaskRequest, VersionResponse,
};
pub use services::{AppMetrics, Authenticator, CredentialVerifier, StaticCredentials, StoreError, TaskStore};
