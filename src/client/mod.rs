//! Session client for the task API.
//!
//! [`TasksApi`] is a thin typed transport over the REST endpoints.
//! [`SessionClient`] holds the login state and the cached task list and
//! reconciles the cache by refetching the whole list after every mutation.

pub mod api;
pub mod error;
pub mod session;

pub use api::*;
pub use error::*;
pub use session::*;
