//! Request, response, and domain data structures.

pub mod api;
pub mod audit;
pub mod auth;
pub mod task;

pub use api::*;
pub use audit::*;
pub use auth::*;
pub use task::*;
