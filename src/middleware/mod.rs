//! Custom middleware for cross-cutting concerns.
//!
//! Request IDs and metrics wrap the whole application; bearer authorization
//! wraps only the `/items` scope.

pub mod bearer_auth;
pub mod metrics;
pub mod request_id;

pub use bearer_auth::*;
pub use metrics::*;
pub use request_id::*;
