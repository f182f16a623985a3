//! Business logic and service layer modules.
//!
//! The task store owns all task state, the authenticator decides who may
//! touch it, and the metrics collector observes both.

pub mod auth;
pub mod metrics;
pub mod task_store;

pub use auth::*;
pub use metrics::*;
pub use task_store::*;
