//! HTTP request handlers and the application factory.

pub mod app;
pub mod auth;
pub mod health;
pub mod metrics;
pub mod tasks;
pub mod version;

pub use app::*;
pub use auth::*;
pub use health::*;
pub use metrics::*;
pub use tasks::*;
pub use version::*;
