//! Configuration structures and loading utilities.
//!
//! Every concern has its own struct with a `Default` implementation and a
//! `from_env()` constructor that falls back to those defaults.

pub mod auth;
pub mod client;
pub mod metrics;
pub mod server;

pub use auth::*;
pub use client::*;
pub use metrics::*;
pub use server::*;

// Serializes tests that read or write process environment variables
#[cfg(test)]
pub(crate) static ENV_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());
