//! Configuration for the session client.
//!
//! Mutations are sent exactly once; only the list refetch is retried, since a
//! GET can be repeated without changing server state.

use serde::{Deserialize, Serialize};
use std::env;

/// Settings for talking to the task server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the task server, e.g. `http://localhost:4000`
    pub base_url: String,

    /// Whole-request timeout (in seconds)
    pub timeout_seconds: u64,

    /// Connection timeout (in seconds)
    pub connect_timeout_seconds: u64,

    /// Retry policy for list refetches
    pub retry: RetryConfig,
}

/// Retry configuration for idempotent reads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Retries after the first attempt
    pub max_attempts: usize,

    /// Initial retry delay in milliseconds
    pub initial_delay_ms: u64,

    /// Maximum retry delay in milliseconds
    pub max_delay_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:4000".to_string(),
            timeout_seconds: 5,
            connect_timeout_seconds: 3,
            retry: RetryConfig::default(),
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 2,
            initial_delay_ms: 50,
            max_delay_ms: 500,
        }
    }
}

impl ClientConfig {
    /// Client settings pointing at `base_url` with default timeouts
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let base_url =
            env::var("TASKLIST_API_URL").unwrap_or_else(|_| "http://localhost:4000".to_string());

        let timeout_seconds = env::var("TASKLIST_CLIENT_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let connect_timeout_seconds = env::var("TASKLIST_CLIENT_CONNECT_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3);

        Self {
            base_url,
            timeout_seconds,
            connect_timeout_seconds,
            retry: RetryConfig::from_env(),
        }
    }
}

impl RetryConfig {
    /// Load retry configuration from environment variables
    pub fn from_env() -> Self {
        let max_attempts = env::var("TASKLIST_CLIENT_RETRY_MAX_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(2);

        let initial_delay_ms = env::var("TASKLIST_CLIENT_RETRY_INITIAL_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(50);

        let max_delay_ms = env::var("TASKLIST_CLIENT_RETRY_MAX_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(500);

        Self {
            max_attempts,
            initial_delay_ms,
            max_delay_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ENV_MUTEX;

    #[test]
    fn test_client_config_defaults() {
        let _lock = ENV_MUTEX.lock().unwrap();

        unsafe {
            env::remove_var("TASKLIST_API_URL");
            env::remove_var("TASKLIST_CLIENT_TIMEOUT");
            env::remove_var("TASKLIST_CLIENT_CONNECT_TIMEOUT");
            env::remove_var("TASKLIST_CLIENT_RETRY_MAX_ATTEMPTS");
            env::remove_var("TASKLIST_CLIENT_RETRY_INITIAL_DELAY_MS");
            env::remove_var("TASKLIST_CLIENT_RETRY_MAX_DELAY_MS");
        }

        let config = ClientConfig::from_env();
        assert_eq!(config.base_url, "http://localhost:4000");
        assert_eq!(config.timeout_seconds, 5);
        assert_eq!(config.connect_timeout_seconds, 3);
        assert_eq!(config.retry.max_attempts, 2);
        assert_eq!(config.retry.initial_delay_ms, 50);
    }

    #[test]
    fn test_client_config_from_env() {
        let _lock = ENV_MUTEX.lock().unwrap();

        unsafe {
            env::set_var("TASKLIST_API_URL", "http://tasks.internal:9000");
            env::set_var("TASKLIST_CLIENT_TIMEOUT", "10");
            env::set_var("TASKLIST_CLIENT_RETRY_MAX_ATTEMPTS", "0");
        }

        let config = ClientConfig::from_env();
        assert_eq!(config.base_url, "http://tasks.internal:9000");
        assert_eq!(config.timeout_seconds, 10);
        assert_eq!(config.retry.max_attempts, 0);

        unsafe {
            env::remove_var("TASKLIST_API_URL");
            env::remove_var("TASKLIST_CLIENT_TIMEOUT");
            env::remove_var("TASKLIST_CLIENT_RETRY_MAX_ATTEMPTS");
        }
    }
}
