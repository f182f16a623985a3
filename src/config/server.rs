//! HTTP server configuration.

use std::env;

/// Listen address, worker count, and startup state of the task server
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// `None` lets actix pick one worker per physical core
    pub workers: Option<usize>,
    /// Pre-populate the store with a sample task
    pub seed: bool,
    /// Emit logs as JSON lines instead of human-readable text
    pub json_logs: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 4000,
            workers: None,
            seed: true,
            json_logs: false,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let host = env::var("TASKLIST_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = env::var("TASKLIST_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(4000);

        let workers = env::var("TASKLIST_WORKERS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|n: &usize| *n > 0);

        let seed = env::var("TASKLIST_SEED")
            .map(|v| v.to_lowercase() != "false")
            .unwrap_or(true);

        let json_logs = env::var("LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        Self {
            host,
            port,
            workers,
            seed,
            json_logs,
        }
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}
