//! Static account configuration.

use std::env;

pub const DEFAULT_USERNAME: &str = "admin";
pub const DEFAULT_PASSWORD: &str = "password";
pub const DEFAULT_TOKEN: &str = "fake-jwt-token";

/// The single account and session token accepted by the server
#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub username: String,
    pub password: String,
    pub token: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            username: DEFAULT_USERNAME.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
            token: DEFAULT_TOKEN.to_string(),
        }
    }
}

impl AuthConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let username =
            env::var("TASKLIST_USERNAME").unwrap_or_else(|_| DEFAULT_USERNAME.to_string());

        let password =
            env::var("TASKLIST_PASSWORD").unwrap_or_else(|_| DEFAULT_PASSWORD.to_string());

        // An empty token would make "Bearer " a valid credential
        let token = env::var("TASKLIST_TOKEN")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_TOKEN.to_string());

        Self {
            username,
            password,
            token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ENV_MUTEX;

    #[test]
    fn test_auth_config_defaults() {
        let _lock = ENV_MUTEX.lock().unwrap();

        unsafe {
            env::remove_var("TASKLIST_USERNAME");
            env::remove_var("TASKLIST_PASSWORD");
            env::remove_var("TASKLIST_TOKEN");
        }

        let config = AuthConfig::from_env();
        assert_eq!(config.username, "admin");
        assert_eq!(config.password, "password");
        assert_eq!(config.token, "fake-jwt-token");
    }

    #[test]
    fn test_auth_config_ignores_empty_token() {
        let _lock = ENV_MUTEX.lock().unwrap();

        unsafe {
            env::set_var("TASKLIST_USERNAME", "operator");
            env::set_var("TASKLIST_TOKEN", "");
        }

        let config = AuthConfig::from_env();
        assert_eq!(config.username, "operator");
        assert_eq!(config.token, DEFAULT_TOKEN);

        unsafe {
            env::remove_var("TASKLIST_USERNAME");
            env::remove_var("TASKLIST_TOKEN");
        }
    }
}
