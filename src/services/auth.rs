//! Credential verification and bearer-token authorization.

use crate::{
    config::AuthConfig,
    errors::ApiError,
    utils::http::extract_bearer_token,
};
use actix_web::HttpRequest;
use std::sync::Arc;

/// Decides which credentials and tokens the API accepts
///
/// Handlers only see this trait, so a real identity provider can replace the
/// static account without touching the endpoint contracts.
pub trait CredentialVerifier: Send + Sync {
    /// Return the session token for a valid username/password pair
    fn login(&self, username: &str, password: &str) -> Option<String>;

    /// Whether `token` authorizes API calls
    fn verify_token(&self, token: &str) -> bool;
}

/// One fixed account with one fixed session token
///
/// Comparison is plain byte equality. There is no hashing, lockout, or
/// expiry; this account is not a security boundary.
#[derive(Clone, Debug)]
pub struct StaticCredentials {
    config: AuthConfig,
}

impl StaticCredentials {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }
}

impl CredentialVerifier for StaticCredentials {
    fn login(&self, username: &str, password: &str) -> Option<String> {
        (username == self.config.username && password == self.config.password)
            .then(|| self.config.token.clone())
    }

    fn verify_token(&self, token: &str) -> bool {
        token == self.config.token
    }
}

/// Shared handle to the active [`CredentialVerifier`]
#[derive(Clone)]
pub struct Authenticator {
    verifier: Arc<dyn CredentialVerifier>,
}

impl Authenticator {
    pub fn new(verifier: impl CredentialVerifier + 'static) -> Self {
        Self {
            verifier: Arc::new(verifier),
        }
    }

    /// Authenticator backed by the static account in `config`
    pub fn from_config(config: AuthConfig) -> Self {
        Self::new(StaticCredentials::new(config))
    }

    /// Check a login attempt; a missing field never matches
    pub fn login(&self, username: Option<&str>, password: Option<&str>) -> Option<String> {
        match (username, password) {
            (Some(username), Some(password)) => self.verifier.login(username, password),
            _ => None,
        }
    }

    /// Require a valid `Authorization: Bearer <token>` header on `req`
    pub fn authorize(&self, req: &HttpRequest) -> Result<(), ApiError> {
        match extract_bearer_token(req) {
            Some(token) if self.verifier.verify_token(token) => Ok(()),
            _ => Err(ApiError::Unauthorized),
        }
    }
}

impl Default for Authenticator {
    fn default() -> Self {
        Self::from_config(AuthConfig::default())
    }
}
