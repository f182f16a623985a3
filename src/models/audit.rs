//! Audit logging for authentication decisions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Types of authentication events for audit logging
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthEventType {
    LoginSuccess,
    LoginFailure,
    TokenRejected,
}

/// Outcomes of authentication events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthEventOutcome {
    Success,
    Failure,
}

impl AuthEventType {
    pub fn outcome(&self) -> AuthEventOutcome {
        match self {
            AuthEventType::LoginSuccess => AuthEventOutcome::Success,
            AuthEventType::LoginFailure | AuthEventType::TokenRejected => {
                AuthEventOutcome::Failure
            }
        }
    }
}

/// Structured audit log entry. Never holds passwords or tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthAuditEvent {
    pub event_type: AuthEventType,
    pub outcome: AuthEventOutcome,
    pub timestamp: DateTime<Utc>,
    pub ip_address: String,
    pub user_agent: Option<String>,
    pub username: Option<String>,
    pub method: String,
    pub endpoint: String,
    pub request_id: Option<String>,
}

impl AuthAuditEvent {
    pub fn new(
        event_type: AuthEventType,
        ip_address: String,
        method: String,
        endpoint: String,
    ) -> Self {
        Self {
            outcome: event_type.outcome(),
            event_type,
            timestamp: Utc::now(),
            ip_address,
            user_agent: None,
            username: None,
            method,
            endpoint,
            request_id: None,
        }
    }

    pub fn with_user_agent(mut self, user_agent: Option<String>) -> Self {
        self.user_agent = user_agent;
        self
    }

    pub fn with_username(mut self, username: Option<String>) -> Self {
        self.username = username;
        self
    }

    pub fn with_request_id(mut self, request_id: Option<String>) -> Self {
        self.request_id = request_id;
        self
    }

    /// Emit the event under the `auth_audit` target
    pub fn log(&self) {
        match self.outcome {
            AuthEventOutcome::Success => info!(
                target: "auth_audit",
                event_type = ?self.event_type,
                outcome = ?self.outcome,
                timestamp = %self.timestamp,
                ip_address = %self.ip_address,
                user_agent = ?self.user_agent,
                username = ?self.username,
                method = %self.method,
                endpoint = %self.endpoint,
                request_id = ?self.request_id,
                "Authentication audit event"
            ),
            AuthEventOutcome::Failure => warn!(
                target: "auth_audit",
                event_type = ?self.event_type,
                outcome = ?self.outcome,
                timestamp = %self.timestamp,
                ip_address = %self.ip_address,
                user_agent = ?self.user_agent,
                username = ?self.username,
                method = %self.method,
                endpoint = %self.endpoint,
                request_id = ?self.request_id,
                "Authentication audit event"
            ),
        }
    }
}
