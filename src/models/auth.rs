//! Login request and response bodies.

use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Deserializer, Serialize};

pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Request model for `POST /login`
///
/// Both fields are optional so that `{}` is rejected with 401 like any
/// other wrong pair.
#[derive(Debug, Clone, Default, Serialize, Apiv2Schema)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Accepts any JSON document. A field that is absent or not a string reads
/// as `None`, so only an unparseable body fails extraction.
impl<'de> Deserialize<'de> for LoginRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let body = serde_json::Value::deserialize(deserializer)?;
        let field = |name: &str| body.get(name).and_then(|v| v.as_str()).map(str::to_string);

        Ok(Self {
            username: field("username"),
            password: field("password"),
        })
    }
}

impl LoginRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }
}

/// Response model for login attempts
///
/// Successful logins carry `token` and `username`; failures carry `message`.
#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl LoginResponse {
    pub fn granted(token: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            success: true,
            token: Some(token.into()),
            username: Some(username.into()),
            message: None,
        }
    }

    pub fn denied() -> Self {
        Self {
            success: false,
            token: None,
            username: None,
            message: Some(INVALID_CREDENTIALS.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_ignores_non_string_fields() {
        let request: LoginRequest =
            serde_json::from_str(r#"{"username": 1, "password": "password"}"#).unwrap();
        assert_eq!(request.username, None);
        assert_eq!(request.password.as_deref(), Some("password"));

        let request: LoginRequest = serde_json::from_str("[]").unwrap();
        assert!(request.username.is_none() && request.password.is_none());

        assert!(serde_json::from_str::<LoginRequest>("{\"username\":").is_err());
    }
}
