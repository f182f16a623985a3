//! API error taxonomy and its HTTP mapping.

use crate::models::{ErrorResponse, LoginResponse, TaskId};
use crate::services::task_store::StoreError;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

/// Every failure a request handler can report
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Item not found")]
    NotFound(TaskId),

    /// Item path segment that is not a task id
    #[error("Item not found")]
    InvalidItemId(String),

    /// Unparseable or mistyped JSON body. Reported as 500 for compatibility
    /// with existing clients.
    #[error("Malformed request: {0}")]
    MalformedRequest(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized | Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) | Self::InvalidItemId(_) => StatusCode::NOT_FOUND,
            Self::MalformedRequest(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());
        match self {
            // Login failures keep the `{success, message}` shape of the login contract
            Self::InvalidCredentials => response.json(LoginResponse::denied()),
            _ => response.json(ErrorResponse {
                message: self.to_string(),
            }),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::MissingText => ApiError::validation(err.to_string()),
            StoreError::NotFound(id) => ApiError::NotFound(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_json(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.error_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_web::test]
    async fn test_store_errors_map_to_client_errors() {
        let (status, body) = body_json(StoreError::MissingText.into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({ "message": "Text required" }));

        let (status, body) = body_json(StoreError::NotFound(42).into()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Item not found");

        let (status, body) = body_json(ApiError::InvalidItemId("/items/abc".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Item not found");
    }

    #[actix_web::test]
    async fn test_invalid_credentials_uses_login_shape() {
        let (status, body) = body_json(ApiError::InvalidCredentials).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(
            body,
            serde_json::json!({ "success": false, "message": "Invalid credentials" })
        );
    }

    #[actix_web::test]
    async fn test_malformed_request_is_a_server_error() {
        let (status, body) = body_json(ApiError::MalformedRequest("EOF".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["message"].as_str().unwrap().starts_with("Malformed request"));
    }
}
