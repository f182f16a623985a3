//! Login endpoint handler.

use crate::{
    errors::ApiError,
    middleware::request_id::RequestId,
    models::{
        audit::{AuthAuditEvent, AuthEventType},
        auth::{LoginRequest, LoginResponse},
    },
    services::Authenticator,
    utils::http::{extract_client_ip, extract_user_agent},
};
use actix_web::{Error, HttpRequest, Result, web};
use paperclip::actix::api_v2_operation;

/// User login endpoint
///
/// Exchanges the configured username/password for the session token. Any
/// other pair, including one with missing fields, gets 401.
#[api_v2_operation(
    summary = "User Login",
    description = "Authenticate with username and password and return the session token",
    tags("Authentication"),
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = LoginResponse),
        (status = 500, description = "Body is not valid JSON")
    )
)]
pub async fn login(
    req: HttpRequest,
    auth: web::Data<Authenticator>,
    payload: web::Json<LoginRequest>,
) -> Result<web::Json<LoginResponse>, Error> {
    let LoginRequest { username, password } = payload.into_inner();
    let token = auth.login(username.as_deref(), password.as_deref());

    let event_type = if token.is_some() {
        AuthEventType::LoginSuccess
    } else {
        AuthEventType::LoginFailure
    };
    AuthAuditEvent::new(
        event_type,
        extract_client_ip(&req),
        req.method().to_string(),
        req.path().to_string(),
    )
    .with_username(username.clone())
    .with_user_agent(extract_user_agent(&req))
    .with_request_id(RequestId::of(&req))
    .log();

    match (token, username) {
        (Some(token), Some(username)) => Ok(web::Json(LoginResponse::granted(token, username))),
        _ => Err(ApiError::InvalidCredentials.into()),
    }
}
