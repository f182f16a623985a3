//! Bearer-token authorization middleware.

use crate::{
    models::audit::{AuthAuditEvent, AuthEventType},
    middleware::request_id::RequestId,
    services::Authenticator,
    utils::http::{extract_client_ip, extract_user_agent},
};
use actix_web::{
    Error,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};
use std::{
    future::{Ready, ready},
    pin::Pin,
};

/// Rejects requests without a valid bearer token
///
/// Runs before the wrapped handlers extract anything, so an unauthorized
/// request gets 401 whatever its body contains and never reaches the store.
pub struct BearerAuth {
    authenticator: Authenticator,
}

impl BearerAuth {
    pub fn new(authenticator: Authenticator) -> Self {
        Self { authenticator }
    }
}

impl<S, B> Transform<S, ServiceRequest> for BearerAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = BearerAuthService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(BearerAuthService {
            service,
            authenticator: self.authenticator.clone(),
        }))
    }
}

pub struct BearerAuthService<S> {
    service: S,
    authenticator: Authenticator,
}

impl<S, B> Service<ServiceRequest> for BearerAuthService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = Pin<Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if let Err(err) = self.authenticator.authorize(req.request()) {
            let http_req = req.request();
            AuthAuditEvent::new(
                AuthEventType::TokenRejected,
                extract_client_ip(http_req),
                http_req.method().to_string(),
                http_req.path().to_string(),
            )
            .with_user_agent(extract_user_agent(http_req))
            .with_request_id(RequestId::of(http_req))
            .log();

            let response = req.error_response(err).map_into_right_body();
            return Box::pin(async move { Ok(response) });
        }

        let fut = self.service.call(req);
        Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
    }
}
