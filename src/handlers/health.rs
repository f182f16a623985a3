//! Health check endpoint handler.

use crate::{models::HealthResponse, services::TaskStore};
use actix_web::{Error, Result, web};
use paperclip::actix::api_v2_operation;

/// Health check endpoint
///
/// Needs no token, so load balancers and probes can call it.
#[api_v2_operation(
    summary = "Health Check Endpoint",
    description = "Returns the health status of the API and the number of stored tasks.",
    tags("Health"),
    responses(
        (status = 200, description = "Successful response", body = HealthResponse)
    )
)]
pub async fn health(store: web::Data<TaskStore>) -> Result<web::Json<HealthResponse>, Error> {
    Ok(web::Json(HealthResponse {
        status: "healthy".to_string(),
        tasks: store.len(),
    }))
}
