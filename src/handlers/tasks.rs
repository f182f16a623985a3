//! Task CRUD endpoint handlers.
//!
//! Every route here sits behind [`BearerAuth`](crate::middleware::BearerAuth),
//! so handlers only deal with store semantics.

use crate::{
    errors::ApiError,
    models::{CreateTaskRequest, Task, TaskId, UpdateTaskRequest},
    services::{AppMetrics, StoreError, TaskStore},
};
use actix_web::{Error, HttpRequest, HttpResponse, Result, web};
use paperclip::actix::api_v2_operation;
use tracing::warn;

/// Count the outcome of a store call when metrics are installed
fn record_operation<T>(
    req: &HttpRequest,
    store: &TaskStore,
    operation: &str,
    result: &Result<T, StoreError>,
) {
    let outcome = match result {
        Ok(_) => "success",
        Err(StoreError::MissingText) => "validation",
        Err(StoreError::NotFound(_)) => "not_found",
    };

    if let Err(err) = result {
        warn!(operation, error = %err, "Task operation rejected");
    }

    if let Some(metrics) = req.app_data::<web::Data<AppMetrics>>() {
        metrics.record_task_operation(operation, outcome, store.len());
    }
}

#[api_v2_operation(
    summary = "List Tasks",
    description = "Returns every task in insertion order.",
    tags("Tasks"),
    responses(
        (status = 200, description = "All tasks"),
        (status = 401, description = "Missing or invalid bearer token")
    )
)]
pub async fn list_tasks(store: web::Data<TaskStore>) -> Result<web::Json<Vec<Task>>, Error> {
    Ok(web::Json(store.list()))
}

#[api_v2_operation(
    summary = "Create Task",
    description = "Appends a task with the given text. Only a missing `text` field is rejected.",
    tags("Tasks"),
    responses(
        (status = 201, description = "Task created", body = Task),
        (status = 400, description = "Text required"),
        (status = 401, description = "Missing or invalid bearer token")
    )
)]
pub async fn create_task(
    req: HttpRequest,
    store: web::Data<TaskStore>,
    payload: web::Json<CreateTaskRequest>,
) -> Result<HttpResponse, Error> {
    let result = store.create(payload.into_inner().text);
    record_operation(&req, &store, "create", &result);

    let task = result.map_err(ApiError::from)?;
    Ok(HttpResponse::Created().json(task))
}

#[api_v2_operation(
    summary = "Update Task",
    description = "Overwrites the provided fields of a task; omitted fields keep their value.",
    tags("Tasks"),
    responses(
        (status = 200, description = "Updated task", body = Task),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "Item not found")
    )
)]
pub async fn update_task(
    req: HttpRequest,
    store: web::Data<TaskStore>,
    path: web::Path<TaskId>,
    payload: web::Json<UpdateTaskRequest>,
) -> Result<web::Json<Task>, Error> {
    let id = path.into_inner();
    let UpdateTaskRequest { text, completed } = payload.into_inner();

    let result = store.update(id, text, completed);
    record_operation(&req, &store, "update", &result);

    Ok(web::Json(result.map_err(ApiError::from)?))
}

#[api_v2_operation(
    summary = "Delete Task",
    description = "Removes a task. Deleting the same id twice yields 204 then 404.",
    tags("Tasks"),
    responses(
        (status = 204, description = "Task deleted"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "Item not found")
    )
)]
pub async fn delete_task(
    req: HttpRequest,
    store: web::Data<TaskStore>,
    path: web::Path<TaskId>,
) -> Result<HttpResponse, Error> {
    let id = path.into_inner();

    let result = store.delete(id);
    record_operation(&req, &store, "delete", &result);

    result.map_err(ApiError::from)?;
    Ok(HttpResponse::NoContent().finish())
}
