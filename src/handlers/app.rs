//! Application state, OpenAPI specification, and app factory.

use crate::{
    config::{AuthConfig, MetricsConfig, ServerConfig},
    errors::ApiError,
    handlers::{create_task, delete_task, get_metrics, health, list_tasks, login, update_task, version},
    middleware::{BearerAuth, MetricsMiddleware, RequestIdMiddleware},
    services::{AppMetrics, Authenticator, TaskStore},
};
use actix_web::{App, web::{Data, JsonConfig, PathConfig}};
use paperclip::actix::{OpenApiExt, web};
use paperclip::v2::models::{DefaultApiRaw, Info};

/// Shared state handed to every worker's app instance
///
/// Cloning is cheap; all clones point at the same store and metrics.
#[derive(Clone)]
pub struct AppState {
    pub store: Data<TaskStore>,
    pub auth: Data<Authenticator>,
    pub metrics: Data<AppMetrics>,
    pub metrics_config: Data<MetricsConfig>,
}

impl AppState {
    pub fn new(
        store: TaskStore,
        authenticator: Authenticator,
        metrics_config: MetricsConfig,
    ) -> Result<Self, prometheus::Error> {
        let metrics = AppMetrics::new()?;
        metrics.tasks_stored.set(store.len() as i64);

        Ok(Self {
            store: Data::new(store),
            auth: Data::new(authenticator),
            metrics: Data::new(metrics),
            metrics_config: Data::new(metrics_config),
        })
    }

    /// State built from the server, account, and metrics settings
    pub fn from_config(
        server: &ServerConfig,
        auth: AuthConfig,
        metrics_config: MetricsConfig,
    ) -> Result<Self, prometheus::Error> {
        let store = if server.seed {
            TaskStore::seeded()
        } else {
            TaskStore::new()
        };
        Self::new(store, Authenticator::from_config(auth), metrics_config)
    }
}

/// Creates the OpenAPI specification served at `/api/spec/v2`
pub fn create_openapi_spec() -> DefaultApiRaw {
    DefaultApiRaw {
        info: Info {
            title: "Tasklist API".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            description: Some(
                "In-memory task list with a single static account.\n\n\
                ## Authentication\n\
                `POST /login` with `{username, password}` returns `{success, token, username}`.\n\
                Every `/items` request must send `Authorization: Bearer <token>`; anything else\n\
                is answered with 401 before the request body is read.\n\
                \n\
                ## Errors\n\
                Errors carry a JSON body `{\"message\": ...}`. Bodies that are not valid JSON\n\
                are reported as 500."
                    .into(),
            ),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Creates the application with every route and middleware installed
///
/// Used by the server binary for each worker and by the integration tests.
pub fn create_app(
    state: AppState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    // Any body the JSON extractor cannot use is a malformed request
    let json_config = JsonConfig::default()
        .error_handler(|err, _req| ApiError::MalformedRequest(err.to_string()).into());

    let path_config = PathConfig::default()
        .error_handler(|_err, req| ApiError::InvalidItemId(req.path().to_string()).into());

    let bearer_auth = BearerAuth::new(state.auth.get_ref().clone());

    App::new()
        .wrap(MetricsMiddleware)
        .wrap(RequestIdMiddleware)
        .wrap_api_with_spec(create_openapi_spec())
        .app_data(json_config)
        .app_data(path_config)
        .app_data(state.store)
        .app_data(state.auth)
        .app_data(state.metrics)
        .app_data(state.metrics_config)
        .service(web::resource("/login").route(web::post().to(login)))
        .service(
            web::scope("/items")
                .wrap(bearer_auth)
                .service(
                    web::resource("")
                        .route(web::get().to(list_tasks))
                        .route(web::post().to(create_task)),
                )
                .service(
                    web::resource("/{id}")
                        .route(web::put().to(update_task))
                        .route(web::delete().to(delete_task)),
                ),
        )
        .service(web::resource("/api/health").route(web::get().to(health)))
        .service(web::resource("/api/version").route(web::get().to(version)))
        .service(web::resource("/api/metrics").route(web::get().to(get_metrics)))
        .with_json_spec_at("/api/spec/v2")
        .build()
}
