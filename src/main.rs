use actix_web::HttpServer;
use tasklist_api::{AppState, AuthConfig, MetricsConfig, ServerConfig, create_app, telemetry};
use tracing::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = ServerConfig::from_env();
    telemetry::init_tracing(config.json_logs, "info");

    let state = AppState::from_config(&config, AuthConfig::from_env(), MetricsConfig::from_env())
        .map_err(std::io::Error::other)?;

    let (host, port) = config.bind_address();
    info!(
        host = %host,
        port,
        seeded = config.seed,
        tasks = state.store.len(),
        "Starting task server"
    );

    let mut server = HttpServer::new(move || create_app(state.clone()));
    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    server.bind((host, port))?.run().await
}
