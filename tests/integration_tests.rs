use actix_web::{http::StatusCode, test};
use tasklist_api::{AppState, Authenticator, MetricsConfig, TaskStore, create_app};

fn test_state() -> AppState {
    AppState::new(TaskStore::seeded(), Authenticator::default(), MetricsConfig::default())
        .expect("Failed to create app state")
}

/// Health needs no token and reports the number of stored tasks
#[actix_web::test]
async fn test_health_endpoint_integration() {
    let app = test::init_service(create_app(test_state())).await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK, "Expected 200 OK status");

    let content_type = resp
        .headers()
        .get("content-type")
        .expect("Content-Type header should be present")
        .to_str()
        .unwrap()
        .to_string();
    assert!(
        content_type.contains("application/json"),
        "Expected JSON content type, got: {}",
        content_type
    );

    let json: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(json, serde_json::json!({ "status": "healthy", "tasks": 1 }));
}

#[actix_web::test]
async fn test_health_tracks_store_size() {
    let app = test::init_service(create_app(test_state())).await;

    let req = test::TestRequest::post()
        .uri("/items")
        .insert_header(("Authorization", "Bearer fake-jwt-token"))
        .set_json(serde_json::json!({ "text": "Buy milk" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let json: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(json["tasks"], 2);
}

#[actix_web::test]
async fn test_unseeded_store_starts_empty() {
    let state = AppState::new(TaskStore::new(), Authenticator::default(), MetricsConfig::default())
        .expect("Failed to create app state");
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::get()
        .uri("/items")
        .insert_header(("Authorization", "Bearer fake-jwt-token"))
        .to_request();
    let json: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(json, serde_json::json!([]));
}

#[actix_web::test]
async fn test_version_endpoint_integration() {
    let app = test::init_service(create_app(test_state())).await;

    let req = test::TestRequest::get().uri("/api/version").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["commit"].is_string(), "commit should be a string");
    assert!(json["build_time"].is_string(), "build_time should be a string");
}

#[actix_web::test]
async fn test_request_id_is_echoed() {
    let app = test::init_service(create_app(test_state())).await;

    let req = test::TestRequest::get()
        .uri("/api/health")
        .insert_header(("X-Request-ID", "trace-me-123"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    let request_id = resp.headers().get("x-request-id").expect("X-Request-ID header");
    assert_eq!(request_id, "trace-me-123");
}

#[actix_web::test]
async fn test_request_id_is_generated() {
    let app = test::init_service(create_app(test_state())).await;

    // Rejected requests carry an ID as well
    let req = test::TestRequest::get().uri("/items").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let request_id = resp
        .headers()
        .get("x-request-id")
        .expect("X-Request-ID header")
        .to_str()
        .unwrap();
    assert!(
        uuid::Uuid::parse_str(request_id).is_ok(),
        "Generated ID should be a UUID, got: {}",
        request_id
    );
}

#[actix_web::test]
async fn test_metrics_endpoint_reports_task_activity() {
    let app = test::init_service(create_app(test_state())).await;

    for uri in ["/items/1", "/items/999"] {
        let req = test::TestRequest::put()
            .uri(uri)
            .insert_header(("Authorization", "Bearer fake-jwt-token"))
            .set_json(serde_json::json!({ "completed": true }))
            .to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::get().uri("/api/metrics").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let body = std::str::from_utf8(&body).unwrap();

    assert!(body.contains("task_operations_total"), "Missing task counter:\n{}", body);
    assert!(body.contains("outcome=\"not_found\""), "Missing not_found outcome:\n{}", body);
    assert!(body.contains("tasks_stored 1"), "Missing stored gauge:\n{}", body);
    assert!(body.contains("route=\"/items/{id}\""), "Item routes should be collapsed:\n{}", body);
    assert!(!body.contains("route=\"/items/999\""), "Raw ids must not become labels:\n{}", body);
}

#[actix_web::test]
async fn test_metrics_endpoint_disabled() {
    let state = AppState::new(
        TaskStore::seeded(),
        Authenticator::default(),
        MetricsConfig { enabled: false },
    )
    .expect("Failed to create app state");
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::get().uri("/api/metrics").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[actix_web::test]
async fn test_openapi_document_is_served() {
    let app = test::init_service(create_app(test_state())).await;

    let req = test::TestRequest::get().uri("/api/spec/v2").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(json["info"]["title"], "Tasklist API");
    assert!(json["paths"].get("/login").is_some(), "login should be documented");
}

#[actix_web::test]
async fn test_rejected_item_requests_share_route_label() {
    let app = test::init_service(create_app(test_state())).await;

    for uri in ["/items/1", "/items/2", "/items/abc"] {
        let req = test::TestRequest::delete().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    let req = test::TestRequest::get().uri("/api/metrics").to_request();
    let body = test::call_and_read_body(&app, req).await;
    let body = std::str::from_utf8(&body).unwrap();

    let line = body
        .lines()
        .find(|l| {
            l.starts_with("http_requests_total{")
                && l.contains("method=\"DELETE\"")
                && l.contains("route=\"/items/{id}\"")
                && l.contains("status=\"401\"")
        })
        .unwrap_or_else(|| panic!("Missing rejected DELETE counter:\n{}", body));
    assert!(line.ends_with(" 3"), "All three requests share one label: {}", line);
    assert!(!body.contains("route=\"/api/metrics\""), "Scrapes are not recorded:\n{}", body);
}
