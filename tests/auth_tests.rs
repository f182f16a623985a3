use actix_web::{http::StatusCode, test};
use tasklist_api::{
    AppState, Authenticator, LoginRequest, LoginResponse, MetricsConfig, TaskStore, create_app,
};

fn test_state() -> AppState {
    AppState::new(TaskStore::seeded(), Authenticator::default(), MetricsConfig::default())
        .expect("Failed to create app state")
}

#[actix_web::test]
async fn test_login_with_valid_credentials() {
    let app = test::init_service(create_app(test_state())).await;

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(LoginRequest::new("admin", "password"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK, "Login should succeed");

    let content_type = resp.headers().get("content-type").unwrap().to_str().unwrap();
    assert!(
        content_type.contains("application/json"),
        "Expected JSON content type, got: {}",
        content_type
    );

    let json: LoginResponse = test::read_body_json(resp).await;
    assert!(json.success);
    assert_eq!(json.token.as_deref(), Some("fake-jwt-token"));
    assert_eq!(json.username.as_deref(), Some("admin"));
}

#[actix_web::test]
async fn test_login_rejects_wrong_pairs() {
    let app = test::init_service(create_app(test_state())).await;

    let attempts = [
        serde_json::json!({ "username": "invalid", "password": "password" }),
        serde_json::json!({ "username": "admin", "password": "wrongpassword" }),
        serde_json::json!({ "username": "admin" }),
        serde_json::json!({ "password": "password" }),
        serde_json::json!({}),
        // Valid JSON with non-string fields is just another wrong pair
        serde_json::json!({ "username": 1, "password": "password" }),
        serde_json::json!({ "username": "admin", "password": true }),
        serde_json::json!({ "username": null, "password": null }),
        serde_json::json!([]),
        serde_json::json!("admin"),
    ];

    for body in attempts {
        let req = test::TestRequest::post()
            .uri("/login")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(
            resp.status(),
            StatusCode::UNAUTHORIZED,
            "Login with {} should be rejected",
            body
        );

        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            json,
            serde_json::json!({ "success": false, "message": "Invalid credentials" })
        );
    }
}

#[actix_web::test]
async fn test_login_malformed_body_is_server_error() {
    let app = test::init_service(create_app(test_state())).await;

    let req = test::TestRequest::post()
        .uri("/login")
        .insert_header(("content-type", "application/json"))
        .set_payload("invalid json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json: serde_json::Value = test::read_body_json(resp).await;
    assert!(json["message"].is_string());

    // A plain-text body is no more usable than broken JSON
    let req = test::TestRequest::post()
        .uri("/login")
        .insert_header(("content-type", "text/plain"))
        .set_payload("invalid json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[actix_web::test]
async fn test_login_uses_configured_account() {
    let auth = Authenticator::from_config(tasklist_api::AuthConfig {
        username: "operator".to_string(),
        password: "s3cret".to_string(),
        token: "operator-token".to_string(),
    });
    let state = AppState::new(TaskStore::new(), auth, MetricsConfig::default()).unwrap();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(LoginRequest::new("admin", "password"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(LoginRequest::new("operator", "s3cret"))
        .to_request();
    let json: LoginResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(json.token.as_deref(), Some("operator-token"));

    let req = test::TestRequest::get()
        .uri("/items")
        .insert_header(("Authorization", "Bearer operator-token"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/items")
        .insert_header(("Authorization", "Bearer fake-jwt-token"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
