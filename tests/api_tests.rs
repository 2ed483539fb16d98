//! Tests de integración sobre el router real.
//!
//! El pool se crea con `connect_lazy`, así que los caminos que cortan antes
//! de tocar la base (auth, validación, parseo de filtros) se prueban sin
//! Postgres corriendo.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;
use uuid::Uuid;

use dealership_backend::config::environment::EnvironmentConfig;
use dealership_backend::routes::create_router;
use dealership_backend::state::AppState;
use dealership_backend::utils::jwt::{generate_token, JwtConfig};

const TEST_SECRET: &str = "integration-test-secret";

fn test_config() -> EnvironmentConfig {
    EnvironmentConfig {
        environment: "test".to_string(),
        port: 0,
        host: "127.0.0.1".to_string(),
        database_url: "postgres://postgres@localhost:5432/dealership_test".to_string(),
        jwt_secret: TEST_SECRET.to_string(),
        jwt_expiration: 3600,
        cors_origins: vec![],
        rate_limit_requests: 10_000,
        rate_limit_window: 60,
    }
}

fn test_app() -> axum::Router {
    let config = test_config();
    let pool = PgPoolOptions::new()
        .connect_lazy(&config.database_url)
        .expect("lazy pool");
    create_router(AppState::new(pool, config))
}

fn admin_token() -> String {
    let jwt = JwtConfig {
        secret: TEST_SECRET.to_string(),
        expiration: 3600,
    };
    generate_token(Uuid::new_v4(), &jwt).expect("token")
}

fn json_request(method: &str, uri: &str, token: Option<&str>, body: serde_json::Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let app = test_app();
    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_create_vehicle_requires_token() {
    let app = test_app();
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/vehicles",
            None,
            serde_json::json!({}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_corrupted_token_rejected() {
    let app = test_app();
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/vehicles",
            Some("not.a.real-token"),
            serde_json::json!({}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_me_requires_token() {
    let app = test_app();
    let response = app
        .oneshot(Request::get("/api/admin/me").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_vehicle_with_empty_images_fails_validation() {
    let app = test_app();
    let token = admin_token();
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/vehicles",
            Some(&token),
            serde_json::json!({
                "title": "2019 BMW 320d",
                "brand": "BMW",
                "model": "320d",
                "year": 2019,
                "price": 2450000,
                "fuelType": "Diesel",
                "transmission": "Automatic",
                "mileage": 42000,
                "description": "Single owner",
                "images": []
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("At least one image is required"));
}

#[tokio::test]
async fn test_create_enquiry_with_bad_fields_fails_validation() {
    let app = test_app();
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/enquiries",
            None,
            serde_json::json!({
                "name": "",
                "phone": "123",
                "message": "Interested"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_whitespace_note_rejected() {
    let app = test_app();
    let token = admin_token();
    let response = app
        .oneshot(json_request(
            "POST",
            &format!("/api/enquiries/{}/notes", Uuid::new_v4()),
            Some(&token),
            serde_json::json!({ "note": "   " }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Note is required");
}

#[tokio::test]
async fn test_unknown_status_filter_rejected() {
    let app = test_app();
    let response = app
        .oneshot(
            Request::get("/api/vehicles?status=archived")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_price_bound_rejected() {
    let app = test_app();
    let response = app
        .oneshot(
            Request::get("/api/vehicles?minPrice=abc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_rate_limit_on_repeated_attempts() {
    // Límite estricto = rate_limit_requests / 10
    let mut config = test_config();
    config.rate_limit_requests = 20;
    // Sin acquire_timeout corto, cada intento contra la base inexistente
    // tarda ~30s y el tercer request cae fuera de la ventana del limiter.
    let pool = PgPoolOptions::new()
        .acquire_timeout(std::time::Duration::from_secs(1))
        .connect_lazy(&config.database_url)
        .expect("lazy pool");
    let app = create_router(AppState::new(pool, config));

    // Las primeras 2 pasan el limiter (y fallan después contra la base,
    // que no está disponible en este test); la tercera debe dar 429.
    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/admin/login",
                None,
                serde_json::json!({ "email": "a@b.com", "password": "wrong" }),
            ))
            .await
            .unwrap();
        assert_ne!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/admin/login",
            None,
            serde_json::json!({ "email": "a@b.com", "password": "wrong" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
}
