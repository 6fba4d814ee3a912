//! HTTP API tests driving the full router with in-process requests.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use holiday_analyzer::auth::TokenService;
use holiday_analyzer::clients::NagerClient;
use holiday_analyzer::config::AppConfig;
use holiday_analyzer::db::repository::FullRepository;
use holiday_analyzer::db::{seed_reference_data, LocalRepository};
use holiday_analyzer::http::{create_router, AppState};

async fn test_app() -> Router {
    let repository: Arc<dyn FullRepository> = Arc::new(LocalRepository::new());
    seed_reference_data(repository.as_ref()).await.unwrap();

    let config = AppConfig::default();
    let state = AppState::new(
        repository,
        Arc::new(NagerClient::new(&config.import.base_url)),
        Arc::new(TokenService::new(
            &config.auth.jwt_secret,
            config.auth.token_ttl_seconds,
        )),
        Arc::new(config),
    );
    create_router(state)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn login_token(app: &Router) -> String {
    let response = app
        .clone()
        .oneshot(post_json(
            "/api/auth/login",
            json!({"username": "admin", "password": "admin"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    body["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_health() {
    let app = test_app().await;
    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "connected");
}

#[tokio::test]
async fn test_login_and_validate() {
    let app = test_app().await;
    let token = login_token(&app).await;

    let request = Request::builder()
        .uri("/api/auth/validate")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["valid"], true);
    assert_eq!(body["username"], "admin");
    assert_eq!(body["role"], "ADMIN");
}

#[tokio::test]
async fn test_login_rejects_bad_password() {
    let app = test_app().await;
    let response = app
        .oneshot(post_json(
            "/api/auth/login",
            json!({"username": "admin", "password": "wrong"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_validate_rejects_missing_token() {
    let app = test_app().await;
    let response = app.oneshot(get("/api/auth/validate")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert_eq!(body["valid"], false);
}

#[tokio::test]
async fn test_admin_routes_require_token() {
    let app = test_app().await;
    let response = app
        .clone()
        .oneshot(post_json(
            "/api/admin/countries",
            json!({"code": "PL", "name": "Poland", "population": 37_500_000}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let request = Request::builder()
        .method("POST")
        .uri("/api/admin/countries")
        .header(header::AUTHORIZATION, "Bearer not.a.token")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({"code": "PL", "name": "Poland"}).to_string(),
        ))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_country_crud() {
    let app = test_app().await;
    let token = login_token(&app).await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/admin/countries")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({"code": "PL", "name": "Poland", "population": 37_500_000}).to_string(),
        ))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["code"], "PL");
    assert!(created["id"].is_i64());

    // Duplicate code conflicts
    let request = Request::builder()
        .method("POST")
        .uri("/api/admin/countries")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({"code": "PL", "name": "Poland again"}).to_string(),
        ))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // The new country shows up in the public listing
    let response = app.oneshot(get("/api/countries")).await.unwrap();
    let body = body_json(response).await;
    let codes: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["code"].as_str().unwrap())
        .collect();
    assert!(codes.contains(&"PL"));
}

#[tokio::test]
async fn test_vacation_load_endpoint() {
    let app = test_app().await;
    let response = app
        .oneshot(get("/api/vacation-load?country_code=DE&year=2025"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["year"], 2025);
    assert_eq!(body["daily_loads"].as_array().unwrap().len(), 365);
    // Week 1 absorbs the Dec 29-31 days and ties the summer weeks at the
    // full 16-state population, so the earliest-week rule picks it
    assert_eq!(body["peak_period"]["start_week"], 1);
    assert!(body["peak_period"]["description"]
        .as_str()
        .unwrap()
        .contains("Weihnachtsferien"));
}

#[tokio::test]
async fn test_vacation_load_unknown_country() {
    let app = test_app().await;
    let response = app
        .oneshot(get("/api/vacation-load?country_code=XX&year=2025"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_vacation_analysis_endpoint() {
    let app = test_app().await;
    let response = app
        .clone()
        .oneshot(get(
            "/api/vacation-analysis?country=DE&start_date=2025-07-01&end_date=2025-08-31",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert!(!body["school_holidays"].as_array().unwrap().is_empty());

    // Malformed date is a client error
    let response = app
        .oneshot(get(
            "/api/vacation-analysis?country=DE&start_date=July&end_date=2025-08-31",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_region_lookup() {
    let app = test_app().await;
    let response = app.clone().oneshot(get("/api/regions/DE-BY")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["name"], "Bayern");

    let response = app.oneshot(get("/api/regions/DE-XX")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_regions_filtered_by_country() {
    let app = test_app().await;
    let response = app
        .oneshot(get("/api/regions?country_code=DE"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 16);
}

#[tokio::test]
async fn test_school_holidays_filters() {
    let app = test_app().await;

    // (region, year) filter
    let response = app
        .clone()
        .oneshot(get("/api/school-holidays?region_code=DE-BY&year=2025"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let by_region = body_json(response).await;
    assert!(by_region
        .as_array()
        .unwrap()
        .iter()
        .all(|sh| sh["region_code"] == "DE-BY"));

    // (country, year) filter returns every German state's breaks
    let response = app
        .clone()
        .oneshot(get("/api/school-holidays?country_code=DE&year=2025"))
        .await
        .unwrap();
    let by_country = body_json(response).await;
    assert!(by_country.as_array().unwrap().len() > by_region.as_array().unwrap().len());

    // Date range filter
    let response = app
        .oneshot(get(
            "/api/school-holidays?region_code=DE-BY&start_date=2025-07-01&end_date=2025-08-31",
        ))
        .await
        .unwrap();
    let in_range = body_json(response).await;
    assert!(in_range
        .as_array()
        .unwrap()
        .iter()
        .any(|sh| sh["name"] == "Sommerferien"));
}

#[tokio::test]
async fn test_admin_school_holiday_lifecycle() {
    let app = test_app().await;
    let token = login_token(&app).await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/admin/school-holidays")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({
                "name": "Projektwoche",
                "region_code": "DE-BY",
                "start_date": "2025-05-05",
                "end_date": "2025-05-09"
            })
            .to_string(),
        ))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["year"], 2025);

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/admin/school-holidays/{}", id))
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Bulk delete by region and year reports the count
    let request = Request::builder()
        .method("DELETE")
        .uri("/api/admin/school-holidays?region_code=DE-BY&year=2025")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["deleted"].as_u64().unwrap() > 0);
}
