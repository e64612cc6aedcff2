#![allow(dead_code)]

use std::sync::Arc;

use agencyhub_api::auth::jwt::{generate_access_token, JwtConfig};
use agencyhub_api::config::ServerConfig;
use agencyhub_api::router::build_app_router;
use agencyhub_api::state::AppState;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

pub const TEST_JWT_SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Build the full application router, with the production middleware
/// stack, over the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(test_config()),
    };
    build_app_router(state).expect("test config is valid")
}

/// Mint a valid bearer token for `user_id`.
pub fn token_for(user_id: i64) -> String {
    generate_access_token(user_id, &test_config().jwt).expect("token generation should succeed")
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Send an unauthenticated GET.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a GET as `user_id`.
pub async fn get_as(app: Router, uri: &str, user_id: i64) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header("authorization", format!("Bearer {}", token_for(user_id)))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a JSON POST as `user_id`.
pub async fn post_json_as(
    app: Router,
    uri: &str,
    user_id: i64,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", token_for(user_id)))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Create an agency owned by `owner` and return its id.
pub async fn create_agency(pool: &PgPool, owner: i64, name: &str) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_json_as(app, "/api/v1/agencies", owner, serde_json::json!({ "name": name }))
        .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Insert an approved membership directly.
pub async fn add_member(
    pool: &PgPool,
    agency_id: i64,
    user_id: i64,
    user_type: &str,
    permission_level: &str,
) {
    sqlx::query(
        "INSERT INTO agency_members (agency_id, user_id, user_type, permission_level, status)
         VALUES ($1, $2, $3, $4, 'approved')",
    )
    .bind(agency_id)
    .bind(user_id)
    .bind(user_type)
    .bind(permission_level)
    .execute(pool)
    .await
    .unwrap();
}

/// A brief that passes validation.
pub fn valid_brief(agency_id: i64) -> serde_json::Value {
    serde_json::json!({
        "agency_id": agency_id,
        "name": "Spring launch",
        "project_type": "Branding",
        "goals": "Refresh the brand before the spring campaign",
        "help_type": "Create something new",
        "description": "A new visual identity, logo set and style guide.",
        "budget_range": "$10,000 - $25,000",
        "deadline": "2026-12-01"
    })
}

/// Force a project's proposal status directly.
pub async fn set_proposal_status(pool: &PgPool, project_id: i64, status: &str) {
    sqlx::query("UPDATE projects SET proposal_status = $2 WHERE id = $1")
        .bind(project_id)
        .bind(status)
        .execute(pool)
        .await
        .unwrap();
}
