#![allow(dead_code)]

use std::time::Duration;

use axum::body::Body;
use axum::http::{HeaderValue, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use newsroom_api::auth::jwt::{issue_token, JwtConfig};
use newsroom_api::config::ServerConfig;
use newsroom_api::router::build_app_router;
use newsroom_api::state::AppState;
use newsroom_api::telemetry::{LogConfig, LogFormat};
use newsroom_core::pagination::PageDefaults;
use newsroom_core::types::DbId;
use newsroom_db::DbConfig;
use sqlx::PgPool;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "integration-test-secret";

/// Build a test `ServerConfig` with safe defaults.
///
/// The database section is unused: tests hand the router a pool created by
/// `#[sqlx::test]`.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![HeaderValue::from_static("http://localhost:5173")],
        request_timeout_secs: 30,
        pagination: PageDefaults::default(),
        jwt: JwtConfig {
            secret: TEST_SECRET.to_string(),
            expiry_hours: 1,
        },
        database: DbConfig {
            url: String::new(),
            max_connections: 5,
            min_connections: 0,
            max_lifetime: Duration::from_secs(60),
        },
        log: LogConfig {
            filter: "debug".to_string(),
            format: LogFormat::Pretty,
        },
    }
}

/// Build the full application router around `pool`, with the production
/// middleware stack.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState::new(pool, config.clone());
    build_app_router(state, &config)
}

/// A valid token signed with [`TEST_SECRET`].
pub fn test_token() -> String {
    issue_token("tester", &test_config().jwt).unwrap()
}

pub async fn insert_news(pool: &PgPool, id: DbId, title: &str, content: &str, categories: &[DbId]) {
    sqlx::query("INSERT INTO news (id, title, content) VALUES ($1, $2, $3)")
        .bind(id)
        .bind(title)
        .bind(content)
        .execute(pool)
        .await
        .unwrap();
    for &category in categories {
        sqlx::query("INSERT INTO news_categories (news_id, category_id) VALUES ($1, $2)")
            .bind(id)
            .bind(category)
            .execute(pool)
            .await
            .unwrap();
    }
}

pub async fn categories_of(pool: &PgPool, news_id: DbId) -> Vec<DbId> {
    sqlx::query_scalar("SELECT category_id FROM news_categories WHERE news_id = $1 ORDER BY id")
        .bind(news_id)
        .fetch_all(pool)
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::get(uri)
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::post(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    let request = Request::post(uri)
        .header("Content-Type", "application/json")
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_raw_auth(app: Router, uri: &str, body: &str, token: &str) -> Response {
    let request = Request::post(uri)
        .header("Content-Type", "application/json")
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
