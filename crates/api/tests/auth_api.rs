//! HTTP-level tests for `POST /login` and the bearer-token gate.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json, test_config, TEST_SECRET};
use jsonwebtoken::{encode, EncodingKey, Header};
use newsroom_api::auth::jwt::{verify_token, Claims};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_returns_verifiable_token(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/login",
        json!({ "Username": "editor", "Password": "anything" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let token = json["token"].as_str().expect("token must be a string");

    let claims = verify_token(token, &test_config().jwt).unwrap();
    assert_eq!(claims.username, "editor");
    assert!(claims.exp > claims.iat);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_rejects_blank_credentials(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(app, "/login", json!({ "Username": "  ", "Password": "x" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_rejects_malformed_body(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(app, "/login", json!({ "Username": 5 })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "invalid input");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_protected_route_without_token_is_401(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/list").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
    assert_eq!(json["error"], "Missing Authorization header");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_protected_route_with_garbage_token_is_401(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/list", "not-a-jwt").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], "Invalid or expired token");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_protected_route_with_expired_token_is_401(pool: PgPool) {
    let app = common::build_test_app(pool);
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        username: "late".to_string(),
        exp: now - 60,
        iat: now - 3600,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap();

    let response = get_auth(app, "/list", &token).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
