//! JWT bearer-token gate for protected routes.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

use crate::auth::jwt::{verify_token, Claims, JwtConfig};
use crate::error::AppError;
use crate::state::AppState;

/// Middleware that only lets requests with a valid `Authorization: Bearer <token>`
/// header through.
///
/// Mount with `axum::middleware::from_fn_with_state` as a `route_layer`.
/// The request is forwarded unchanged; claims are not attached to it.
pub async fn require_bearer(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let claims = authenticate(request.headers(), &state.config.jwt)?;
    tracing::debug!(username = %claims.username, "Bearer token accepted");
    Ok(next.run(request).await)
}

/// Extract and verify the bearer token from `headers`.
pub fn authenticate(headers: &HeaderMap, jwt: &JwtConfig) -> Result<Claims, AppError> {
    let auth_header = headers.get(AUTHORIZATION).ok_or_else(|| {
        tracing::warn!("Missing Authorization header");
        AppError::unauthorized("Missing Authorization header")
    })?;

    let token = auth_header
        .to_str()
        .ok()
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| {
            tracing::warn!("Malformed Authorization header");
            AppError::unauthorized("Invalid Authorization format. Expected: Bearer <token>")
        })?;

    verify_token(token, jwt).map_err(|err| {
        tracing::warn!(error = %err, "Rejected bearer token");
        AppError::unauthorized("Invalid or expired token")
    })
}
