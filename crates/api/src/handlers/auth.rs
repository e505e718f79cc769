//! Handler for `POST /login`.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use newsroom_core::news::{validate_input, LoginRequest};

use crate::auth::jwt::issue_token;
use crate::error::{AppError, AppResult};
use crate::response::TokenResponse;
use crate::state::AppState;

/// POST /login
///
/// Issues a signed token for any well-formed username/password pair. The
/// password is checked for shape only and never stored in the token.
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> AppResult<Json<TokenResponse>> {
    let Json(input) = body.map_err(|rejection| {
        tracing::warn!(error = %rejection, "Rejected login body");
        AppError::BadRequest("invalid input".into())
    })?;
    validate_input(&input)?;

    let token = issue_token(&input.username, &state.config.jwt).map_err(|err| {
        AppError::InternalError(format!("Failed to sign token: {err}"))
    })?;

    tracing::info!(username = %input.username, "Issued access token");
    Ok(Json(TokenResponse { token }))
}
