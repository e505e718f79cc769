pub mod health;

use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::middleware::auth::require_bearer;
use crate::state::AppState;

/// Build the API route tree.
///
/// ```text
/// POST /login                 issue token (public)
/// GET  /list?limit=&offset=   list news (bearer token)
/// POST /edit/{id}             edit news (bearer token)
/// ```
pub fn api_routes(state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/list", get(handlers::news::list))
        .route("/edit/{id}", post(handlers::news::edit))
        .route_layer(from_fn_with_state(state.clone(), require_bearer));

    Router::new()
        .route("/login", post(handlers::auth::login))
        .merge(protected)
}
