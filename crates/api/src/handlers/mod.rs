//! Request handlers.
//!
//! Handlers parse the request, delegate to `newsroom_core` workflows held in
//! [`AppState`](crate::state::AppState), and map errors via
//! [`AppError`](crate::error::AppError).

pub mod auth;
pub mod news;
