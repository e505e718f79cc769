//! Request middleware.
//!
//! - [`auth::require_bearer`] -- Rejects requests without a valid JWT Bearer token.

pub mod auth;
