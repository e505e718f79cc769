//! Authentication primitives.
//!
//! - [`jwt`] -- HS256 access-token issuing and verification.

pub mod jwt;
