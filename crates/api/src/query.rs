//! Query parameter types for API handlers.

use serde::Deserialize;

/// Raw `?limit=&offset=` values.
///
/// Kept as strings so range and format errors are reported by
/// `newsroom_core::pagination` with a JSON body instead of an extractor
/// rejection.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub limit: Option<String>,
    pub offset: Option<String>,
}
