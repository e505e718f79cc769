//! Response envelopes for the news API.
//!
//! Field names follow the existing wire contract: `Success`/`News` are
//! PascalCase, the login payload uses lowercase `token`.

use newsroom_core::news::NewsListRow;
use serde::Serialize;

/// `{ "Success": true }`
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// `{ "Success": true, "News": [...] }`
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct NewsListResponse {
    pub success: bool,
    pub news: Vec<NewsListRow>,
}

/// `{ "token": "<jwt>" }`
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}
