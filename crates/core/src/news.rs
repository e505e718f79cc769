//! News entities and the request payloads that act on them.
//!
//! Wire names are PascalCase (`Id`, `Title`, `Content`, `Categories`) to keep
//! the JSON contract the existing clients speak.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

/// A row from the `news` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct News {
    pub id: DbId,
    pub title: String,
    pub content: String,
}

/// A news item joined with the ids of every category it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct NewsListRow {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub categories: Vec<DbId>,
}

// ---------------------------------------------------------------------------
// Request payloads
// ---------------------------------------------------------------------------

/// Body of `POST /edit/{id}`.
///
/// Blank `Title`/`Content` leave the stored value unchanged. `Categories`,
/// when present and non-empty, replaces the whole category set; duplicates
/// are stored as given.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct EditNews {
    #[validate(range(min = 1))]
    pub id: DbId,
    #[validate(length(max = 100))]
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[validate(custom(function = "all_positive"))]
    #[serde(default)]
    pub categories: Option<Vec<DbId>>,
}

impl EditNews {
    /// Reject the payload when its `Id` does not match the id from the URL.
    pub fn ensure_matches(&self, path_id: DbId) -> Result<(), CoreError> {
        if self.id != path_id {
            return Err(CoreError::Validation(format!(
                "id mismatch: path has {path_id}, body has {}",
                self.id
            )));
        }
        Ok(())
    }

    /// Title to hand to the store; `""` means "keep the current value".
    ///
    /// Whitespace-only input counts as blank.
    pub fn title_or_blank(&self) -> &str {
        blank_if_whitespace(self.title.as_deref())
    }

    /// Content to hand to the store; `""` means "keep the current value".
    pub fn content_or_blank(&self) -> &str {
        blank_if_whitespace(self.content.as_deref())
    }

    /// The replacement category set, or `None` when categories stay untouched.
    pub fn replacement_categories(&self) -> Option<&[DbId]> {
        self.categories.as_deref().filter(|ids| !ids.is_empty())
    }
}

/// Body of `POST /login`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 20), custom(function = "not_blank"))]
    pub username: String,
    #[validate(length(min = 1, max = 20), custom(function = "not_blank"))]
    pub password: String,
}

/// Run the derived field rules and fold any failures into a [`CoreError`].
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(errors.to_string()))
}

fn blank_if_whitespace(value: Option<&str>) -> &str {
    match value {
        Some(value) if !value.trim().is_empty() => value,
        _ => "",
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn all_positive(ids: &[DbId]) -> Result<(), ValidationError> {
    if ids.iter().any(|&id| id < 1) {
        return Err(ValidationError::new("category_id_not_positive"));
    }
    Ok(())
}
