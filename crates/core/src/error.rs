use crate::types::DbId;

/// Boxed driver error carried inside [`StoreError`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error(transparent)]
    Storage(#[from] StoreError),
}

/// A failure reported by a storage backend.
///
/// `operation` names the repository call that failed (`"update_fields"`,
/// `"commit"`, ...) so logs can pinpoint the step of a workflow that broke.
#[derive(Debug, thiserror::Error)]
#[error("{operation} failed: {source}")]
pub struct StoreError {
    pub operation: &'static str,
    #[source]
    pub source: BoxError,
}

impl StoreError {
    pub fn new(operation: &'static str, source: impl Into<BoxError>) -> Self {
        Self {
            operation,
            source: source.into(),
        }
    }

    /// Adapter for `map_err` on driver results.
    pub fn at<E>(operation: &'static str) -> impl FnOnce(E) -> Self
    where
        E: Into<BoxError>,
    {
        move |err| Self::new(operation, err)
    }
}

/// Result alias used throughout the repository traits.
pub type StoreResult<T> = Result<T, StoreError>;
