//! Repository contract between the news workflows and a storage backend.
//!
//! Reads go through [`NewsStore`] directly. Every mutation goes through a
//! [`NewsWriter`], which is only reachable inside
//! [`NewsStore::with_transaction`], so a workflow cannot write outside a
//! transaction by construction.

use async_trait::async_trait;
use futures::future::BoxFuture;

use crate::error::{StoreError, StoreResult};
use crate::news::{News, NewsListRow};
use crate::types::DbId;

/// Mutations available inside an open transaction.
#[async_trait]
pub trait NewsWriter: Send {
    /// Overwrite title and content of a news row.
    ///
    /// Blank values (empty or whitespace-only) keep the stored column. Returns
    /// `false` when no row with `id` exists.
    async fn update_fields(&mut self, id: DbId, title: &str, content: &str) -> StoreResult<bool>;

    /// Remove every category association of a news row.
    async fn delete_categories(&mut self, news_id: DbId) -> StoreResult<u64>;

    /// Insert one association per entry of `category_ids`, in order.
    async fn insert_categories(&mut self, news_id: DbId, category_ids: &[DbId])
        -> StoreResult<u64>;
}

/// Read access plus a transaction boundary.
#[async_trait]
pub trait NewsStore: Send + Sync {
    type Writer: NewsWriter;

    /// Fetch a single news row.
    async fn find_news(&self, id: DbId) -> StoreResult<Option<News>>;

    /// List news with aggregated categories, newest id first.
    async fn list_news(&self, limit: i32, offset: i32) -> StoreResult<Vec<NewsListRow>>;

    /// Run `scope` inside one transaction.
    ///
    /// The transaction commits when `scope` resolves to `Ok` and is rolled
    /// back when it resolves to `Err`. Failures to begin or commit are
    /// reported through `E::from`.
    async fn with_transaction<T, E, F>(&self, scope: F) -> Result<T, E>
    where
        T: Send,
        E: From<StoreError> + Send,
        F: for<'w> FnOnce(&'w mut Self::Writer) -> BoxFuture<'w, Result<T, E>> + Send;
}
