//! Repository for the `news` and `news_categories` tables.

use async_trait::async_trait;
use futures::future::BoxFuture;
use newsroom_core::error::{StoreError, StoreResult};
use newsroom_core::news::{News, NewsListRow};
use newsroom_core::store::{NewsStore, NewsWriter};
use newsroom_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::news::{NewsRow, NewsWithCategoriesRow};

/// Column list for `news` queries.
const COLUMNS: &str = "id, title, content";

/// [`NewsStore`] over a PostgreSQL pool.
#[derive(Debug, Clone)]
pub struct PgNewsStore {
    pool: PgPool,
}

impl PgNewsStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl NewsStore for PgNewsStore {
    type Writer = PgNewsWriter;

    async fn find_news(&self, id: DbId) -> StoreResult<Option<News>> {
        let query = format!("SELECT {COLUMNS} FROM news WHERE id = $1");
        let row = sqlx::query_as::<_, NewsRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StoreError::at("find_news"))?;
        Ok(row.map(News::from))
    }

    async fn list_news(&self, limit: i32, offset: i32) -> StoreResult<Vec<NewsListRow>> {
        let rows = sqlx::query_as::<_, NewsWithCategoriesRow>(
            "SELECT n.id, n.title, n.content, \
                    COALESCE( \
                        array_agg(nc.category_id ORDER BY nc.id) \
                            FILTER (WHERE nc.category_id IS NOT NULL), \
                        '{}' \
                    ) AS categories \
             FROM news n \
             LEFT JOIN news_categories nc ON nc.news_id = n.id \
             GROUP BY n.id, n.title, n.content \
             ORDER BY n.id DESC \
             LIMIT $1 OFFSET $2",
        )
        .bind(i64::from(limit))
        .bind(i64::from(offset))
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::at("list_news"))?;

        Ok(rows.into_iter().map(NewsListRow::from).collect())
    }

    async fn with_transaction<T, E, F>(&self, scope: F) -> Result<T, E>
    where
        T: Send,
        E: From<StoreError> + Send,
        F: for<'w> FnOnce(&'w mut Self::Writer) -> BoxFuture<'w, Result<T, E>> + Send,
    {
        let tx = self.pool.begin().await.map_err(StoreError::at("begin"))?;
        let mut writer = PgNewsWriter { tx };

        match scope(&mut writer).await {
            Ok(value) => {
                writer
                    .tx
                    .commit()
                    .await
                    .map_err(StoreError::at("commit"))?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = writer.tx.rollback().await {
                    tracing::warn!(error = %rollback_err, "Rollback failed; connection will be discarded");
                }
                Err(err)
            }
        }
    }
}

/// [`NewsWriter`] bound to an open PostgreSQL transaction.
pub struct PgNewsWriter {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl NewsWriter for PgNewsWriter {
    async fn update_fields(&mut self, id: DbId, title: &str, content: &str) -> StoreResult<bool> {
        let result = sqlx::query(
            "UPDATE news SET \
                title = CASE WHEN $2 ~ '^\\s*$' THEN title ELSE $2 END, \
                content = CASE WHEN $3 ~ '^\\s*$' THEN content ELSE $3 END \
             WHERE id = $1",
        )
        .bind(id)
        .bind(title)
        .bind(content)
        .execute(&mut *self.tx)
        .await
        .map_err(StoreError::at("update_fields"))?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_categories(&mut self, news_id: DbId) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM news_categories WHERE news_id = $1")
            .bind(news_id)
            .execute(&mut *self.tx)
            .await
            .map_err(StoreError::at("delete_categories"))?;
        Ok(result.rows_affected())
    }

    async fn insert_categories(
        &mut self,
        news_id: DbId,
        category_ids: &[DbId],
    ) -> StoreResult<u64> {
        let result = sqlx::query(
            "INSERT INTO news_categories (news_id, category_id) \
             SELECT $1, t.category_id \
             FROM unnest($2::BIGINT[]) WITH ORDINALITY AS t(category_id, position) \
             ORDER BY t.position",
        )
        .bind(news_id)
        .bind(category_ids)
        .execute(&mut *self.tx)
        .await
        .map_err(StoreError::at("insert_categories"))?;
        Ok(result.rows_affected())
    }
}
