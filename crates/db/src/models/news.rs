//! Row types for the `news` and `news_categories` tables.

use newsroom_core::news::{News, NewsListRow};
use newsroom_core::types::DbId;
use sqlx::FromRow;

/// A row from the `news` table.
#[derive(Debug, Clone, FromRow)]
pub struct NewsRow {
    pub id: DbId,
    pub title: String,
    pub content: String,
}

impl From<NewsRow> for News {
    fn from(row: NewsRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            content: row.content,
        }
    }
}

/// A `news` row with its category ids aggregated into an array.
#[derive(Debug, Clone, FromRow)]
pub struct NewsWithCategoriesRow {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub categories: Vec<DbId>,
}

impl From<NewsWithCategoriesRow> for NewsListRow {
    fn from(row: NewsWithCategoriesRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            content: row.content,
            categories: row.categories,
        }
    }
}
