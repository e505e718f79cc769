//! List and edit workflows over a [`NewsStore`].

use tracing::instrument;

use crate::error::CoreError;
use crate::news::{validate_input, EditNews, NewsListRow};
use crate::pagination::{Page, PageDefaults};
use crate::store::{NewsStore, NewsWriter};
use crate::types::DbId;

/// Orchestrates news reads and edits against an injected store.
#[derive(Debug, Clone)]
pub struct NewsService<S> {
    store: S,
    page_defaults: PageDefaults,
}

impl<S: NewsStore> NewsService<S> {
    pub fn new(store: S, page_defaults: PageDefaults) -> Self {
        Self {
            store,
            page_defaults,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// List news using raw `limit`/`offset` query values.
    ///
    /// Absent values fall back to the configured defaults. Rows are ordered
    /// by id descending; pages are offset based and may shift when rows are
    /// added or removed between calls.
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        limit: Option<&str>,
        offset: Option<&str>,
    ) -> Result<Vec<NewsListRow>, CoreError> {
        let page = Page::parse(limit, offset, self.page_defaults).inspect_err(|err| {
            tracing::warn!(error = %err, "Rejected pagination parameters");
        })?;

        let rows = self
            .store
            .list_news(page.limit, page.offset)
            .await
            .inspect_err(|err| tracing::error!(error = %err, "Failed to list news"))?;

        tracing::debug!(count = rows.len(), "Listed news");
        Ok(rows)
    }

    /// Apply an edit to the news row identified by `path_id`.
    ///
    /// 1. The body id must equal `path_id`, and the fields must validate.
    /// 2. The row must exist.
    /// 3. Inside one transaction: update title/content (blank = unchanged),
    ///    then, when a non-empty category list was sent, delete the current
    ///    associations and insert the new ones.
    ///
    /// Steps 1 and 2 never write. Any failure in step 3 rolls the whole
    /// transaction back, so readers never observe a partial category set.
    #[instrument(skip(self, input), fields(news_id = path_id))]
    pub async fn edit(&self, path_id: DbId, input: EditNews) -> Result<(), CoreError> {
        input.ensure_matches(path_id).inspect_err(|err| {
            tracing::warn!(error = %err, body_id = input.id, "Rejected edit");
        })?;
        validate_input(&input)?;

        let existing = self
            .store
            .find_news(path_id)
            .await
            .inspect_err(|err| tracing::error!(error = %err, "Failed to load news"))?;
        if existing.is_none() {
            tracing::warn!("Edit target does not exist");
            return Err(CoreError::NotFound {
                entity: "News",
                id: path_id,
            });
        }

        let title = input.title_or_blank().to_owned();
        let content = input.content_or_blank().to_owned();
        let categories = input.replacement_categories().map(<[DbId]>::to_vec);

        self.store
            .with_transaction(move |writer| {
                Box::pin(async move {
                    apply_edit(writer, path_id, &title, &content, categories.as_deref()).await
                })
            })
            .await
            .inspect_err(|err| tracing::error!(error = %err, "Edit rolled back"))?;

        tracing::info!("News updated");
        Ok(())
    }
}

/// The transactional part of an edit.
async fn apply_edit<W: NewsWriter>(
    writer: &mut W,
    id: DbId,
    title: &str,
    content: &str,
    categories: Option<&[DbId]>,
) -> Result<(), CoreError> {
    if !writer.update_fields(id, title, content).await? {
        // Deleted between the existence check and the update.
        return Err(CoreError::NotFound { entity: "News", id });
    }

    if let Some(categories) = categories {
        let removed = writer.delete_categories(id).await?;
        let inserted = writer.insert_categories(id, categories).await?;
        tracing::debug!(removed, inserted, "Replaced news categories");
    }

    Ok(())
}
