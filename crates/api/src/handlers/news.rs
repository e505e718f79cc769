//! Handlers for the news resource.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use newsroom_core::news::EditNews;
use newsroom_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::query::PageQuery;
use crate::response::{NewsListResponse, SuccessResponse};
use crate::state::AppState;

/// GET /list?limit=&offset=
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> AppResult<Json<NewsListResponse>> {
    let Query(page) = query.map_err(|rejection| {
        tracing::warn!(error = %rejection, "Rejected list query");
        AppError::BadRequest("invalid query".into())
    })?;

    let news = state
        .news
        .list(page.limit.as_deref(), page.offset.as_deref())
        .await?;

    Ok(Json(NewsListResponse {
        success: true,
        news,
    }))
}

/// POST /edit/{id}
///
/// The path id is taken as a string so a non-numeric id yields the same JSON
/// error body as every other bad request.
pub async fn edit(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Result<Json<EditNews>, JsonRejection>,
) -> AppResult<Json<SuccessResponse>> {
    let id: DbId = raw_id.parse().map_err(|_| {
        tracing::warn!(raw_id = %raw_id, "Rejected news id");
        AppError::BadRequest("invalid news id".into())
    })?;

    let Json(input) = body.map_err(|rejection| {
        tracing::warn!(error = %rejection, "Rejected edit body");
        AppError::BadRequest("invalid input".into())
    })?;

    state.news.edit(id, input).await?;
    Ok(Json(SuccessResponse::ok()))
}
