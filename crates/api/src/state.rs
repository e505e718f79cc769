use std::sync::Arc;

use newsroom_core::service::NewsService;
use newsroom_db::repositories::PgNewsStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (health checks).
    pub pool: newsroom_db::DbPool,
    /// Server configuration (JWT settings are read by the auth gate).
    pub config: Arc<ServerConfig>,
    /// List and edit workflows.
    pub news: Arc<NewsService<PgNewsStore>>,
}

impl AppState {
    /// Wire the news workflows to `pool` using the configured page defaults.
    pub fn new(pool: newsroom_db::DbPool, config: ServerConfig) -> Self {
        let news = NewsService::new(PgNewsStore::new(pool.clone()), config.pagination);
        Self {
            pool,
            config: Arc::new(config),
            news: Arc::new(news),
        }
    }
}
