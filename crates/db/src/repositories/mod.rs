//! Repository implementations backed by PostgreSQL.

pub mod news_repo;

pub use news_repo::{PgNewsStore, PgNewsWriter};
