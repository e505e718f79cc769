//! Domain layer for the newsroom service.
//!
//! Holds the news data model, request validation, pagination parsing, the
//! repository contract implemented by the storage crate, and the list/edit
//! workflows that the HTTP layer drives.

pub mod error;
pub mod news;
pub mod pagination;
pub mod service;
pub mod store;
pub mod types;
