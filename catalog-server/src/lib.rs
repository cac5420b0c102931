//! catalog-server: HTTP catalog of products and categories
//!
//! Products reference a category; lists are paginated and can be filtered
//! by category name. Storage sits behind [`db::CatalogStore`] so the same
//! router runs against Postgres or an in-memory store.

pub mod catalog;
pub mod db;
pub mod http;
pub mod models;

pub use catalog::{Catalog, CatalogError, CatalogResult};
pub use db::{CatalogStore, DbError, MemoryCatalogStore, PgCatalogStore};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig};
