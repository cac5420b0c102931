//! Database layer - connection pool, schema, and catalog stores
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections by default) - no Arc<Mutex<Connection>>
//! - Product fetch expands its category with a JOIN - no N+1 queries
//! - Referential integrity via foreign key, checked again before insert

pub mod memory;
pub mod migrations;
pub mod pool;
pub mod postgres;
pub mod store;

pub use memory::MemoryCatalogStore;
pub use pool::{create_pool, DEFAULT_MAX_CONNECTIONS};
pub use postgres::PgCatalogStore;
pub use store::{CatalogStore, DbError, ProductFilter};
