//! Command implementations for the catalog CLI

pub mod migrate;
pub mod serve;

use clap::Args;

use catalog_server::db::DEFAULT_MAX_CONNECTIONS;

pub use migrate::run_migrate;
pub use serve::run_serve;

/// Postgres connection settings shared by commands that open a pool
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// Database URL (overrides environment)
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "postgres://localhost:5432/ecommerce"
    )]
    pub database_url: String,

    /// Maximum pooled connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}
