//! HTTP server command for the catalog API

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use catalog_server::db::{create_pool, migrations};
use catalog_server::{run_server, CatalogStore, MemoryCatalogStore, PgCatalogStore, ServerConfig};

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:4000")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Keep the catalog in process memory instead of Postgres (nothing persists)
    #[arg(long)]
    pub memory: bool,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let store: Arc<dyn CatalogStore> = if args.memory {
        tracing::warn!("Using in-memory catalog; data is lost on shutdown");
        Arc::new(MemoryCatalogStore::new())
    } else {
        let database = &args.database;
        let pool = create_pool(&database.database_url, database.max_connections)
            .await
            .context("Failed to create database pool")?;

        migrations::run(&pool)
            .await
            .context("Failed to prepare catalog schema")?;

        Arc::new(PgCatalogStore::new(pool))
    };

    tracing::info!("Starting catalog server on {}", args.bind);

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Blocks until shutdown
    run_server(store, config).await.context("Server error")?;

    Ok(())
}
