//! Schema bootstrap command

use anyhow::{Context, Result};
use clap::Parser;

use catalog_server::db::{create_pool, migrations};

use super::DatabaseArgs;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Create catalog tables and exit
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let pool = create_pool(&args.database.database_url, args.database.max_connections)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to prepare catalog schema")?;

    pool.close().await;
    Ok(())
}
