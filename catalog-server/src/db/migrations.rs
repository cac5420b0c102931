//! Schema bootstrap for the catalog tables
//!
//! Idempotent: every statement is `IF NOT EXISTS`, so this runs on each start.

use sqlx::PgPool;

use super::DbError;

/// Create catalog tables and indexes
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Running catalog migrations...");

    // gen_random_uuid() is built in from Postgres 13
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            seq BIGSERIAL NOT NULL,
            name TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            seq BIGSERIAL NOT NULL,
            title TEXT NOT NULL,
            price DOUBLE PRECISION NOT NULL,
            description TEXT NOT NULL,
            category_id UUID NOT NULL REFERENCES categories(id),
            image TEXT NOT NULL,
            rating_rate DOUBLE PRECISION,
            rating_count BIGINT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Name lookups back both category filters
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_categories_name ON categories(name, seq)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_products_category ON products(category_id, seq)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_products_seq ON products(seq)")
        .execute(pool)
        .await?;

    tracing::info!("Catalog migrations complete");
    Ok(())
}
