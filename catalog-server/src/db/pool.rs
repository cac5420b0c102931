//! Postgres connection pool for the catalog store

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Pool size used when none is configured.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Connect to `database_url` with at most `max_connections` open connections.
///
/// A size of zero is raised to one so the pool can always serve a request.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    let max_connections = max_connections.max(1);
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    tracing::debug!(max_connections, "catalog database pool ready");
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Run with: DATABASE_URL=postgres://... cargo test -p catalog-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn zero_sized_pool_still_connects() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url, 0).await.expect("pool creation failed");
        assert_eq!(pool.options().get_max_connections(), 1);

        let (one,): (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");
        assert_eq!(one, 1);
    }
}
