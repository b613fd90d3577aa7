//! PostgreSQL pool for the users service
//!
//! One pool is built at startup and shared by every request through
//! [`PgDatabase`](super::PgDatabase). Requests beyond `max_connections` wait
//! for a free connection.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Pool size used when `DATABASE_MAX_CONNECTIONS` is not set.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Connect with [`DEFAULT_MAX_CONNECTIONS`].
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Connect with an explicit pool size.
///
/// Fails if the first connection cannot be opened, so a bad
/// `DATABASE_URL` stops the server at startup instead of on the first request.
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    tracing::debug!(max_connections, "database pool ready");
    Ok(pool)
}
