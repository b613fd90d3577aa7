//! Schema bootstrap for the users table

use sqlx::PgPool;

use crate::Result;

/// Create the `users` table if it does not exist yet
pub async fn run(pool: &PgPool) -> Result<()> {
    tracing::info!("Running users migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id BIGSERIAL PRIMARY KEY,
            name TEXT,
            mail TEXT,
            title TEXT,
            image TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Users migrations complete");
    Ok(())
}
