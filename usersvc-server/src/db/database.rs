//! Database trait and the PostgreSQL implementation
//!
//! The trait is the narrow interface the route table consumes:
//! - `ping`: liveness check
//! - `fetch`: run a read statement, return rows
//! - `execute`: run a write statement, return a mutation summary

use async_trait::async_trait;
use sqlx::postgres::PgArguments;
use sqlx::query::Query;
use sqlx::{FromRow, PgPool, Postgres, Row};

use crate::models::{MutationResult, User};

/// Positional bind value for a statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    /// Primary key
    Id(i64),
    /// Nullable text column
    Text(Option<String>),
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Trait for statement execution (testable)
#[async_trait]
pub trait Database: Send + Sync {
    /// Returns true when a round trip to the database succeeds.
    async fn ping(&self) -> bool;

    /// Run a read statement and decode every row as a [`User`].
    async fn fetch(&self, sql: &str, params: &[Param]) -> Result<Vec<User>, DbError>;

    /// Run a write statement that reports touched rows with `RETURNING id`.
    async fn execute(&self, sql: &str, params: &[Param]) -> Result<MutationResult, DbError>;
}

/// PostgreSQL implementation over a shared connection pool
#[derive(Clone)]
pub struct PgDatabase {
    pool: PgPool,
}

impl PgDatabase {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

fn bind_params<'q>(
    mut query: Query<'q, Postgres, PgArguments>,
    params: &'q [Param],
) -> Query<'q, Postgres, PgArguments> {
    for param in params {
        query = match param {
            Param::Id(id) => query.bind(*id),
            Param::Text(text) => query.bind(text.as_deref()),
        };
    }
    query
}

#[async_trait]
impl Database for PgDatabase {
    async fn ping(&self) -> bool {
        match sqlx::query("SELECT 1").execute(&self.pool).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = %e, "database ping failed");
                false
            }
        }
    }

    async fn fetch(&self, sql: &str, params: &[Param]) -> Result<Vec<User>, DbError> {
        let rows = bind_params(sqlx::query(sql), params)
            .fetch_all(&self.pool)
            .await?;

        let users = rows
            .iter()
            .map(User::from_row)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(users)
    }

    async fn execute(&self, sql: &str, params: &[Param]) -> Result<MutationResult, DbError> {
        let rows = bind_params(sqlx::query(sql), params)
            .fetch_all(&self.pool)
            .await?;

        let ids = rows
            .iter()
            .map(|row| row.try_get::<i64, _>("id"))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(MutationResult::from_ids(&ids))
    }
}
