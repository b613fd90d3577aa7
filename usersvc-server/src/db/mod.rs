//! Database shim - connection pool, statement execution and schema bootstrap
//!
//! Handlers never see a raw connection. They hand a SQL string and its
//! positional parameters to a [`Database`] and get rows or a mutation
//! summary back.

pub mod database;
pub mod migrations;
#[cfg(test)]
pub mod mock;
pub mod pool;

pub use database::{Database, DbError, Param, PgDatabase};
pub use pool::{create_pool, create_pool_with_options};
