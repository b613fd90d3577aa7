//! usersvc-server: CRUD HTTP routes over a single `users` table
//!
//! Two pieces cooperate:
//! - `http`: the route table, mapping each endpoint onto one SQL statement
//! - `db`: the database shim that owns the pool and executes statements

pub mod db;
pub mod error;
pub mod http;
pub mod models;
pub mod state;

pub use error::{Error, Result};
pub use http::{build_router, run_server, ServerConfig};
pub use state::AppState;
