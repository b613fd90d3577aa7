//! Command implementations for the usersvc binary

pub mod serve;

pub use serve::run_serve;
