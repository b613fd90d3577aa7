//! API error types with IntoResponse
//!
//! Every failure is answered with a plain-text body. Database failures are
//! logged with their cause; the client only sees the route's message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::db::DbError;

pub const NOT_FOUND_MESSAGE: &str = "User not found";
pub const UNAVAILABLE_MESSAGE: &str = "Error connecting to database";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// No row matched (404)
    NotFound,

    /// Statement failed (500, logged)
    Database {
        message: &'static str,
        source: DbError,
    },

    /// Ping failed (500)
    Unavailable,
}

impl ApiError {
    /// Map a database failure onto a route-specific 500 message.
    ///
    /// ```ignore
    /// db.fetch(sql, &params).await.map_err(ApiError::database("Error retrieving user"))?;
    /// ```
    pub fn database(message: &'static str) -> impl FnOnce(DbError) -> Self {
        move |source| Self::Database { message, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE).into_response(),
            Self::Database { message, source } => {
                tracing::error!(error = %source, "{}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
            Self::Unavailable => {
                tracing::error!("database ping failed");
                (StatusCode::INTERNAL_SERVER_ERROR, UNAVAILABLE_MESSAGE).into_response()
            }
        }
    }
}
