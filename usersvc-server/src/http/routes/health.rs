//! Root health check

use axum::{extract::State, routing::get, Router};

use crate::http::error::ApiError;
use crate::state::AppState;

pub const CONNECTED_MESSAGE: &str = "usersvc REST API - connected to database";

/// GET / - succeeds only when the database answers a ping
async fn root(State(state): State<AppState>) -> Result<&'static str, ApiError> {
    if state.db().ping().await {
        Ok(CONNECTED_MESSAGE)
    } else {
        Err(ApiError::Unavailable)
    }
}

/// Health routes
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(root))
}
