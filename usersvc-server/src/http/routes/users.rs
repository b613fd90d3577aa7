//! User endpoints
//!
//! Each handler issues exactly one statement. Mutations report touched ids
//! with `RETURNING id`, so "nothing matched" is `affected_rows == 0`.

use axum::{extract::State, routing::get, Json, Router};

use crate::db::Param;
use crate::http::error::ApiError;
use crate::http::extractors::UserId;
use crate::models::{MutationResult, User, UserInput};
use crate::state::AppState;

pub const SELECT_ALL: &str = "SELECT id, name, mail, title, image FROM users ORDER BY id";
pub const SELECT_BY_ID: &str = "SELECT id, name, mail, title, image FROM users WHERE id = $1";
pub const INSERT: &str =
    "INSERT INTO users (name, mail, title, image) VALUES ($1, $2, $3, $4) RETURNING id";
pub const UPDATE: &str =
    "UPDATE users SET name = $1, mail = $2, title = $3, image = $4 WHERE id = $5 RETURNING id";
pub const DELETE: &str = "DELETE FROM users WHERE id = $1 RETURNING id";

/// Reject a mutation that matched no row
fn require_rows(result: MutationResult) -> Result<Json<MutationResult>, ApiError> {
    if result.is_empty() {
        return Err(ApiError::NotFound);
    }
    tracing::debug!(?result, "mutation applied");
    Ok(Json(result))
}

/// GET /users - list every row
async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state
        .db()
        .fetch(SELECT_ALL, &[])
        .await
        .map_err(ApiError::database("Error retrieving users"))?;

    tracing::debug!(count = users.len(), "listed users");
    Ok(Json(users))
}

/// GET /users/{id} - singleton array with the matching row
async fn get_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> Result<Json<Vec<User>>, ApiError> {
    let users = state
        .db()
        .fetch(SELECT_BY_ID, &[Param::Id(id)])
        .await
        .map_err(ApiError::database("Error retrieving user"))?;

    if users.is_empty() {
        return Err(ApiError::NotFound);
    }
    tracing::debug!(?users, "retrieved user");
    Ok(Json(users))
}

/// POST /users - insert a row
async fn create_user(
    State(state): State<AppState>,
    Json(input): Json<UserInput>,
) -> Result<Json<MutationResult>, ApiError> {
    tracing::debug!(?input, "creating user");

    let result = state
        .db()
        .execute(INSERT, &input.into_params())
        .await
        .map_err(ApiError::database("Error creating user"))?;

    require_rows(result)
}

/// PUT /users/{id} - overwrite all four columns
async fn update_user(
    State(state): State<AppState>,
    UserId(id): UserId,
    Json(input): Json<UserInput>,
) -> Result<Json<MutationResult>, ApiError> {
    tracing::debug!(id, ?input, "updating user");

    let mut params = input.into_params();
    params.push(Param::Id(id));

    let result = state
        .db()
        .execute(UPDATE, &params)
        .await
        .map_err(ApiError::database("Error updating user"))?;

    require_rows(result)
}

/// DELETE /users/{id}
async fn delete_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> Result<Json<MutationResult>, ApiError> {
    let result = state
        .db()
        .execute(DELETE, &[Param::Id(id)])
        .await
        .map_err(ApiError::database("Error deleting user"))?;

    require_rows(result)
}

/// User routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}
