//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::ApiError;

/// Extract a user id from the path.
///
/// An id that is not an integer cannot match any row, so it is answered
/// with the same 404 as a missing user.
pub struct UserId(pub i64);

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound)?;

        raw.trim().parse::<i64>().map(Self).map_err(|_| {
            tracing::debug!(id = %raw, "user id is not an integer");
            ApiError::NotFound
        })
    }
}
