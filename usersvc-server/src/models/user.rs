//! User row, request body and mutation summary

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use crate::db::Param;

/// A row of the `users` table.
///
/// Every column except `id` is nullable: the service never validates
/// input, so whatever the schema accepts is what comes back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: Option<String>,
    pub mail: Option<String>,
    pub title: Option<String>,
    pub image: Option<String>,
}

/// Body of `POST /users` and `PUT /users/{id}`.
///
/// Missing fields deserialize to `None` and are bound as SQL `NULL`.
/// Any other JSON value is accepted and bound as its text form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UserInput {
    #[serde(deserialize_with = "any_as_text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "any_as_text")]
    pub mail: Option<String>,
    #[serde(deserialize_with = "any_as_text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "any_as_text")]
    pub image: Option<String>,
}

/// Strings pass through unquoted; numbers, bools, arrays and objects
/// become their JSON text; `null` stays `None`.
fn any_as_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

impl UserInput {
    /// Bind values in column order: name, mail, title, image.
    pub fn into_params(self) -> Vec<Param> {
        vec![
            Param::Text(self.name),
            Param::Text(self.mail),
            Param::Text(self.title),
            Param::Text(self.image),
        ]
    }
}

/// Summary of an INSERT/UPDATE/DELETE.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationResult {
    /// Number of rows the statement touched
    pub affected_rows: u64,
    /// Id of the first touched row (the generated id for INSERT)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl MutationResult {
    /// Build a summary from the ids a statement reported via `RETURNING id`.
    pub fn from_ids(ids: &[i64]) -> Self {
        Self {
            affected_rows: ids.len() as u64,
            id: ids.first().copied(),
        }
    }

    /// True when the statement matched no row.
    pub fn is_empty(&self) -> bool {
        self.affected_rows == 0
    }
}
