// src/models/category.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

/// Represents the 'categories' table in the database.
///
/// The display label lives in the database column `type` (a holdover from
/// the original schema); it is selected as `label` and serialized back
/// under the `type` key the clients expect.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,

    #[serde(rename = "type")]
    pub label: String,
}
