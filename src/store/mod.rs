// src/store/mod.rs

pub mod memory;
pub mod postgres;

use std::fmt;

use async_trait::async_trait;

use crate::models::category::Category;
use crate::models::question::{NewQuestion, Question};

/// Failure inside a store implementation. Translated to an internal error
/// at the service boundary; never shown to clients verbatim.
#[derive(Debug)]
pub struct StoreError(pub String);

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for StoreError {}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError(err.to_string())
    }
}

/// Question persistence seam.
///
/// Implementations must keep `all` ordered by ascending id so pagination is
/// stable across calls, and must match categories on the normalized integer
/// id regardless of how the reference is stored.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    async fn all(&self) -> Result<Vec<Question>, StoreError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Question>, StoreError>;

    async fn by_category(&self, category_id: i64) -> Result<Vec<Question>, StoreError>;

    /// Case-insensitive substring match against the question text only.
    async fn search_text(&self, term: &str) -> Result<Vec<Question>, StoreError>;

    async fn insert(&self, new: NewQuestion) -> Result<Question, StoreError>;

    /// Returns whether a row was actually removed.
    async fn delete_by_id(&self, id: i64) -> Result<bool, StoreError>;
}

/// Category lookup seam. Categories are read-only here; seeding happens in
/// migrations.
#[async_trait]
pub trait CategoryStore: Send + Sync {
    async fn all(&self) -> Result<Vec<Category>, StoreError>;

    async fn count(&self) -> Result<i64, StoreError>;
}
