// src/store/postgres.rs

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::prelude::FromRow;

use crate::models::category::Category;
use crate::models::question::{NewQuestion, Question};
use crate::store::{CategoryStore, QuestionStore, StoreError};

/// Row shape for the 'questions' table.
///
/// The `category` column is TEXT: the original schema stored the reference
/// as a string while category ids are integers, and existing data keeps
/// that representation. Normalization to `Option<i64>` happens here, at the
/// row boundary, so the rest of the crate only ever sees integer ids.
#[derive(Debug, FromRow)]
struct QuestionRow {
    id: i64,
    question: String,
    answer: String,
    category: Option<String>,
    difficulty: i32,
}

impl From<QuestionRow> for Question {
    fn from(row: QuestionRow) -> Self {
        Question {
            id: row.id,
            question: row.question,
            answer: row.answer,
            category: row.category.as_deref().and_then(|c| c.trim().parse().ok()),
            difficulty: row.difficulty,
        }
    }
}

/// Postgres-backed question store.
#[derive(Clone)]
pub struct PgQuestionStore {
    pool: PgPool,
}

impl PgQuestionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuestionStore for PgQuestionStore {
    async fn all(&self) -> Result<Vec<Question>, StoreError> {
        let rows: Vec<QuestionRow> = sqlx::query_as(
            "SELECT id, question, answer, category, difficulty FROM questions ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Question::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Question>, StoreError> {
        let row: Option<QuestionRow> = sqlx::query_as(
            "SELECT id, question, answer, category, difficulty FROM questions WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Question::from))
    }

    async fn by_category(&self, category_id: i64) -> Result<Vec<Question>, StoreError> {
        // The column is TEXT, so the filter compares against the
        // stringified id (the canonical written form).
        let rows: Vec<QuestionRow> = sqlx::query_as(
            "SELECT id, question, answer, category, difficulty FROM questions \
             WHERE category = $1 ORDER BY id ASC",
        )
        .bind(category_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Question::from).collect())
    }

    async fn search_text(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        let pattern = format!("%{}%", term);
        let rows: Vec<QuestionRow> = sqlx::query_as(
            "SELECT id, question, answer, category, difficulty FROM questions \
             WHERE question ILIKE $1 ORDER BY id ASC",
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Question::from).collect())
    }

    async fn insert(&self, new: NewQuestion) -> Result<Question, StoreError> {
        let row: QuestionRow = sqlx::query_as(
            "INSERT INTO questions (question, answer, category, difficulty) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, question, answer, category, difficulty",
        )
        .bind(new.question)
        .bind(new.answer)
        .bind(new.category.map(|c| c.to_string()))
        .bind(new.difficulty)
        .fetch_one(&self.pool)
        .await?;

        Ok(Question::from(row))
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Postgres-backed category store.
#[derive(Clone)]
pub struct PgCategoryStore {
    pool: PgPool,
}

impl PgCategoryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryStore for PgCategoryStore {
    async fn all(&self) -> Result<Vec<Category>, StoreError> {
        let categories: Vec<Category> =
            sqlx::query_as("SELECT id, type AS label FROM categories ORDER BY id ASC")
                .fetch_all(&self.pool)
                .await?;

        Ok(categories)
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
