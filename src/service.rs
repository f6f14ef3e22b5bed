// src/service.rs

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use validator::Validate;

use crate::error::AppError;
use crate::models::question::{CreateQuestionRequest, NewQuestion, Question};
use crate::paginate::{QUESTIONS_PER_PAGE, paginate};
use crate::quiz::{self, CategorySelector, Draw};
use crate::store::{CategoryStore, QuestionStore};
use crate::utils::html::clean_text;

/// One page of the question listing.
#[derive(Debug)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    /// Size of the full, unpaginated result set.
    pub total: usize,
    /// Number of known categories, for the client's sidebar.
    pub categories: i64,
}

/// The query/selection engine behind the HTTP surface.
///
/// Holds the store collaborators by explicit injection so tests can swap in
/// the in-memory implementations. Stateless apart from what the stores
/// persist; quiz rounds pass their served-set in on every call.
#[derive(Clone)]
pub struct QueryService {
    questions: Arc<dyn QuestionStore>,
    categories: Arc<dyn CategoryStore>,
}

impl QueryService {
    pub fn new(questions: Arc<dyn QuestionStore>, categories: Arc<dyn CategoryStore>) -> Self {
        Self {
            questions,
            categories,
        }
    }

    /// Lists questions in ascending-id order, ten per page.
    ///
    /// An empty slice is reported as not-found, whether the page is past
    /// the end or the store is empty altogether. Clients page off
    /// `total`, the unpaginated count.
    pub async fn list_questions(&self, page: usize) -> Result<QuestionPage, AppError> {
        let all = self.questions.all().await?;
        let slice = paginate(&all, page, QUESTIONS_PER_PAGE);

        if slice.is_empty() {
            return Err(AppError::NotFound(
                "no questions on the requested page".to_string(),
            ));
        }

        let questions = slice.to_vec();
        let categories = self.categories.count().await?;

        Ok(QuestionPage {
            questions,
            total: all.len(),
            categories,
        })
    }

    /// Full category enumeration as an id → label map.
    pub async fn list_categories(&self) -> Result<BTreeMap<i64, String>, AppError> {
        let categories = self.categories.all().await?;
        Ok(categories.into_iter().map(|c| (c.id, c.label)).collect())
    }

    /// All questions in one category, unpaginated.
    ///
    /// A category with no questions, including an id nobody has ever used,
    /// yields an empty set rather than an error.
    pub async fn questions_by_category(&self, category_id: i64) -> Result<Vec<Question>, AppError> {
        Ok(self.questions.by_category(category_id).await?)
    }

    /// Case-insensitive substring search over question text.
    pub async fn search(&self, term: &str) -> Result<Vec<Question>, AppError> {
        let term = term.trim();
        if term.is_empty() {
            return Err(AppError::BadRequest(
                "searchTerm must not be empty".to_string(),
            ));
        }
        Ok(self.questions.search_text(term).await?)
    }

    /// Validates and inserts a new question.
    ///
    /// Returns the created record and the new total count. A referenced
    /// category must already exist; the reference itself stays optional.
    pub async fn create_question(
        &self,
        payload: CreateQuestionRequest,
    ) -> Result<(Question, usize), AppError> {
        if let Err(validation_errors) = payload.validate() {
            return Err(AppError::BadRequest(validation_errors.to_string()));
        }

        // `required` has fired already, so these are always Some.
        let question = clean_text(payload.question.as_deref().unwrap_or_default());
        let answer = clean_text(payload.answer.as_deref().unwrap_or_default());

        if question.trim().is_empty() || answer.trim().is_empty() {
            return Err(AppError::BadRequest(
                "question and answer text must not be blank".to_string(),
            ));
        }

        if let Some(category_id) = payload.category {
            let known = self.categories.all().await?;
            if !known.iter().any(|c| c.id == category_id) {
                return Err(AppError::BadRequest(format!(
                    "category {} does not exist",
                    category_id
                )));
            }
        }

        let created = self
            .questions
            .insert(NewQuestion {
                question,
                answer,
                category: payload.category,
                difficulty: payload.difficulty,
            })
            .await?;

        tracing::info!(id = created.id, "question created");

        let total = self.questions.all().await?.len();
        Ok((created, total))
    }

    /// Hard-deletes a question.
    ///
    /// A missing target is not-found, which keeps "already gone" apart from
    /// a delete that existed at lookup but vanished before removal.
    pub async fn delete_question(&self, id: i64) -> Result<(i64, usize), AppError> {
        self.questions
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("question {} not found", id)))?;

        let deleted = self.questions.delete_by_id(id).await?;
        if !deleted {
            return Err(AppError::Unprocessable(format!(
                "question {} was removed concurrently",
                id
            )));
        }

        tracing::info!(id, "question deleted");

        let remaining = self.questions.all().await?.len();
        Ok((id, remaining))
    }

    /// Draws the next unseen question for a quiz round.
    pub async fn draw_question(
        &self,
        selector: CategorySelector,
        served: &HashSet<i64>,
    ) -> Result<Draw, AppError> {
        let pool = match selector {
            CategorySelector::All => self.questions.all().await?,
            CategorySelector::Category(id) => self.questions.by_category(id).await?,
        };

        Ok(quiz::next_question(pool, served))
    }
}
