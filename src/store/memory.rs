// src/store/memory.rs

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::models::category::Category;
use crate::models::question::{NewQuestion, Question};
use crate::store::{CategoryStore, QuestionStore, StoreError};

/// Internal record. The category reference is kept as text on purpose,
/// mirroring the production schema, so the normalization path gets
/// exercised without a database.
#[derive(Debug, Clone)]
struct StoredQuestion {
    question: String,
    answer: String,
    category: Option<String>,
    difficulty: i32,
}

impl StoredQuestion {
    fn to_question(&self, id: i64) -> Question {
        Question {
            id,
            question: self.question.clone(),
            answer: self.answer.clone(),
            category: self.category.as_deref().and_then(|c| c.trim().parse().ok()),
            difficulty: self.difficulty,
        }
    }
}

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    rows: BTreeMap<i64, StoredQuestion>,
}

/// In-memory question store for tests and local experimentation.
#[derive(Clone, Default)]
pub struct MemoryQuestionStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryQuestionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a row with a raw textual category reference, the way legacy
    /// data looks in the production table.
    pub fn seed_raw(
        &self,
        question: &str,
        answer: &str,
        category: Option<&str>,
        difficulty: i32,
    ) -> i64 {
        let mut inner = self.inner.lock().expect("memory store poisoned");
        inner.next_id += 1;
        let id = inner.next_id;
        inner.rows.insert(
            id,
            StoredQuestion {
                question: question.to_string(),
                answer: answer.to_string(),
                category: category.map(str::to_string),
                difficulty,
            },
        );
        id
    }
}

#[async_trait]
impl QuestionStore for MemoryQuestionStore {
    async fn all(&self) -> Result<Vec<Question>, StoreError> {
        let inner = self.inner.lock().expect("memory store poisoned");
        // BTreeMap iteration gives ascending ids for free.
        Ok(inner
            .rows
            .iter()
            .map(|(id, row)| row.to_question(*id))
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Question>, StoreError> {
        let inner = self.inner.lock().expect("memory store poisoned");
        Ok(inner.rows.get(&id).map(|row| row.to_question(id)))
    }

    async fn by_category(&self, category_id: i64) -> Result<Vec<Question>, StoreError> {
        let inner = self.inner.lock().expect("memory store poisoned");
        Ok(inner
            .rows
            .iter()
            .map(|(id, row)| row.to_question(*id))
            .filter(|q| q.category == Some(category_id))
            .collect())
    }

    async fn search_text(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        let needle = term.to_lowercase();
        let inner = self.inner.lock().expect("memory store poisoned");
        Ok(inner
            .rows
            .iter()
            .filter(|(_, row)| row.question.to_lowercase().contains(&needle))
            .map(|(id, row)| row.to_question(*id))
            .collect())
    }

    async fn insert(&self, new: NewQuestion) -> Result<Question, StoreError> {
        let mut inner = self.inner.lock().expect("memory store poisoned");
        inner.next_id += 1;
        let id = inner.next_id;
        let row = StoredQuestion {
            question: new.question,
            answer: new.answer,
            category: new.category.map(|c| c.to_string()),
            difficulty: new.difficulty,
        };
        let question = row.to_question(id);
        inner.rows.insert(id, row);
        Ok(question)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, StoreError> {
        let mut inner = self.inner.lock().expect("memory store poisoned");
        Ok(inner.rows.remove(&id).is_some())
    }
}

/// In-memory category store, seeded at construction.
#[derive(Clone, Default)]
pub struct MemoryCategoryStore {
    categories: Arc<Vec<Category>>,
}

impl MemoryCategoryStore {
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            categories: Arc::new(categories),
        }
    }

    /// The six categories the production seed migration ships.
    pub fn with_default_categories() -> Self {
        let labels = [
            "Science",
            "Art",
            "Geography",
            "History",
            "Entertainment",
            "Sports",
        ];
        Self::new(
            labels
                .iter()
                .enumerate()
                .map(|(i, label)| Category {
                    id: (i + 1) as i64,
                    label: label.to_string(),
                })
                .collect(),
        )
    }
}

#[async_trait]
impl CategoryStore for MemoryCategoryStore {
    async fn all(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self.categories.as_ref().clone())
    }

    async fn count(&self) -> Result<i64, StoreError> {
        Ok(self.categories.len() as i64)
    }
}
