// src/handlers/quizzes.rs

use std::collections::HashSet;

use axum::{Json, extract::State, response::IntoResponse};
use serde::Deserialize;
use serde_json::json;

use crate::{
    error::AppError,
    models::question::deserialize_lenient_id,
    quiz::{CategorySelector, Draw},
    service::QueryService,
};

/// Body for a quiz draw. The caller owns the round state and sends the
/// already-served question ids on every call.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<i64>,

    pub quiz_category: Option<QuizCategory>,
}

/// Category selector as the frontend sends it. Id 0 means all categories;
/// the id arrives as an integer or a numeric string depending on the
/// client.
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    #[serde(default, deserialize_with = "deserialize_lenient_id")]
    pub id: Option<i64>,
}

/// Draws the next unseen question for the round.
///
/// When the pool is exhausted the response is still a success, with a null
/// `question`; the frontend ends the round on that.
pub async fn play_quiz(
    State(service): State<QueryService>,
    Json(payload): Json<QuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    let category_id = payload
        .quiz_category
        .as_ref()
        .and_then(|c| c.id)
        .ok_or_else(|| {
            AppError::BadRequest("quiz_category with a numeric id is required".to_string())
        })?;

    let selector = CategorySelector::from_id(category_id)?;
    let served: HashSet<i64> = payload.previous_questions.into_iter().collect();

    let body = match service.draw_question(selector, &served).await? {
        Draw::Found(question) => json!({
            "success": true,
            "question": question,
        }),
        Draw::Exhausted => json!({
            "success": true,
            "question": serde_json::Value::Null,
        }),
    };

    Ok(Json(body))
}
