// src/handlers/questions.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;

use crate::{error::AppError, models::question::CreateQuestionRequest, service::QueryService};

/// Query parameters for the question listing.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub page: Option<usize>,
}

/// Lists questions, ten per page, with the collection counts the list view
/// needs for its pagination footer and category sidebar.
pub async fn list_questions(
    State(service): State<QueryService>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = service.list_questions(params.page.unwrap_or(1)).await?;

    Ok(Json(json!({
        "success": true,
        "questions": page.questions,
        "numOfQuestions": page.total,
        "current_category": serde_json::Value::Null,
        "categories": page.categories,
    })))
}

/// Creates a new question from the add-question form.
pub async fn create_question(
    State(service): State<QueryService>,
    Json(payload): Json<CreateQuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (question, total) = service.create_question(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "question": question,
            "numOfQuestions": total,
        })),
    ))
}

/// Deletes a question by id and reports the new total.
pub async fn delete_question(
    State(service): State<QueryService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let (deleted_id, remaining) = service.delete_question(id).await?;

    Ok(Json(json!({
        "success": true,
        "question_id": deleted_id,
        "numOfQuestions": remaining,
    })))
}

/// Body for the question search endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// Returns every question whose text contains the search term,
/// case-insensitively. A missing term is a validation error, not an
/// implicit match-all.
pub async fn search_questions(
    State(service): State<QueryService>,
    Json(payload): Json<SearchRequest>,
) -> Result<impl IntoResponse, AppError> {
    let term = payload
        .search_term
        .as_deref()
        .ok_or_else(|| AppError::BadRequest("searchTerm is required".to_string()))?;

    let questions = service.search(term).await?;

    Ok(Json(json!({
        "success": true,
        "total_questions": questions.len(),
        "questions": questions,
    })))
}
