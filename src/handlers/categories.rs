// src/handlers/categories.rs

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde_json::json;

use crate::{error::AppError, service::QueryService};

/// Returns all categories as an id → label map, the shape the category
/// sidebar consumes as a lookup table.
pub async fn list_categories(
    State(service): State<QueryService>,
) -> Result<impl IntoResponse, AppError> {
    let categories = service.list_categories().await?;

    Ok(Json(json!({
        "success": true,
        "categories": categories,
    })))
}

/// Lists every question in one category, unpaginated.
pub async fn questions_by_category(
    State(service): State<QueryService>,
    Path(category_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let questions = service.questions_by_category(category_id).await?;

    Ok(Json(json!({
        "success": true,
        "category": category_id,
        "numOfQuestions": questions.len(),
        "questions": questions,
    })))
}
