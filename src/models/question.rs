// src/models/question.rs

use serde::{Deserialize, Deserializer, Serialize, de};
use validator::Validate;

/// A trivia question as exposed by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,

    /// The question text shown to the player.
    pub question: String,

    /// The accepted answer text.
    pub answer: String,

    /// Reference into the category set. Nullable; normalized to an integer
    /// even though older rows may carry it as text.
    pub category: Option<i64>,

    /// Difficulty rating, 0 (unrated) through 5.
    pub difficulty: i32,
}

/// Field set for inserting a question. The store assigns the id.
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: Option<i64>,
    pub difficulty: i32,
}

/// DTO for creating a new question.
///
/// `question` and `answer` are required and must be non-empty; a missing
/// field is a validation failure, not a routing one. `difficulty` defaults
/// to 0 when omitted. `category` is optional and accepted as an integer or
/// a numeric string, since existing clients send both.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(
        required(message = "question text is required"),
        length(min = 1, message = "question text must not be empty")
    )]
    pub question: Option<String>,

    #[validate(
        required(message = "answer text is required"),
        length(min = 1, message = "answer text must not be empty")
    )]
    pub answer: Option<String>,

    #[serde(default)]
    #[validate(range(min = 0, max = 5, message = "difficulty must be between 0 and 5"))]
    pub difficulty: i32,

    #[serde(default, deserialize_with = "deserialize_lenient_id")]
    pub category: Option<i64>,
}

/// Accepts a category identifier as a JSON integer, a numeric string, or
/// null. Blank strings count as null. Anything else is rejected.
pub fn deserialize_lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::Number(n)) => match n.as_i64() {
            Some(id) => Ok(Some(id)),
            None => Err(de::Error::custom("category id must be an integer")),
        },
        Some(serde_json::Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<i64>()
                .map(Some)
                .map_err(|_| de::Error::custom("category id must be an integer"))
        }
        Some(_) => Err(de::Error::custom("category id must be an integer")),
    }
}
