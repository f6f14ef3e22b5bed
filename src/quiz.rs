// src/quiz.rs

use std::collections::HashSet;

use rand::Rng;

use crate::error::AppError;
use crate::models::question::Question;

/// Outcome of a quiz draw.
///
/// `Exhausted` is a normal terminal state: every question in the pool has
/// already been served this round. It is not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Draw {
    Found(Question),
    Exhausted,
}

/// Which questions are eligible for a quiz round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategorySelector {
    All,
    Category(i64),
}

impl CategorySelector {
    /// Maps the wire-level category id onto a selector. Id 0 is the
    /// conventional sentinel for "all categories".
    pub fn from_id(id: i64) -> Result<Self, AppError> {
        match id {
            0 => Ok(CategorySelector::All),
            id if id > 0 => Ok(CategorySelector::Category(id)),
            _ => Err(AppError::BadRequest(
                "quiz category id must be 0 (all) or a positive integer".to_string(),
            )),
        }
    }
}

/// Picks a random question from `pool` that is not in `served`.
///
/// The candidate set is computed up front, so a call costs O(|pool|) and
/// always terminates; when nothing unseen remains the result is
/// `Draw::Exhausted` rather than a retry loop that never ends.
pub fn next_question(pool: Vec<Question>, served: &HashSet<i64>) -> Draw {
    next_question_with(&mut rand::thread_rng(), pool, served)
}

/// Same as [`next_question`], with a caller-supplied random source.
/// Every unseen candidate has equal selection probability.
pub fn next_question_with<R>(rng: &mut R, pool: Vec<Question>, served: &HashSet<i64>) -> Draw
where
    R: Rng,
{
    let mut candidates: Vec<Question> = pool
        .into_iter()
        .filter(|q| !served.contains(&q.id))
        .collect();

    if candidates.is_empty() {
        return Draw::Exhausted;
    }

    let idx = rng.gen_range(0..candidates.len());
    Draw::Found(candidates.swap_remove(idx))
}
