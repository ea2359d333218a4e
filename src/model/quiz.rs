//! Quiz records and the lightweight listing projection.

use serde::{Deserialize, Serialize};

/// One prompt/answer pair. Owned by exactly one quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub answer: String,
}

/// A full quiz body, created/updated/deleted as a whole unit.
///
/// Question order is the display order; selection during play never
/// depends on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub id: String,
    pub title: String,
    pub questions: Vec<Question>,
    pub created_at: u64,
    pub updated_at: u64,
}

/// Listing projection of a quiz, kept in lock-step with the full bodies.
///
/// Stored as its own collection sorted by `created_at` descending so the
/// quiz list can render without loading any body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizIndexEntry {
    pub id: String,
    pub title: String,
    pub created_at: u64,
}

impl QuizIndexEntry {
    pub fn of(quiz: &Quiz) -> Self {
        Self {
            id: quiz.id.clone(),
            title: quiz.title.clone(),
            created_at: quiz.created_at,
        }
    }
}
