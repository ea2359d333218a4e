//! Schema-validating import parsing for quizzes and rosters.
//!
//! Import payloads arrive as untrusted JSON text. These parsers validate
//! the shape explicitly and return a tagged result; nothing here panics or
//! lets a parse error escape as anything but [`ImportError`]. Imported
//! records carry no ids — the editor assigns them when the import is
//! committed to the store.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("import payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("import payload has the wrong shape: {0}")]
    Shape(String),
}

/// A quiz as found in an import file, before ids are assigned.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuizImport {
    pub title: String,
    pub questions: Vec<QuestionImport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuestionImport {
    pub prompt: String,
    pub answer: String,
}

/// Parse a quiz import: an object with a non-empty `title` and a non-empty
/// `questions` array of `{ prompt, answer }` string pairs.
pub fn parse_quiz_import(raw: &str) -> Result<QuizImport, ImportError> {
    let quiz: QuizImport = serde_json::from_str(raw)?;
    if quiz.title.trim().is_empty() {
        return Err(ImportError::Shape("quiz title is empty".into()));
    }
    if quiz.questions.is_empty() {
        return Err(ImportError::Shape("quiz has no questions".into()));
    }
    if let Some(i) = quiz
        .questions
        .iter()
        .position(|q| q.prompt.trim().is_empty())
    {
        return Err(ImportError::Shape(format!("question {i} has an empty prompt")));
    }
    Ok(quiz)
}

/// Parse a roster import: an array of non-empty name strings.
///
/// Names are returned raw; normalization and duplicate rejection happen in
/// the engine when each name is added.
pub fn parse_roster_import(raw: &str) -> Result<Vec<String>, ImportError> {
    let names: Vec<String> = serde_json::from_str(raw)?;
    if names.iter().any(|n| n.trim().is_empty()) {
        return Err(ImportError::Shape("roster contains an empty name".into()));
    }
    Ok(names)
}
