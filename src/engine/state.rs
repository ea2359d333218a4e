//! The application state tree.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{BreakoutGroups, ProjectList, Quiz, QuizIndexEntry, Student};

/// The durable subset of the state tree, written to storage as-is.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PersistedState {
    pub students: Vec<Student>,
    /// Listing projection, sorted by `created_at` descending. Its id set
    /// always equals the key set of `quizzes`.
    pub quiz_index: Vec<QuizIndexEntry>,
    pub quizzes: BTreeMap<String, Quiz>,
    pub breakout: Option<BreakoutGroups>,
    pub projects: Vec<ProjectList>,
}

/// No-repeat draw session for the student generator.
///
/// Not durable: rebuilt (pruned) against the roster after every roster
/// mutation. `used_student_ids` has set semantics; insertion order is kept
/// only because it costs nothing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeneratorState {
    pub used_student_ids: Vec<String>,
    pub current_student_id: Option<String>,
}

/// No-repeat draw session for quiz play.
///
/// Every id in here must resolve against the selected quiz's question list
/// or the roster; the prune pass re-establishes that after each mutation.
/// `answer_revealed` is true only while `current_question_id` is non-null.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QuizPlayState {
    pub selected_quiz_id: Option<String>,
    pub used_question_ids: Vec<String>,
    pub used_student_ids: Vec<String>,
    pub current_question_id: Option<String>,
    pub current_student_id: Option<String>,
    pub answer_revealed: bool,
}

/// Session state derived from the durable collections.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DomainState {
    pub generator: GeneratorState,
    pub quiz_play: QuizPlayState,
}

/// Lightweight editor markers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QuizEditorState {
    pub active_quiz_id: Option<String>,
    /// Unvalidated marker; question existence is the editor's concern.
    pub editing_question_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UiState {
    pub quiz_editor: QuizEditorState,
    /// False until the one-time storage load has been merged in.
    pub is_hydrated: bool,
}

/// The full tree: durable collections plus the session state derived from
/// them. All mutation goes through [`transition`](crate::engine::transition).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub persisted: PersistedState,
    pub domain: DomainState,
    pub ui: UiState,
}

impl AppState {
    /// Look up a student by id.
    pub fn student(&self, id: &str) -> Option<&Student> {
        self.persisted.students.iter().find(|s| s.id == id)
    }

    /// Ids of students eligible for draws.
    pub fn active_student_ids(&self) -> Vec<String> {
        self.persisted
            .students
            .iter()
            .filter(|s| s.is_active())
            .map(|s| s.id.clone())
            .collect()
    }
}
