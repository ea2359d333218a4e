//! The transition function.
//!
//! One pure function maps `(state, action)` to the next state. It never
//! panics: invalid input (empty names, duplicate keys, unknown ids, empty
//! draw pools) is a silent no-op that returns the input state unchanged.
//! Callers that care detect "nothing happened" by comparing the relevant
//! slice before and after — UI validation copy depends on that contract.
//!
//! Side effects stay outside: persistence is handled by the caller around
//! the dispatch, and randomness comes in through the injected RNG so the
//! function is deterministic under a seeded generator.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::engine::action::Action;
use crate::engine::prune::prune_domain;
use crate::engine::state::{AppState, GeneratorState, QuizPlayState};
use crate::model::{
    name_key, normalize_name, ProjectList, Question, Quiz, QuizIndexEntry, Student, StudentStatus,
};

/// Apply `action` to `state`, producing the next state.
pub fn transition<R: Rng>(state: AppState, action: Action, rng: &mut R) -> AppState {
    match action {
        Action::AddStudent { id, name, created_at } => add_student(state, id, name, created_at),
        Action::UpdateStudent { id, name } => update_student(state, &id, name),
        Action::ToggleStudentExcluded { id } => toggle_student_excluded(state, &id),
        Action::DeleteStudent { id } => delete_student(state, &id),
        Action::ClearStudents => clear_students(state),

        Action::CreateQuiz { id, title, questions, created_at } => {
            create_quiz(state, id, title, questions, created_at)
        }
        Action::UpdateQuiz { id, title, questions, updated_at } => {
            update_quiz(state, &id, title, questions, updated_at)
        }
        Action::DeleteQuiz { id } => delete_quiz(state, &id),
        Action::SelectQuizForEditor { id } => select_quiz_for_editor(state, id),
        Action::SetEditingQuestion { id } => set_editing_question(state, id),

        Action::SelectQuizForPlay { id } => select_quiz_for_play(state, id),
        Action::DrawQuizPair => draw_quiz_pair(state, rng),
        Action::RevealAnswer => reveal_answer(state),
        Action::ResetQuizPlay => reset_quiz_play(state),

        Action::DrawStudent => draw_student(state, rng),
        Action::ResetGenerator => reset_generator(state),

        Action::SetBreakoutGroups { groups } => {
            let mut state = state;
            state.persisted.breakout = Some(groups);
            state
        }
        Action::ClearBreakoutGroups => {
            let mut state = state;
            state.persisted.breakout = None;
            state
        }

        Action::CreateProject {
            id,
            name,
            project_type,
            description,
            student_ids,
            groups,
            created_at,
        } => create_project(state, id, name, project_type, description, student_ids, groups, created_at),
        Action::UpdateProject { id, name, description, student_ids, groups } => {
            update_project(state, &id, name, description, student_ids, groups)
        }
        Action::DeleteProject { id } => {
            let mut state = state;
            state.persisted.projects.retain(|p| p.id != id);
            state
        }

        Action::HydratePersisted { persisted } => {
            let mut state = state;
            state.persisted = persisted;
            state.ui.is_hydrated = true;
            repair(state)
        }
    }
}

/// Re-derive session state after a durable-state mutation.
fn repair(mut state: AppState) -> AppState {
    let domain = std::mem::take(&mut state.domain);
    state.domain = prune_domain(&state.persisted, domain);
    state
}

// -- Roster -------------------------------------------------------------

fn add_student(mut state: AppState, id: String, name: String, created_at: u64) -> AppState {
    let name = normalize_name(&name);
    if name.is_empty() {
        return state;
    }
    let key = name_key(&name);
    if state.persisted.students.iter().any(|s| name_key(&s.name) == key) {
        return state;
    }
    state.persisted.students.push(Student {
        id,
        name,
        status: StudentStatus::Active,
        created_at,
    });
    repair(state)
}

fn update_student(mut state: AppState, id: &str, name: String) -> AppState {
    let name = normalize_name(&name);
    if name.is_empty() {
        return state;
    }
    let key = name_key(&name);
    if state
        .persisted
        .students
        .iter()
        .any(|s| s.id != id && name_key(&s.name) == key)
    {
        return state;
    }
    let Some(student) = state.persisted.students.iter_mut().find(|s| s.id == id) else {
        return state;
    };
    student.name = name;
    repair(state)
}

fn toggle_student_excluded(mut state: AppState, id: &str) -> AppState {
    let Some(student) = state.persisted.students.iter_mut().find(|s| s.id == id) else {
        return state;
    };
    student.status = match student.status {
        StudentStatus::Active => StudentStatus::Excluded,
        StudentStatus::Excluded => StudentStatus::Active,
    };
    // Exclusion changes draw eligibility, not roster presence, so the
    // used histories survive this repair untouched.
    repair(state)
}

fn delete_student(mut state: AppState, id: &str) -> AppState {
    state.persisted.students.retain(|s| s.id != id);
    repair(state)
}

fn clear_students(mut state: AppState) -> AppState {
    state.persisted.students.clear();
    repair(state)
}

// -- Quiz editing -------------------------------------------------------

/// Stable sort, newest first; equal timestamps keep insertion order.
fn sort_quiz_index(index: &mut [QuizIndexEntry]) {
    index.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

fn create_quiz(
    mut state: AppState,
    id: String,
    title: String,
    questions: Vec<Question>,
    created_at: u64,
) -> AppState {
    let title = title.trim().to_owned();
    if title.is_empty() {
        return state;
    }
    let quiz = Quiz {
        id: id.clone(),
        title,
        questions,
        created_at,
        updated_at: created_at,
    };
    state.persisted.quiz_index.push(QuizIndexEntry::of(&quiz));
    sort_quiz_index(&mut state.persisted.quiz_index);
    state.persisted.quizzes.insert(id.clone(), quiz);
    state.ui.quiz_editor.active_quiz_id = Some(id);
    state.ui.quiz_editor.editing_question_id = None;
    repair(state)
}

fn update_quiz(
    mut state: AppState,
    id: &str,
    title: String,
    questions: Vec<Question>,
    updated_at: u64,
) -> AppState {
    let title = title.trim().to_owned();
    if title.is_empty() {
        return state;
    }
    let Some(quiz) = state.persisted.quizzes.get_mut(id) else {
        return state;
    };
    quiz.title = title.clone();
    quiz.questions = questions;
    quiz.updated_at = updated_at;
    if let Some(entry) = state.persisted.quiz_index.iter_mut().find(|e| e.id == id) {
        entry.title = title;
    }
    sort_quiz_index(&mut state.persisted.quiz_index);
    repair(state)
}

fn delete_quiz(mut state: AppState, id: &str) -> AppState {
    state.persisted.quizzes.remove(id);
    state.persisted.quiz_index.retain(|e| e.id != id);
    if state.ui.quiz_editor.active_quiz_id.as_deref() == Some(id) {
        state.ui.quiz_editor.active_quiz_id = None;
        state.ui.quiz_editor.editing_question_id = None;
    }
    repair(state)
}

fn select_quiz_for_editor(mut state: AppState, id: Option<String>) -> AppState {
    state.ui.quiz_editor.active_quiz_id =
        id.filter(|id| state.persisted.quizzes.contains_key(id));
    state.ui.quiz_editor.editing_question_id = None;
    state
}

fn set_editing_question(mut state: AppState, id: Option<String>) -> AppState {
    state.ui.quiz_editor.editing_question_id = id;
    state
}

// -- Quiz play ----------------------------------------------------------

fn select_quiz_for_play(mut state: AppState, id: Option<String>) -> AppState {
    // Hard reset: selecting a quiz (even the same one) restarts the round.
    state.domain.quiz_play = QuizPlayState {
        selected_quiz_id: id.filter(|id| state.persisted.quizzes.contains_key(id)),
        ..Default::default()
    };
    state
}

fn draw_quiz_pair<R: Rng>(mut state: AppState, rng: &mut R) -> AppState {
    let play = &state.domain.quiz_play;
    let Some(quiz) = play
        .selected_quiz_id
        .as_ref()
        .and_then(|id| state.persisted.quizzes.get(id))
    else {
        return state;
    };

    let available_questions: Vec<String> = quiz
        .questions
        .iter()
        .map(|q| q.id.clone())
        .filter(|id| !play.used_question_ids.contains(id))
        .collect();
    let available_students: Vec<String> = state
        .active_student_ids()
        .into_iter()
        .filter(|id| !play.used_student_ids.contains(id))
        .collect();

    // Either pool exhausted: no auto-reset, the caller restarts the round.
    let (Some(question_id), Some(student_id)) = (
        available_questions.choose(rng).cloned(),
        available_students.choose(rng).cloned(),
    ) else {
        return state;
    };

    let play = &mut state.domain.quiz_play;
    play.used_question_ids.push(question_id.clone());
    play.used_student_ids.push(student_id.clone());
    play.current_question_id = Some(question_id);
    play.current_student_id = Some(student_id);
    play.answer_revealed = false;
    state
}

fn reveal_answer(mut state: AppState) -> AppState {
    if state.domain.quiz_play.current_question_id.is_some() {
        state.domain.quiz_play.answer_revealed = true;
    }
    state
}

fn reset_quiz_play(mut state: AppState) -> AppState {
    // New round, same quiz: only the selection survives.
    state.domain.quiz_play = QuizPlayState {
        selected_quiz_id: state.domain.quiz_play.selected_quiz_id.take(),
        ..Default::default()
    };
    state
}

// -- Student generator --------------------------------------------------

fn draw_student<R: Rng>(mut state: AppState, rng: &mut R) -> AppState {
    let pool: Vec<String> = state
        .active_student_ids()
        .into_iter()
        .filter(|id| !state.domain.generator.used_student_ids.contains(id))
        .collect();
    let Some(id) = pool.choose(rng).cloned() else {
        return state;
    };
    state.domain.generator.used_student_ids.push(id.clone());
    state.domain.generator.current_student_id = Some(id);
    state
}

fn reset_generator(mut state: AppState) -> AppState {
    state.domain.generator = GeneratorState::default();
    state
}

// -- Projects -------------------------------------------------------------

#[allow(clippy::too_many_arguments)]
fn create_project(
    mut state: AppState,
    id: String,
    name: String,
    project_type: String,
    description: String,
    student_ids: Vec<String>,
    groups: Vec<Vec<String>>,
    created_at: u64,
) -> AppState {
    let name = name.trim().to_owned();
    if name.is_empty() {
        return state;
    }
    state.persisted.projects.push(ProjectList {
        id,
        name,
        project_type,
        description,
        student_ids,
        groups,
        created_at,
    });
    state
}

fn update_project(
    mut state: AppState,
    id: &str,
    name: String,
    description: String,
    student_ids: Vec<String>,
    groups: Vec<Vec<String>>,
) -> AppState {
    let name = name.trim().to_owned();
    if name.is_empty() {
        return state;
    }
    let Some(project) = state.persisted.projects.iter_mut().find(|p| p.id == id) else {
        return state;
    };
    project.name = name;
    project.description = description;
    project.student_ids = student_ids;
    project.groups = groups;
    state
}
