//! Typed record (de)serialization over a [`Storage`] backend.
//!
//! Loading never fails: corrupt JSON yields empty collections, and array
//! collections are validated per element so one malformed record does not
//! take the rest of the collection down with it. Every dropped record is
//! logged.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::engine::PersistedState;
use crate::model::{BreakoutGroups, ProjectList, Quiz, QuizIndexEntry, Student};
use crate::storage::{
    quiz_key, Storage, BREAKOUT_KEY, PROJECTS_KEY, QUIZ_INDEX_KEY, QUIZ_KEY_PREFIX, STUDENTS_KEY,
};

/// Load the durable state tree, dropping whatever does not parse.
pub fn load_persisted_state(storage: &impl Storage) -> PersistedState {
    let students: Vec<Student> = load_array(storage, STUDENTS_KEY);
    let quiz_index: Vec<QuizIndexEntry> = load_array(storage, QUIZ_INDEX_KEY);
    let projects: Vec<ProjectList> = load_array(storage, PROJECTS_KEY);
    let breakout: Option<BreakoutGroups> = load_value(storage, BREAKOUT_KEY);

    let mut quizzes = std::collections::BTreeMap::new();
    for key in storage.keys() {
        let Some(id) = key.strip_prefix(QUIZ_KEY_PREFIX) else {
            continue;
        };
        match load_value::<Quiz>(storage, &key) {
            Some(quiz) if quiz.id == id => {
                quizzes.insert(quiz.id.clone(), quiz);
            }
            Some(quiz) => {
                warn!(%key, quiz_id = %quiz.id, "quiz body id does not match its key, dropped");
            }
            None => {}
        }
    }

    debug!(
        students = students.len(),
        quizzes = quizzes.len(),
        projects = projects.len(),
        "loaded persisted state"
    );
    PersistedState {
        students,
        quiz_index,
        quizzes,
        breakout,
        projects,
    }
}

/// Parse a stored JSON array element by element, keeping the valid entries.
fn load_array<T: DeserializeOwned>(storage: &impl Storage, key: &str) -> Vec<T> {
    let Some(raw) = storage.get(key) else {
        return Vec::new();
    };
    let values: Vec<Value> = match serde_json::from_str(&raw) {
        Ok(Value::Array(values)) => values,
        Ok(_) => {
            warn!(key, "stored value is not an array, discarded");
            return Vec::new();
        }
        Err(err) => {
            warn!(key, %err, "stored value is not valid JSON, discarded");
            return Vec::new();
        }
    };
    values
        .into_iter()
        .filter_map(|value| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!(key, %err, "dropped malformed record");
                None
            }
        })
        .collect()
}

fn load_value<T: DeserializeOwned>(storage: &impl Storage, key: &str) -> Option<T> {
    let raw = storage.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(key, %err, "stored value is malformed, discarded");
            None
        }
    }
}

fn save_json<T: Serialize + ?Sized>(storage: &mut impl Storage, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => storage.set(key, &json),
        Err(err) => warn!(key, %err, "failed to serialize record"),
    }
}

pub fn save_students(storage: &mut impl Storage, students: &[Student]) {
    save_json(storage, STUDENTS_KEY, students);
}

pub fn save_quiz_index(storage: &mut impl Storage, index: &[QuizIndexEntry]) {
    save_json(storage, QUIZ_INDEX_KEY, index);
}

pub fn save_quiz(storage: &mut impl Storage, quiz: &Quiz) {
    save_json(storage, &quiz_key(&quiz.id), quiz);
}

pub fn remove_quiz(storage: &mut impl Storage, id: &str) {
    storage.remove(&quiz_key(id));
}

pub fn save_projects(storage: &mut impl Storage, projects: &[ProjectList]) {
    save_json(storage, PROJECTS_KEY, projects);
}

/// Persist or clear the breakout snapshot.
pub fn save_breakout(storage: &mut impl Storage, breakout: Option<&BreakoutGroups>) {
    match breakout {
        Some(groups) => save_json(storage, BREAKOUT_KEY, groups),
        None => storage.remove(BREAKOUT_KEY),
    }
}
