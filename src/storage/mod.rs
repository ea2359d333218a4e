//! Key/value persistence, the stand-in for the browser's localStorage.
//!
//! A [`Storage`] backend offers atomic whole-value read/write per string
//! key and nothing more; multi-key consistency (quiz index vs. quiz
//! bodies) is the engine's job, not the backend's. Writes are best-effort:
//! backends log failures and swallow them, they never surface an error to
//! the caller.

mod file;
mod memory;
pub mod records;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Storage key for the student roster.
pub const STUDENTS_KEY: &str = "classkit.students";
/// Storage key for the quiz listing projection.
pub const QUIZ_INDEX_KEY: &str = "classkit.quiz-index";
/// Storage key for the breakout group snapshot.
pub const BREAKOUT_KEY: &str = "classkit.breakout";
/// Storage key for saved project lists.
pub const PROJECTS_KEY: &str = "classkit.projects";
/// Key prefix for per-quiz bodies; the full key is `classkit.quiz.<id>`.
pub const QUIZ_KEY_PREFIX: &str = "classkit.quiz.";

/// Per-quiz storage key.
pub fn quiz_key(id: &str) -> String {
    format!("{QUIZ_KEY_PREFIX}{id}")
}

/// Whole-value string key/value store.
pub trait Storage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
    /// All keys currently present, in no particular order.
    fn keys(&self) -> Vec<String>;
}
