//! Entity types shared by the engine and the persistence layer.
//!
//! Everything here is a plain serde-derived record: the durable subset is
//! written to storage verbatim, so these shapes double as the storage
//! schema. Identity is always an opaque string id assigned by the caller
//! (the `Store` uses UUID v4); the engine never mints ids itself.

mod breakout;
mod project;
mod quiz;
mod student;

pub use breakout::{generate_groups, BreakoutGroups};
pub use project::ProjectList;
pub use quiz::{Question, Quiz, QuizIndexEntry};
pub use student::{name_key, normalize_name, Student, StudentStatus};
