//! Student records and name normalization.

use serde::{Deserialize, Serialize};

/// Whether a student participates in random draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudentStatus {
    /// Eligible for generator and quiz-play draws.
    Active,
    /// Kept on the roster but skipped by every draw.
    Excluded,
}

/// One roster entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Opaque unique id.
    pub id: String,
    /// Display name, stored in normalized form.
    pub name: String,
    pub status: StudentStatus,
    /// Epoch milliseconds at creation.
    pub created_at: u64,
}

impl Student {
    pub fn is_active(&self) -> bool {
        self.status == StudentStatus::Active
    }
}

/// Collapse internal whitespace runs to a single space and trim the ends.
pub fn normalize_name(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Uniqueness key for a student name: case-insensitive, whitespace-normalized.
///
/// Two names with the same key are the same student as far as the roster
/// is concerned.
pub fn name_key(raw: &str) -> String {
    normalize_name(raw).to_lowercase()
}
