//! Saved project lists.

use serde::{Deserialize, Serialize};

/// A named project with its member students and group assignment.
///
/// Independent persisted collection: editable after creation (add/remove
/// students, reassign between groups) without regenerating. Like breakout
/// snapshots, membership ids are not repaired on roster changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectList {
    pub id: String,
    pub name: String,
    pub project_type: String,
    pub description: String,
    pub student_ids: Vec<String>,
    pub groups: Vec<Vec<String>>,
    pub created_at: u64,
}
