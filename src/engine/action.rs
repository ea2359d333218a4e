//! Actions dispatched to the transition function.

use crate::engine::state::PersistedState;
use crate::model::{BreakoutGroups, Question};

/// Every way the state tree can change.
///
/// Creation actions carry their fresh id and timestamp; the dispatcher
/// (the `Store`) assigns both, so the reducer stays deterministic apart
/// from the injected RNG used by the draw actions.
#[derive(Debug, Clone)]
pub enum Action {
    // -- Roster ---------------------------------------------------------
    AddStudent {
        id: String,
        name: String,
        created_at: u64,
    },
    UpdateStudent {
        id: String,
        name: String,
    },
    ToggleStudentExcluded {
        id: String,
    },
    DeleteStudent {
        id: String,
    },
    ClearStudents,

    // -- Quiz editing ---------------------------------------------------
    CreateQuiz {
        id: String,
        title: String,
        questions: Vec<Question>,
        created_at: u64,
    },
    UpdateQuiz {
        id: String,
        title: String,
        questions: Vec<Question>,
        updated_at: u64,
    },
    DeleteQuiz {
        id: String,
    },
    SelectQuizForEditor {
        id: Option<String>,
    },
    SetEditingQuestion {
        id: Option<String>,
    },

    // -- Quiz play ------------------------------------------------------
    SelectQuizForPlay {
        id: Option<String>,
    },
    DrawQuizPair,
    RevealAnswer,
    ResetQuizPlay,

    // -- Student generator ----------------------------------------------
    DrawStudent,
    ResetGenerator,

    // -- Breakout groups --------------------------------------------------
    SetBreakoutGroups {
        groups: BreakoutGroups,
    },
    ClearBreakoutGroups,

    // -- Projects ---------------------------------------------------------
    CreateProject {
        id: String,
        name: String,
        project_type: String,
        description: String,
        student_ids: Vec<String>,
        groups: Vec<Vec<String>>,
        created_at: u64,
    },
    UpdateProject {
        id: String,
        name: String,
        description: String,
        student_ids: Vec<String>,
        groups: Vec<Vec<String>>,
    },
    DeleteProject {
        id: String,
    },

    // -- Hydration --------------------------------------------------------
    /// Wholesale replacement of the durable subset with data loaded from
    /// storage. The only action carrying externally-sourced data.
    HydratePersisted {
        persisted: PersistedState,
    },
}
