//! The state engine: a single reducer over the application state tree.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ transition ──→ AppState ──→ UI
//!    ↑                                    │
//!    └────────────────────────────────────┘
//! ```
//!
//! - `state.rs` — the tree: durable collections, draw sessions, UI markers
//! - `action.rs` — every way the tree can change
//! - `reducer.rs` — the pure transition function (invalid input is a no-op)
//! - `prune.rs` — repair pass keeping session state consistent with the
//!   durable collections

mod action;
mod prune;
mod reducer;
mod state;

pub use action::Action;
pub use prune::prune_domain;
pub use reducer::transition;
pub use state::{
    AppState, DomainState, GeneratorState, PersistedState, QuizEditorState, QuizPlayState,
    UiState,
};
