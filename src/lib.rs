//! classkit — classroom roster, quiz, and grouping state engine.
//!
//! A reducer-driven state container for a classroom productivity tool:
//! manage a student roster, draw students at random without repeats, build
//! and run quizzes, form breakout groups, and save project lists. All data
//! persists through a pluggable key/value [`storage`] backend; there is no
//! server and no multi-client coordination.
//!
//! # Data flow
//!
//! ```text
//! Storage ──→ Store::hydrate ──→ AppState
//!                                   │  reads
//! dispatch(Action) ──→ transition ──┤
//!         ▲                         │  persisted diff
//!         └── UI                    └──→ Storage
//! ```
//!
//! The [`engine`] is pure: every mutation is one call to
//! [`engine::transition`], invalid input is a silent no-op, and a repair
//! pass keeps session state (draw histories, play session) consistent with
//! the durable collections. The [`store::Store`] wires the engine to a
//! storage backend: hydrate once, persist changed slices after every
//! dispatch.

pub mod engine;
pub mod import;
pub mod model;
pub mod storage;
pub mod store;

pub use engine::{transition, Action, AppState};
pub use store::{SharedStore, Store};
