//! Shared helpers for the integration suite.

#![allow(dead_code)]

use classkit::storage::MemoryStorage;
use classkit::Store;

/// A hydrated store on in-memory storage with a fixed RNG seed.
pub fn make_store() -> Store<MemoryStorage> {
    let mut store = Store::seeded(MemoryStorage::new(), 0xC1A55);
    store.hydrate();
    store
}

pub fn add_students(store: &mut Store<MemoryStorage>, names: &[&str]) {
    for name in names {
        store.add_student(name);
    }
}

/// Id of the roster entry with the given (normalized) name.
pub fn student_id(store: &Store<MemoryStorage>, name: &str) -> String {
    store
        .state()
        .persisted
        .students
        .iter()
        .find(|s| s.name == name)
        .map(|s| s.id.clone())
        .unwrap_or_else(|| panic!("no student named {name}"))
}
