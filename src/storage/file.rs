//! File-backed storage: one file per key under a data directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;

use super::Storage;

/// Stores each key as a file named after the key inside `root`.
///
/// Keys are dot-separated identifiers (see the constants in
/// [`crate::storage`]) and double as file names verbatim. Write and delete
/// failures are logged and swallowed — persistence is best-effort by
/// contract and never disturbs the in-memory state.
#[derive(Debug)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Open (creating if needed) a storage directory.
    pub fn new(root: impl Into<PathBuf>) -> io::Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Open the platform-default data directory.
    ///
    /// Uses `<data_dir>/classkit` via [`dirs::data_dir`], falling back to
    /// the current directory when the platform offers none.
    pub fn open_default() -> io::Result<Self> {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::new(base.join("classkit"))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Some(value),
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            Err(err) => {
                warn!(key, %err, "failed to read storage entry");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Err(err) = fs::write(self.path_for(key), value) {
            warn!(key, %err, "failed to write storage entry");
        }
    }

    fn remove(&mut self, key: &str) {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => warn!(key, %err, "failed to remove storage entry"),
        }
    }

    fn keys(&self) -> Vec<String> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(%err, "failed to list storage directory");
                return Vec::new();
            }
        };
        entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect()
    }
}
