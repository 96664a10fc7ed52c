//! Attempt persistence
//!
//! The engine saves each accepted attempt list under its seed and reloads it
//! when the same seed is played again. Stores are best-effort: the engine
//! logs and ignores write failures.

use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to persist attempts
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("attempt store I/O failed for {path}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("attempt store {path} is not valid JSON")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Key-value store of attempt lists, keyed by seed
pub trait AttemptStore {
    /// Previously saved attempts for `seed`, if any
    fn get(&self, seed: &str) -> Option<Vec<String>>;

    /// Save the attempts for `seed`, replacing any previous list
    ///
    /// # Errors
    ///
    /// Returns `StoreError` when the backing storage cannot be written.
    fn set(&mut self, seed: &str, attempts: &[String]) -> Result<(), StoreError>;
}

impl<S: AttemptStore + ?Sized> AttemptStore for &mut S {
    fn get(&self, seed: &str) -> Option<Vec<String>> {
        (**self).get(seed)
    }

    fn set(&mut self, seed: &str, attempts: &[String]) -> Result<(), StoreError> {
        (**self).set(seed, attempts)
    }
}

/// In-process store
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: FxHashMap<String, Vec<String>>,
    writes: usize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate attempts for a seed
    #[must_use]
    pub fn with_attempts(mut self, seed: &str, attempts: &[&str]) -> Self {
        self.entries.insert(
            seed.to_string(),
            attempts.iter().map(ToString::to_string).collect(),
        );
        self
    }

    /// Number of successful `set` calls
    #[must_use]
    pub const fn writes(&self) -> usize {
        self.writes
    }
}

impl AttemptStore for MemoryStore {
    fn get(&self, seed: &str) -> Option<Vec<String>> {
        self.entries.get(seed).cloned()
    }

    fn set(&mut self, seed: &str, attempts: &[String]) -> Result<(), StoreError> {
        self.entries.insert(seed.to_string(), attempts.to_vec());
        self.writes += 1;
        Ok(())
    }
}

/// Store backed by one JSON object file mapping seed to attempts
///
/// A missing file reads as empty. The file is re-read on every access so
/// that separate sessions on the same device see each other's progress.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }

    fn read_all(&self) -> Result<BTreeMap<String, Vec<String>>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(self.io_error(e)),
        };

        serde_json::from_str(&content).map_err(|source| StoreError::Json {
            path: self.path.display().to_string(),
            source,
        })
    }
}

impl AttemptStore for FileStore {
    fn get(&self, seed: &str) -> Option<Vec<String>> {
        match self.read_all() {
            Ok(mut entries) => entries.remove(seed),
            Err(e) => {
                log::warn!("Ignoring unreadable attempt store: {e}");
                None
            }
        }
    }

    fn set(&mut self, seed: &str, attempts: &[String]) -> Result<(), StoreError> {
        // An unreadable file is replaced rather than blocking new progress
        let mut entries = self.read_all().unwrap_or_default();
        entries.insert(seed.to_string(), attempts.to_vec());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let json = serde_json::to_string_pretty(&entries).map_err(|source| StoreError::Json {
            path: self.path.display().to_string(),
            source,
        })?;
        fs::write(&self.path, json).map_err(|e| self.io_error(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("yawdle-store-{}-{name}", std::process::id()))
            .join("attempts.json")
    }

    fn owned(words: &[&str]) -> Vec<String> {
        words.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("1"), None);

        store.set("1", &owned(&["crane", "slate"])).unwrap();
        assert_eq!(store.get("1"), Some(owned(&["crane", "slate"])));
        assert_eq!(store.get("2"), None);
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn memory_store_prepopulated() {
        let store = MemoryStore::new().with_attempts("seed", &["apple"]);
        assert_eq!(store.get("seed"), Some(owned(&["apple"])));
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn mutable_reference_is_a_store() {
        fn save<S: AttemptStore>(mut store: S) {
            store.set("s", &owned(&["crane"])).unwrap();
        }

        let mut store = MemoryStore::new();
        save(&mut store);
        assert_eq!(store.get("s"), Some(owned(&["crane"])));
    }

    #[test]
    fn file_store_missing_file_is_empty() {
        let store = FileStore::new(temp_path("missing"));
        assert_eq!(store.get("anything"), None);
    }

    #[test]
    fn file_store_round_trip() {
        let path = temp_path("round-trip");
        let mut store = FileStore::new(&path);

        store.set("a", &owned(&["crane"])).unwrap();
        store.set("b", &owned(&["slate", "irate"])).unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get("a"), Some(owned(&["crane"])));
        assert_eq!(reopened.get("b"), Some(owned(&["slate", "irate"])));

        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn file_store_recovers_from_corrupt_file() {
        let path = temp_path("corrupt");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json").unwrap();

        let mut store = FileStore::new(&path);
        assert_eq!(store.get("a"), None);

        store.set("a", &owned(&["crane"])).unwrap();
        assert_eq!(store.get("a"), Some(owned(&["crane"])));

        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }
}
