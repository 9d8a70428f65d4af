//! Key-value storage backends for session persistence.
//!
//! The [`SessionStore`](crate::auth::SessionStore) keeps the bearer token and
//! the cached user profile under two fixed keys in a [`KeyValueStore`]. Two
//! backends ship with the crate:
//!
//! - [`MemoryStore`]: process-local, lost when the process exits
//! - [`FileStore`]: a JSON object on disk, durable across runs
//!
//! Implement [`KeyValueStore`] to plug in any other persistence layer.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::error::SessionStoreError;

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "access_token";

/// Storage key holding the cached user profile as a JSON blob.
pub const USER_KEY: &str = "user";

/// A string key-value store used to persist session state.
///
/// Reads are infallible: a backend that cannot read a value reports it as
/// absent. Writes surface their failures.
pub trait KeyValueStore: Send + Sync + fmt::Debug {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError`] if the value could not be persisted.
    fn set(&self, key: &str, value: &str) -> Result<(), SessionStoreError>;

    /// Removes the value stored under `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError`] if the removal could not be persisted.
    fn remove(&self, key: &str) -> Result<(), SessionStoreError>;
}

/// An in-process [`KeyValueStore`].
///
/// # Example
///
/// ```rust
/// use jewelry_api::auth::{KeyValueStore, MemoryStore};
///
/// let store = MemoryStore::new();
/// store.set("access_token", "abc").unwrap();
/// assert_eq!(store.get("access_token"), Some("abc".to_string()));
///
/// store.remove("access_token").unwrap();
/// assert_eq!(store.get("access_token"), None);
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionStoreError> {
        self.entries
            .write()
            .map_err(|_| SessionStoreError::Poisoned)?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SessionStoreError> {
        self.entries
            .write()
            .map_err(|_| SessionStoreError::Poisoned)?
            .remove(key);
        Ok(())
    }
}

/// A [`KeyValueStore`] persisted as a flat JSON object in a single file.
///
/// A missing, blank, or unparseable file behaves as an empty store. Every
/// write rewrites the whole file, replacing unreadable content; parent
/// directories are created on first write.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    lock: RwLock<()>,
}

impl FileStore {
    /// Creates a store backed by the file at `path`. The file is not touched
    /// until the first read or write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: RwLock::new(()),
        }
    }

    /// Returns the path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<HashMap<String, String>, SessionStoreError> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(HashMap::new());
        }

        Ok(serde_json::from_str(&content)?)
    }

    fn save(&self, entries: &HashMap<String, String>) -> Result<(), SessionStoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(entries)?)?;
        Ok(())
    }

    fn update(
        &self,
        apply: impl FnOnce(&mut HashMap<String, String>),
    ) -> Result<(), SessionStoreError> {
        let _guard = self.lock.write().map_err(|_| SessionStoreError::Poisoned)?;
        let mut entries = match self.load() {
            Ok(entries) => entries,
            Err(SessionStoreError::Serialization(error)) => {
                tracing::debug!(
                    "Replacing unreadable session file {}: {}",
                    self.path.display(),
                    error
                );
                HashMap::new()
            }
            Err(error) => return Err(error),
        };
        apply(&mut entries);
        self.save(&entries)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let _guard = self.lock.read().ok()?;
        match self.load() {
            Ok(mut entries) => entries.remove(key),
            Err(error) => {
                tracing::debug!(
                    "Could not read session file {}: {}",
                    self.path.display(),
                    error
                );
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionStoreError> {
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<(), SessionStoreError> {
        self.update(|entries| {
            entries.remove(key);
        })
    }
}

// Verify storage backends are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MemoryStore>();
    assert_send_sync::<FileStore>();
};
