//! Progress persistence port.
//!
//! The wizard saves its resumable progress as one JSON string under one
//! fixed key. The store contract is deliberately small (get/set/delete on
//! single keys, each atomic) so the embedding shell can back it with
//! whatever durable storage the host environment offers. The in-memory
//! implementation here is the reference used by tests and benchmarks.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use thiserror::Error;

/// The one key the wizard snapshot lives under. At most one snapshot exists
/// at a time; writes overwrite, they never append.
pub const SNAPSHOT_KEY: &str = "maturity.wizard.progress";

/// Progress store operation error.
///
/// These are **infrastructure errors** (storage backend, lock health), never
/// domain errors. The session treats every one of them as recoverable: a
/// failed read means "no snapshot", a failed write is logged and ignored.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend failed: {0}")]
    Backend(String),

    #[error("storage lock poisoned")]
    Poisoned,
}

/// Durable key→string store for wizard progress.
///
/// Implementations must treat each call as an atomic single-key operation.
/// There is exactly one writer (one tab, one logical session), so no
/// cross-key transactions or locking protocol is required.
pub trait ProgressStore {
    /// Read the value under `key`. `Ok(None)` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key`. Removing an absent key is not an error.
    fn delete(&self, key: &str) -> Result<(), StoreError>;
}

impl<S> ProgressStore for Arc<S>
where
    S: ProgressStore + ?Sized,
{
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        (**self).delete(key)
    }
}

/// In-memory progress store.
///
/// Reference implementation for tests and benchmarks. A browser-storage
/// backed implementation is the embedder's concern.
#[derive(Debug, Default)]
pub struct InMemoryProgressStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryProgressStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressStore for InMemoryProgressStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.read().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write().map_err(|_| StoreError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write().map_err(|_| StoreError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }
}
