//! Persisted key/value flags (`theme`, `bg-anim`).

use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("flag storage is unavailable")]
    Unavailable,
    #[error("flag storage rejected the write: {0}")]
    Rejected(String),
}

/// A string key/value store that survives page loads.
///
/// Reads never fail: an unreadable store simply has nothing stored.
pub trait FlagStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store; the fallback when the browser offers no storage.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FlagStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<T: FlagStore + ?Sized> FlagStore for Box<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// Write a flag, logging instead of failing.
pub fn persist(store: &mut dyn FlagStore, key: &str, value: &str) {
    if let Err(e) = store.set(key, value) {
        log::warn!("[prefs] could not persist {}={}: {}", key, value, e);
    }
}
