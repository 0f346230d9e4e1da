//! Selection Persistence
//!
//! Key-value storage for the selected organization slug.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("localStorage is not available")]
    Unavailable,
    #[error("localStorage write failed: {0}")]
    Write(String),
}

/// Persisted string values
pub trait SelectionStorage: Send + Sync {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Browser `window.localStorage`
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SelectionStorage for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|err| StorageError::Write(format!("{:?}", err)))
    }
}

/// Session-only storage; stands in when localStorage is blocked
#[derive(Default, Clone)]
pub struct MemoryStorage {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl SelectionStorage for MemoryStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
        Ok(())
    }
}

/// localStorage when reachable, otherwise an in-memory map
pub fn browser_storage() -> Arc<dyn SelectionStorage> {
    if LocalStorage::storage().is_some() {
        Arc::new(LocalStorage)
    } else {
        log::warn!("localStorage unavailable, organization selection will not survive a reload");
        Arc::new(MemoryStorage::default())
    }
}

/// Selected-organization persistence: storage key, fallback slug and backend
#[derive(Clone)]
pub struct OrgSelection {
    key: String,
    default_slug: String,
    storage: Arc<dyn SelectionStorage>,
}

impl OrgSelection {
    pub fn new(key: impl Into<String>, default_slug: impl Into<String>, storage: Arc<dyn SelectionStorage>) -> Self {
        Self {
            key: key.into(),
            default_slug: default_slug.into(),
            storage,
        }
    }

    /// Saved slug if there is a non-empty one, otherwise the default
    pub fn initial_slug(&self) -> String {
        self.storage
            .load(&self.key)
            .filter(|slug| !slug.is_empty())
            .unwrap_or_else(|| self.default_slug.clone())
    }

    /// Persist a new selection. Failures are logged; the selection still
    /// changes for this session.
    pub fn persist(&self, slug: &str) {
        if let Err(err) = self.storage.save(&self.key, slug) {
            log::warn!("could not persist organization selection: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(storage: &MemoryStorage) -> OrgSelection {
        OrgSelection::new("currentOrgSlug", "tech-corp", Arc::new(storage.clone()))
    }

    #[test]
    fn test_initial_slug_defaults() {
        let storage = MemoryStorage::default();
        assert_eq!(selection(&storage).initial_slug(), "tech-corp");

        storage.save("currentOrgSlug", "").unwrap();
        assert_eq!(selection(&storage).initial_slug(), "tech-corp");
    }

    #[test]
    fn test_persisted_slug_survives_reload() {
        let storage = MemoryStorage::default();
        selection(&storage).persist("acme");

        // A fresh selection over the same storage, as after a page reload
        assert_eq!(selection(&storage).initial_slug(), "acme");
        assert_eq!(storage.load("currentOrgSlug").as_deref(), Some("acme"));
    }
}
