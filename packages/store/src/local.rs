//! # Browser `localStorage` backend
//!
//! [`LocalStore`] is a zero-size handle that looks up `window.localStorage` on
//! every call. The `Storage` object is not `Send`, so holding it would make the
//! handle unusable behind the `Send + Sync` bound of [`KeyValueStore`]; the
//! lookup itself is a cheap property read.

use web_sys::Storage;

use crate::{KeyValueStore, StorageError};

/// `window.localStorage`-backed store for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Result<Storage, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|_| StorageError::Unavailable("localStorage access denied".to_string()))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|_| StorageError::Unavailable(format!("cannot read '{key}'")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::Write(key.to_string()))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage()?
            .remove_item(key)
            .map_err(|_| StorageError::Write(key.to_string()))
    }
}
