use std::{cell::RefCell, collections::HashMap};

use dioxus::logger::tracing::{debug, error};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("local storage rejected the operation: {0}")]
    Rejected(String),
}

/// Fallible key/value primitives of a persistent string store.
pub trait RawStorage {
    fn raw_load(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn raw_store(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removing a key that is not present succeeds.
    fn raw_remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Logging layer on top of [`RawStorage`]. Failures are reported and
/// turned into "nothing stored" / "nothing changed".
pub trait GeneralStorage: RawStorage {
    fn store(&self, key: &str, value: &str) -> bool {
        debug!("Storing value under key {key:?}");
        if let Err(err) = self.raw_store(key, value) {
            error!("Unexpected error while trying to store key {key:?}: {err}");
            false
        } else {
            true
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        match self.raw_load(key) {
            Ok(value) => value,
            Err(err) => {
                error!("Unexpected error while trying to load key {key:?}: {err}");
                None
            }
        }
    }

    fn remove(&self, key: &str) -> bool {
        debug!("Removing key {key:?}");
        if let Err(err) = self.raw_remove(key) {
            error!("Unexpected error while trying to remove key {key:?}: {err}");
            false
        } else {
            true
        }
    }
}

/// Process-local store. Used outside the browser and in tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage
            .entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        storage
    }
}

impl RawStorage for MemoryStorage {
    fn raw_load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn raw_store(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn raw_remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

impl GeneralStorage for MemoryStorage {}

/// `window.localStorage`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        window
            .local_storage()
            .map_err(js_error)?
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(target_arch = "wasm32")]
fn js_error(err: wasm_bindgen::JsValue) -> StorageError {
    StorageError::Rejected(format!("{err:?}"))
}

#[cfg(target_arch = "wasm32")]
impl RawStorage for BrowserStorage {
    fn raw_load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::local_storage()?.get_item(key).map_err(js_error)
    }

    fn raw_store(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::local_storage()?.set_item(key, value).map_err(js_error)
    }

    fn raw_remove(&self, key: &str) -> Result<(), StorageError> {
        Self::local_storage()?.remove_item(key).map_err(js_error)
    }
}

#[cfg(target_arch = "wasm32")]
impl GeneralStorage for BrowserStorage {}
