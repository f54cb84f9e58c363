//! Durable key/value storage backends.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every persisted slot in the app goes through the [`Storage`] trait. In the
//! browser that is `window.localStorage`; natively (and in tests) it is an
//! in-memory map that can be given a byte quota to model quota-exceeded
//! writes.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::BTreeMap;

/// Error returned by a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The write would push the backend past its size limit.
    #[error("storage quota exceeded writing `{key}`: {needed} bytes needed, {limit} allowed")]
    QuotaExceeded { key: String, needed: usize, limit: usize },
    /// The backend rejected the operation.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// String key/value storage with the localStorage contract.
pub trait Storage {
    /// Raw value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::QuotaExceeded`] or [`StorageError::Backend`].
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Missing keys are not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] if the backend rejects the delete.
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Every key currently stored.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] if the backend cannot be enumerated.
    fn keys(&self) -> Result<Vec<String>, StorageError>;
}

/// In-memory storage, optionally capped at a total byte size.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<BTreeMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryStorage {
    /// Unbounded in-memory storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// In-memory storage that rejects writes once keys plus values would
    /// exceed `bytes`.
    #[must_use]
    pub fn with_quota(bytes: usize) -> Self {
        Self { entries: RefCell::default(), quota: Some(bytes) }
    }

    /// Total bytes of keys and values currently stored.
    #[must_use]
    pub fn used_bytes(&self) -> usize {
        self.entries.borrow().iter().map(|(k, v)| k.len() + v.len()).sum()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(limit) = self.quota {
            let replaced = self.entries.borrow().get(key).map_or(0, |old| key.len() + old.len());
            let needed = self.used_bytes() - replaced + key.len() + value.len();
            if needed > limit {
                return Err(StorageError::QuotaExceeded { key: key.to_owned(), needed, limit });
            }
        }
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.entries.borrow().keys().cloned().collect())
    }
}

/// `window.localStorage`.
#[cfg(feature = "hydrate")]
pub struct BrowserStorage {
    inner: web_sys::Storage,
}

#[cfg(feature = "hydrate")]
impl BrowserStorage {
    /// The page's localStorage, or `None` when the browser denies access
    /// (private mode, sandboxed iframe, no window).
    #[must_use]
    pub fn open() -> Option<Self> {
        let inner = web_sys::window()?.local_storage().ok().flatten()?;
        Some(Self { inner })
    }
}

#[cfg(feature = "hydrate")]
fn js_error(err: &wasm_bindgen::JsValue) -> StorageError {
    StorageError::Backend(format!("{err:?}"))
}

#[cfg(feature = "hydrate")]
impl Storage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get_item(key).map_err(|e| js_error(&e))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner.set_item(key, value).map_err(|e| js_error(&e))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove_item(key).map_err(|e| js_error(&e))
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        let len = self.inner.length().map_err(|e| js_error(&e))?;
        let mut keys = Vec::with_capacity(len as usize);
        for i in 0..len {
            if let Some(key) = self.inner.key(i).map_err(|e| js_error(&e))? {
                keys.push(key);
            }
        }
        Ok(keys)
    }
}
