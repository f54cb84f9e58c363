//! Persisted state: typed slots written through to a key/value backend.
//!
//! DESIGN
//! ======
//! A [`Store`] is a cheap clonable handle over an optional [`Storage`]
//! backend. Each slot is opened once with [`Store::open`], which reads and
//! parses the stored JSON and hands back a [`Persisted`] cell. Every write to
//! the cell updates memory first and then performs one write-through.
//!
//! ERROR HANDLING
//! ==============
//! Storage is best effort. Missing or unparsable values fall back to the
//! slot's default and failed writes keep the in-memory value; both are logged
//! and never surfaced to the caller.

pub mod keys;
pub mod persisted;
pub mod storage;


use std::fmt;
use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;

pub use persisted::Persisted;
#[cfg(feature = "hydrate")]
pub use storage::BrowserStorage;
pub use storage::{MemoryStorage, Storage, StorageError};

/// Handle to the durable backend shared by every persisted slot.
#[derive(Clone, Default)]
pub struct Store {
    backend: Option<Rc<dyn Storage>>,
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store").field("durable", &self.is_durable()).finish()
    }
}

impl Store {
    /// Store backed by `backend`.
    pub fn new<S: Storage + 'static>(backend: Rc<S>) -> Self {
        let backend: Rc<dyn Storage> = backend;
        Self { backend: Some(backend) }
    }

    /// Store with no backend. Slots start at their defaults and nothing is
    /// written anywhere.
    #[must_use]
    pub fn memory_only() -> Self {
        Self { backend: None }
    }

    /// Store backed by `window.localStorage`, or memory-only when the
    /// browser does not expose it.
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn browser() -> Self {
        match BrowserStorage::open() {
            Some(storage) => Self::new(Rc::new(storage)),
            None => {
                tracing::warn!("localStorage unavailable; state will not persist");
                Self::memory_only()
            }
        }
    }

    /// Whether writes reach a backend.
    #[must_use]
    pub fn is_durable(&self) -> bool {
        self.backend.is_some()
    }

    /// The backend, if any.
    #[must_use]
    pub fn backend(&self) -> Option<&dyn Storage> {
        self.backend.as_deref()
    }

    /// Open the slot stored under `key`, falling back to `default` when it is
    /// absent or unreadable.
    pub fn open<T>(&self, key: &'static str, default: T) -> Persisted<T>
    where
        T: Serialize + DeserializeOwned,
    {
        let initial = self.read(key).unwrap_or(default);
        Persisted::new(self.clone(), key, initial)
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let backend = self.backend()?;
        let raw = match backend.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "storage read failed; using default");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "stored value unreadable; using default");
                None
            }
        }
    }

    pub(crate) fn write<T: Serialize>(&self, key: &str, value: &T) {
        let Some(backend) = self.backend() else {
            return;
        };
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "failed to serialize slot");
                return;
            }
        };
        if let Err(e) = backend.set(key, &raw) {
            tracing::warn!(key = %key, error = %e, "storage write failed; keeping in-memory value");
        }
    }
}
