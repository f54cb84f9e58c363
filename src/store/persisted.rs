//! A single persisted slot.

#[cfg(test)]
#[path = "persisted_test.rs"]
mod persisted_test;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use serde::Serialize;

use super::Store;

/// In-memory value of one slot, written through to its [`Store`] on every
/// change. Clones share the same value.
pub struct Persisted<T> {
    store: Store,
    key: &'static str,
    value: Rc<RefCell<T>>,
}

impl<T> Clone for Persisted<T> {
    fn clone(&self) -> Self {
        Self { store: self.store.clone(), key: self.key, value: Rc::clone(&self.value) }
    }
}

impl<T: fmt::Debug> fmt::Debug for Persisted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Persisted").field("key", &self.key).field("value", &self.value.borrow()).finish()
    }
}

impl<T: Serialize> Persisted<T> {
    pub(super) fn new(store: Store, key: &'static str, initial: T) -> Self {
        Self { store, key, value: Rc::new(RefCell::new(initial)) }
    }

    /// Storage key of this slot.
    #[must_use]
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Run `f` against the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.value.borrow())
    }

    /// Replace the value.
    pub fn set(&self, value: T) {
        *self.value.borrow_mut() = value;
        self.flush();
    }

    /// Replace the value with `f(current)`.
    pub fn update(&self, f: impl FnOnce(&T) -> T) {
        let next = f(&self.value.borrow());
        self.set(next);
    }

    /// Mutate the value in place.
    pub fn modify(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.value.borrow_mut());
        self.flush();
    }

    fn flush(&self) {
        self.store.write(self.key, &*self.value.borrow());
    }
}

impl<T: Serialize + Clone> Persisted<T> {
    /// Clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }
}
