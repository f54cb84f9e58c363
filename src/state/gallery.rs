//! Photo gallery slots: favourites and per-photo notes.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use std::collections::BTreeMap;

use crate::store::{Persisted, Store, keys};

/// Favourite photo ids, in the order they were starred.
#[derive(Clone, Debug)]
pub struct Favorites {
    ids: Persisted<Vec<String>>,
}

impl Favorites {
    #[must_use]
    pub fn open(store: &Store) -> Self {
        Self { ids: store.open(keys::FAVORITES, Vec::new()) }
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.with(|ids| ids.iter().any(|fav| fav == id))
    }

    /// Star or unstar `id`. Returns whether it is now a favourite.
    pub fn toggle(&self, id: &str) -> bool {
        let now_favorite = !self.contains(id);
        self.ids.modify(|ids| {
            if now_favorite {
                ids.push(id.to_owned());
            } else {
                ids.retain(|fav| fav != id);
            }
        });
        now_favorite
    }

    #[must_use]
    pub fn ids(&self) -> Vec<String> {
        self.ids.get()
    }
}

/// Free-text notes keyed by photo id.
#[derive(Clone, Debug)]
pub struct PhotoNotes {
    notes: Persisted<BTreeMap<String, String>>,
}

impl PhotoNotes {
    #[must_use]
    pub fn open(store: &Store) -> Self {
        Self { notes: store.open(keys::PHOTO_NOTES, BTreeMap::new()) }
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<String> {
        self.notes.with(|notes| notes.get(id).cloned())
    }

    /// Save `text` for `id`, trimmed. Blank text deletes the note.
    pub fn save(&self, id: &str, text: &str) {
        let trimmed = text.trim();
        self.notes.modify(|notes| {
            if trimmed.is_empty() {
                notes.remove(id);
            } else {
                notes.insert(id.to_owned(), trimmed.to_owned());
            }
        });
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notes.with(BTreeMap::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
