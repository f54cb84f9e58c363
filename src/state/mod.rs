//! App state: the shared context plus one module per persisted feature.
//!
//! DESIGN
//! ======
//! [`AppContext`] is built once at startup and passed down explicitly. It
//! owns the [`Store`] handle and the slots every page reads (settings, music).
//! Page-local slots (board, gallery, games) are opened from the same store by
//! the page that needs them.

pub mod board;
pub mod gallery;
pub mod games;
pub mod music;
pub mod settings;


pub use self::board::{BoardExport, BoardPage, Notice, Prompt};
pub use gallery::{Favorites, PhotoNotes};
pub use games::{Difficulty, MemoryBest, QuizBest, QuizResult, Score};
pub use music::MusicPrefs;
pub use settings::{Language, Settings, Theme};

use crate::store::Store;

/// Shared state handed to every page.
#[derive(Clone, Debug)]
pub struct AppContext {
    store: Store,
    settings: Settings,
    music: MusicPrefs,
}

impl AppContext {
    /// Open the shared slots in `store`. `first_track` seeds the music
    /// track slot.
    #[must_use]
    pub fn new(store: Store, first_track: &str) -> Self {
        let settings = Settings::open(&store);
        let music = MusicPrefs::open(&store, first_track);
        tracing::debug!(durable = store.is_durable(), "app context ready");
        Self { store, settings, music }
    }

    /// Context over `window.localStorage`.
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn browser(first_track: &str) -> Self {
        Self::new(Store::browser(), first_track)
    }

    #[must_use]
    pub fn store(&self) -> &Store {
        &self.store
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn music(&self) -> &MusicPrefs {
        &self.music
    }

    /// Active UI language.
    #[must_use]
    pub fn language(&self) -> Language {
        self.settings.language()
    }
}
