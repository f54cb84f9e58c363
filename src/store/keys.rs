//! Storage keys for every persisted slot.
//!
//! All keys share [`PREFIX`] so a backup or a wipe can find exactly the app's
//! own entries and leave anything else in the origin's storage alone.

#[cfg(test)]
#[path = "keys_test.rs"]
mod keys_test;

/// Namespace shared by every slot.
pub const PREFIX: &str = "lovestory:";

pub const BOARD_ITEMS: &str = "lovestory:board-items";
pub const FAVORITES: &str = "lovestory:her-favorites";
pub const PHOTO_NOTES: &str = "lovestory:her-notes";
pub const THEME: &str = "lovestory:theme";
pub const LANGUAGE: &str = "lovestory:language";
pub const MUSIC_ENABLED: &str = "lovestory:music-enabled";
pub const MUSIC_COLLAPSED: &str = "lovestory:music-collapsed";
pub const MUSIC_VOLUME: &str = "lovestory:music-volume";
pub const MUSIC_TRACK: &str = "lovestory:music-track";
pub const MUSIC_SHUFFLE: &str = "lovestory:music-shuffle";
pub const MUSIC_LOOP: &str = "lovestory:music-loop";
pub const MEMORY_BEST: &str = "lovestory:memory-best";
pub const QUIZ_BEST: &str = "lovestory:quiz-best";
pub const START_DATE: &str = "lovestory:start-date";

/// Every slot the app writes, in display order.
pub const ALL: [&str; 14] = [
    BOARD_ITEMS,
    FAVORITES,
    PHOTO_NOTES,
    THEME,
    LANGUAGE,
    MUSIC_ENABLED,
    MUSIC_COLLAPSED,
    MUSIC_VOLUME,
    MUSIC_TRACK,
    MUSIC_SHUFFLE,
    MUSIC_LOOP,
    MEMORY_BEST,
    QUIZ_BEST,
    START_DATE,
];

/// Whether `key` belongs to this app.
#[must_use]
pub fn is_app_key(key: &str) -> bool {
    key.starts_with(PREFIX)
}
