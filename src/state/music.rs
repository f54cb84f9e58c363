//! Music dock preferences.

#[cfg(test)]
#[path = "music_test.rs"]
mod music_test;

use crate::store::{Persisted, Store, keys};

/// Volume used before the listener picks one.
pub const DEFAULT_VOLUME: f64 = 0.65;

/// Persisted music dock state. Playback itself belongs to the host.
#[derive(Clone, Debug)]
pub struct MusicPrefs {
    collapsed: Persisted<bool>,
    volume: Persisted<f64>,
    track: Persisted<String>,
    shuffle: Persisted<bool>,
    looping: Persisted<bool>,
}

impl MusicPrefs {
    /// Open the music slots. `first_track` is the playlist's first id, used
    /// when no track has been chosen yet.
    #[must_use]
    pub fn open(store: &Store, first_track: &str) -> Self {
        Self {
            collapsed: store.open(keys::MUSIC_COLLAPSED, false),
            volume: store.open(keys::MUSIC_VOLUME, DEFAULT_VOLUME),
            track: store.open(keys::MUSIC_TRACK, first_track.to_owned()),
            shuffle: store.open(keys::MUSIC_SHUFFLE, false),
            looping: store.open(keys::MUSIC_LOOP, false),
        }
    }

    #[must_use]
    pub fn collapsed(&self) -> bool {
        self.collapsed.get()
    }

    pub fn set_collapsed(&self, collapsed: bool) {
        self.collapsed.set(collapsed);
    }

    /// Volume in `[0, 1]`. Out-of-range stored values are clamped on read.
    #[must_use]
    pub fn volume(&self) -> f64 {
        clamp_volume(self.volume.get())
    }

    pub fn set_volume(&self, volume: f64) {
        self.volume.set(clamp_volume(volume));
    }

    #[must_use]
    pub fn track(&self) -> String {
        self.track.get()
    }

    pub fn set_track(&self, id: impl Into<String>) {
        self.track.set(id.into());
    }

    /// The stored track if it is in `playlist`, else the playlist's first id.
    #[must_use]
    pub fn active_track<'a>(&self, playlist: &[&'a str]) -> Option<&'a str> {
        let current = self.track();
        playlist.iter().copied().find(|id| *id == current).or_else(|| playlist.first().copied())
    }

    #[must_use]
    pub fn shuffle(&self) -> bool {
        self.shuffle.get()
    }

    pub fn toggle_shuffle(&self) {
        self.shuffle.modify(|on| *on = !*on);
    }

    #[must_use]
    pub fn looping(&self) -> bool {
        self.looping.get()
    }

    pub fn toggle_loop(&self) {
        self.looping.modify(|on| *on = !*on);
    }
}

fn clamp_volume(volume: f64) -> f64 {
    if volume.is_nan() { DEFAULT_VOLUME } else { volume.clamp(0.0, 1.0) }
}
