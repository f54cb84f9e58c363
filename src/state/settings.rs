//! App-wide settings: theme, language, music toggle, anniversary start date.
//!
//! DESIGN
//! ======
//! Each setting is its own persisted slot so a corrupt value resets only that
//! setting. Enum slots are stored as their lowercase names; an unknown name
//! reads back as the default.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use serde::{Deserialize, Serialize};

use crate::store::{Persisted, Store, keys};

/// Default anniversary start date.
pub const DEFAULT_START_DATE: &str = "2022-11-04";

/// Visual theme applied to the document root.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Scrapbook,
    Light,
    Dark,
    Romantic,
}

impl Theme {
    pub const ALL: [Self; 4] = [Self::Scrapbook, Self::Light, Self::Dark, Self::Romantic];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scrapbook => "scrapbook",
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Romantic => "romantic",
        }
    }

    /// Root element class, e.g. `theme-dark`.
    #[must_use]
    pub fn class(self) -> String {
        format!("theme-{}", self.as_str())
    }
}

/// UI language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Vi,
    En,
}

impl Language {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Vi => "vi",
            Self::En => "en",
        }
    }
}

/// Persisted global settings.
#[derive(Clone, Debug)]
pub struct Settings {
    theme: Persisted<Theme>,
    language: Persisted<Language>,
    music_enabled: Persisted<bool>,
    start_date: Persisted<String>,
}

impl Settings {
    /// Open every settings slot in `store`.
    #[must_use]
    pub fn open(store: &Store) -> Self {
        Self {
            theme: store.open(keys::THEME, Theme::default()),
            language: store.open(keys::LANGUAGE, Language::default()),
            music_enabled: store.open(keys::MUSIC_ENABLED, true),
            start_date: store.open(keys::START_DATE, DEFAULT_START_DATE.to_owned()),
        }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
    }

    /// Class to put on the document root for the active theme.
    #[must_use]
    pub fn theme_class(&self) -> String {
        self.theme().class()
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language.get()
    }

    pub fn set_language(&self, language: Language) {
        self.language.set(language);
    }

    #[must_use]
    pub fn music_enabled(&self) -> bool {
        self.music_enabled.get()
    }

    /// Flip background music on or off.
    pub fn toggle_music(&self) {
        self.music_enabled.modify(|on| *on = !*on);
    }

    /// Anniversary start date as stored (`YYYY-MM-DD`, not validated).
    #[must_use]
    pub fn start_date(&self) -> String {
        self.start_date.get()
    }

    pub fn set_start_date(&self, date: impl Into<String>) {
        self.start_date.set(date.into());
    }
}
