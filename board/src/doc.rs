//! Document model: board items, their variants, and the in-memory store.
//!
//! This module defines what sits on the board (`BoardItem`, `ItemKind`), the
//! fixed colour palettes for notes and stickers (`NoteVariant`,
//! `StickerVariant`), a sparse-update type for edits and drags (`ItemPatch`),
//! and the runtime store that owns the live collection (`ItemStore`).
//!
//! Items arrive here from durable storage (serde), from the seed layout, and
//! from validated imports. Every mutation path funnels through
//! [`BoardItem::apply`], which clamps `x`/`y` into the board.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};

use crate::geometry::clamp_percent;

/// Opaque unique identifier for a board item.
pub type ItemId = String;

/// Colour style of a sticky note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteVariant {
    Lemon,
    Mint,
    Sky,
    Accent,
    Paper,
}

impl NoteVariant {
    /// Every allowed note colour, in palette order.
    pub const ALL: [NoteVariant; 5] = [Self::Lemon, Self::Mint, Self::Sky, Self::Accent, Self::Paper];

    /// Wire name of the variant.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lemon => "lemon",
            Self::Mint => "mint",
            Self::Sky => "sky",
            Self::Accent => "accent",
            Self::Paper => "paper",
        }
    }

    /// Look up a variant by its wire name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == name)
    }
}

/// Colour style of a sticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StickerVariant {
    Accent,
    Paper,
    Ink,
    Lemon,
    Mint,
    Sky,
    Rose,
    Lavender,
}

impl StickerVariant {
    /// Every allowed sticker colour, in palette order.
    pub const ALL: [StickerVariant; 8] = [
        Self::Accent,
        Self::Paper,
        Self::Ink,
        Self::Lemon,
        Self::Mint,
        Self::Sky,
        Self::Rose,
        Self::Lavender,
    ];

    /// Wire name of the variant.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Accent => "accent",
            Self::Paper => "paper",
            Self::Ink => "ink",
            Self::Lemon => "lemon",
            Self::Mint => "mint",
            Self::Sky => "sky",
            Self::Rose => "rose",
            Self::Lavender => "lavender",
        }
    }

    /// Look up a variant by its wire name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == name)
    }
}

/// A polaroid-style photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoItem {
    pub src: String,
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<String>,
    /// Rendered width in CSS pixels.
    pub width: f64,
}

/// A sticky note with free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Body text; may contain newlines.
    pub text: String,
    pub variant: NoteVariant,
    /// Rendered width in CSS pixels.
    pub width: f64,
}

/// A short text sticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StickerItem {
    pub text: String,
    pub variant: StickerVariant,
}

/// Variant-specific part of a board item, discriminated by `type` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ItemKind {
    Photo(PhotoItem),
    Note(NoteItem),
    Sticker(StickerItem),
}

impl ItemKind {
    /// Wire discriminant of this kind.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Photo(_) => "photo",
            Self::Note(_) => "note",
            Self::Sticker(_) => "sticker",
        }
    }
}

/// One placed object on the board, as stored locally and in export files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardItem {
    /// Unique identifier within the board.
    pub id: ItemId,
    /// Horizontal centre in percent of the board width, `0..=100`.
    pub x: f64,
    /// Vertical centre in percent of the board height, `0..=100`.
    pub y: f64,
    /// Clockwise tilt in degrees. Unrestricted.
    pub rotate: f64,
    /// Stacking order; higher values render above lower ones.
    pub z: i64,
    #[serde(flatten)]
    pub kind: ItemKind,
}

impl BoardItem {
    /// Shallow-merge `patch` into this item.
    ///
    /// Fields that do not exist on the item's variant are ignored. `x` and `y`
    /// are clamped into the board. Non-finite `x`, `y`, `rotate` and `width`
    /// values are dropped.
    pub fn apply(&mut self, patch: &ItemPatch) {
        if let Some(x) = patch.x.filter(|v| v.is_finite()) {
            self.x = clamp_percent(x);
        }
        if let Some(y) = patch.y.filter(|v| v.is_finite()) {
            self.y = clamp_percent(y);
        }
        if let Some(rotate) = patch.rotate.filter(|v| v.is_finite()) {
            self.rotate = rotate;
        }
        if let Some(z) = patch.z {
            self.z = z;
        }

        match &mut self.kind {
            ItemKind::Photo(photo) => {
                if let Some(ref src) = patch.src {
                    photo.src.clone_from(src);
                }
                if let Some(ref alt) = patch.alt {
                    photo.alt.clone_from(alt);
                }
                if let Some(ref caption) = patch.caption {
                    photo.caption = Some(caption.clone());
                }
                if let Some(ref meta) = patch.meta {
                    photo.meta = Some(meta.clone());
                }
                if let Some(width) = patch.width.filter(|v| v.is_finite()) {
                    photo.width = width;
                }
            }
            ItemKind::Note(note) => {
                if let Some(ref title) = patch.title {
                    note.title = Some(title.clone());
                }
                if let Some(ref text) = patch.text {
                    note.text.clone_from(text);
                }
                if let Some(variant) = patch.note_variant {
                    note.variant = variant;
                }
                if let Some(width) = patch.width.filter(|v| v.is_finite()) {
                    note.width = width;
                }
            }
            ItemKind::Sticker(sticker) => {
                if let Some(ref text) = patch.text {
                    sticker.text.clone_from(text);
                }
                if let Some(variant) = patch.sticker_variant {
                    sticker.variant = variant;
                }
            }
        }
    }

    /// Accessible label for the item: caption or alt for photos, title for
    /// notes, text for stickers.
    #[must_use]
    pub fn label(&self) -> &str {
        match &self.kind {
            ItemKind::Photo(photo) => photo.caption.as_deref().unwrap_or(&photo.alt),
            ItemKind::Note(note) => note.title.as_deref().unwrap_or(&note.text),
            ItemKind::Sticker(sticker) => &sticker.text,
        }
    }
}

/// Sparse update for a board item. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub rotate: Option<f64>,
    pub z: Option<i64>,
    /// Photo and note width.
    pub width: Option<f64>,
    pub src: Option<String>,
    pub alt: Option<String>,
    pub caption: Option<String>,
    pub meta: Option<String>,
    pub title: Option<String>,
    /// Note and sticker text.
    pub text: Option<String>,
    pub note_variant: Option<NoteVariant>,
    pub sticker_variant: Option<StickerVariant>,
}

impl ItemPatch {
    /// Patch that moves an item to a new centre.
    #[must_use]
    pub fn position(x: f64, y: f64) -> Self {
        Self { x: Some(x), y: Some(y), ..Default::default() }
    }

    /// Patch that changes only the stacking order.
    #[must_use]
    pub fn z(z: i64) -> Self {
        Self { z: Some(z), ..Default::default() }
    }
}

/// In-memory, ordered collection of board items.
///
/// Insertion order is preserved so that exports and the persisted form list
/// items in the order they were created.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemStore {
    items: Vec<BoardItem>,
}

impl ItemStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create a store holding `items`, in order.
    #[must_use]
    pub fn from_items(items: Vec<BoardItem>) -> Self {
        Self { items }
    }

    /// Append an item, or replace the existing one with the same `id` in place.
    pub fn insert(&mut self, item: BoardItem) {
        match self.items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => *existing = item,
            None => self.items.push(item),
        }
    }

    /// Remove an item by id, returning it if it was present.
    pub fn remove(&mut self, id: &str) -> Option<BoardItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    /// Return a reference to an item by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&BoardItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Apply a patch to an existing item. Returns false if the item doesn't exist.
    pub fn apply_patch(&mut self, id: &str, patch: &ItemPatch) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return false;
        };
        item.apply(patch);
        true
    }

    /// Replace all items with a full snapshot.
    pub fn load_snapshot(&mut self, items: Vec<BoardItem>) {
        self.items = items;
    }

    /// Highest `z` on the board, floored at zero.
    #[must_use]
    pub fn max_z(&self) -> i64 {
        self.items.iter().map(|item| item.z).fold(0, i64::max)
    }

    /// The `z` that puts an item above everything on the board.
    ///
    /// When the maximum is already `i64::MAX` the stack is renumbered to
    /// `1..=n` in draw order first.
    pub fn next_z(&mut self) -> i64 {
        if let Some(z) = self.max_z().checked_add(1) {
            return z;
        }
        self.renormalize_z();
        self.max_z().saturating_add(1)
    }

    /// Renumber `z` to `1..=n`, keeping draw order and tie order.
    pub fn renormalize_z(&mut self) {
        let mut order: Vec<usize> = (0..self.items.len()).collect();
        order.sort_by_key(|&index| self.items[index].z);
        for (z, index) in (1_i64..).zip(order) {
            self.items[index].z = z;
        }
        tracing::debug!(items = self.items.len(), "z order renormalized");
    }

    /// Items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[BoardItem] {
        &self.items
    }

    /// Items sorted by `z` for draw order; ties keep insertion order.
    #[must_use]
    pub fn sorted_items(&self) -> Vec<&BoardItem> {
        let mut items: Vec<&BoardItem> = self.items.iter().collect();
        items.sort_by_key(|item| item.z);
        items
    }

    /// Number of items currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the store contains no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
