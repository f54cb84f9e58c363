//! Board page controller: the board engine bound to its persisted slot.
//!
//! SYSTEM CONTEXT
//! ==============
//! `board::engine::BoardCore` owns items, selection and the drag gesture but
//! knows nothing about storage or dialogs. This controller rehydrates the core
//! from `lovestory:board-items`, mirrors the item list back after every call
//! that reports `Action::ItemsChanged`, asks before destructive operations and
//! keeps the last status notice for the page to show.
//!
//! ERROR HANDLING
//! ==============
//! Import failures never reach the core: the file is fully validated first
//! and a rejected file only sets a notice. Export failures are returned to the
//! caller and also recorded in the log.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use board::doc::{BoardItem, ItemPatch};
use board::engine::{Action, BoardCore};
use board::geometry::ClientRect;
use board::input::PointerEvent;
use board::seed::default_items;
use board::transfer::{ExportError, ImportError, date_stamp, export_board, parse_import, validate_items};
use time::OffsetDateTime;

use super::{AppContext, Language, Settings};
use crate::store::{Persisted, keys};
use crate::util::confirm::Confirm;

/// Transient status line shown above the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Reset,
    Exported,
    Imported(usize),
    InvalidLayout,
    UnreadableFile,
}

impl Notice {
    #[must_use]
    pub fn message(&self, language: Language) -> String {
        match (self, language) {
            (Self::Reset, Language::Vi) => "Đã reset bảng về layout mặc định.".to_owned(),
            (Self::Reset, Language::En) => "The board was reset to the default layout.".to_owned(),
            (Self::Exported, Language::Vi) => "Đã xuất layout bảng ra file JSON.".to_owned(),
            (Self::Exported, Language::En) => "Board layout exported to a JSON file.".to_owned(),
            (Self::Imported(n), Language::Vi) => format!("Đã nhập layout ({n} item)."),
            (Self::Imported(n), Language::En) => format!("Layout imported ({n} items)."),
            (Self::InvalidLayout, Language::Vi) => {
                "File không đúng định dạng layout Board. Hãy kiểm tra lại JSON.".to_owned()
            }
            (Self::InvalidLayout, Language::En) => {
                "This file is not a board layout. Please check the JSON.".to_owned()
            }
            (Self::UnreadableFile, Language::Vi) => "Không đọc được file JSON. Hãy thử lại.".to_owned(),
            (Self::UnreadableFile, Language::En) => "Could not read the JSON file. Please try again.".to_owned(),
        }
    }

    /// Whether the notice reports a failure.
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::InvalidLayout | Self::UnreadableFile)
    }
}

/// Questions asked before destructive board operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Prompt {
    Reset,
    Import,
    Delete,
}

impl Prompt {
    #[must_use]
    pub fn message(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::Reset, Language::Vi) => "Reset sẽ đưa bảng về layout mặc định. Tiếp tục?",
            (Self::Reset, Language::En) => "Reset the board to the default layout?",
            (Self::Import, Language::Vi) => "Nhập layout sẽ ghi đè bảng hiện tại. Tiếp tục?",
            (Self::Import, Language::En) => "Importing will overwrite the current board. Continue?",
            (Self::Delete, Language::Vi) => "Xoá item này?",
            (Self::Delete, Language::En) => "Delete this item?",
        }
    }
}

/// A finished export, ready to download.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardExport {
    pub file_name: String,
    pub json: String,
}

/// The board page's state.
#[derive(Debug)]
pub struct BoardPage {
    core: BoardCore,
    items: Persisted<Vec<BoardItem>>,
    settings: Settings,
    notice: Option<Notice>,
}

impl BoardPage {
    /// Rehydrate the board from storage, seeding the default layout when the
    /// slot is empty, unreadable or fails the import rules.
    #[must_use]
    pub fn open(ctx: &AppContext) -> Self {
        let items = ctx.store().open(keys::BOARD_ITEMS, default_items());
        let core = BoardCore::with_items(items.with(|stored| revalidate(stored)));
        Self { core, items, settings: ctx.settings().clone(), notice: None }
    }

    /// Engine state for rendering.
    #[must_use]
    pub fn core(&self) -> &BoardCore {
        &self.core
    }

    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Notice text in the active language.
    #[must_use]
    pub fn notice_message(&self) -> Option<String> {
        self.notice.as_ref().map(|n| n.message(self.settings.language()))
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    // --- Gestures ---

    pub fn on_pointer_down(&mut self, id: &str, event: PointerEvent, item_rect: ClientRect) -> Vec<Action> {
        let actions = self.core.on_pointer_down(id, event, item_rect);
        self.commit(actions)
    }

    pub fn on_pointer_move(&mut self, event: PointerEvent, board_rect: ClientRect) -> Vec<Action> {
        let actions = self.core.on_pointer_move(event, board_rect);
        self.commit(actions)
    }

    pub fn on_pointer_up(&mut self, event: PointerEvent) -> Vec<Action> {
        let actions = self.core.on_pointer_up(event);
        self.commit(actions)
    }

    pub fn on_pointer_cancel(&mut self, event: PointerEvent) -> Vec<Action> {
        let actions = self.core.on_pointer_cancel(event);
        self.commit(actions)
    }

    // --- Editing ---

    pub fn select(&mut self, id: &str) -> Vec<Action> {
        self.core.select(id)
    }

    pub fn clear_selection(&mut self) -> Vec<Action> {
        self.core.clear_selection()
    }

    pub fn add_note(&mut self) -> Vec<Action> {
        let actions = self.core.add_note();
        self.commit(actions)
    }

    pub fn add_sticker(&mut self) -> Vec<Action> {
        let actions = self.core.add_sticker();
        self.commit(actions)
    }

    pub fn update_item(&mut self, id: &str, patch: &ItemPatch) -> Vec<Action> {
        let actions = self.core.update_item(id, patch);
        self.commit(actions)
    }

    pub fn rotate_item(&mut self, id: &str, delta: f64) -> Vec<Action> {
        let actions = self.core.rotate_item(id, delta);
        self.commit(actions)
    }

    pub fn bring_to_front(&mut self, id: &str) -> Vec<Action> {
        let actions = self.core.bring_to_front(id);
        self.commit(actions)
    }

    /// Delete `id` once the user agrees.
    pub fn remove_item(&mut self, id: &str, confirm: &dyn Confirm) -> Vec<Action> {
        if self.core.item(id).is_none() || !self.ask(Prompt::Delete, confirm) {
            return Vec::new();
        }
        let actions = self.core.remove_item(id);
        self.commit(actions)
    }

    /// Restore the seed layout once the user agrees.
    pub fn reset(&mut self, confirm: &dyn Confirm) -> Vec<Action> {
        if !self.ask(Prompt::Reset, confirm) {
            return Vec::new();
        }
        let actions = self.core.reset_board();
        self.notice = Some(Notice::Reset);
        self.commit(actions)
    }

    // --- Files ---

    /// Serialize the board for download.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError`] if the timestamp or items cannot be encoded.
    pub fn export(&mut self, now: OffsetDateTime) -> Result<BoardExport, ExportError> {
        let json = export_board(self.core.items(), now).inspect_err(|e| {
            tracing::warn!(error = %e, "board export failed");
        })?;
        self.notice = Some(Notice::Exported);
        Ok(BoardExport { file_name: format!("lovestory-board-{}.json", date_stamp(now)), json })
    }

    /// Replace the board with the layout in `text` once the user agrees.
    ///
    /// Invalid files set a notice and leave the board untouched; the user is
    /// only asked after the file has been fully validated.
    pub fn import(&mut self, text: &str, confirm: &dyn Confirm) -> Vec<Action> {
        let items = match parse_import(text) {
            Ok(items) => items,
            Err(ImportError::Malformed(e)) => {
                tracing::warn!(error = %e, "board import is not JSON");
                self.notice = Some(Notice::UnreadableFile);
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!(error = %e, "board import rejected");
                self.notice = Some(Notice::InvalidLayout);
                return Vec::new();
            }
        };
        if !self.ask(Prompt::Import, confirm) {
            return Vec::new();
        }
        let count = items.len();
        let actions = self.core.replace_items(items);
        self.notice = Some(Notice::Imported(count));
        self.commit(actions)
    }

    fn ask(&self, prompt: Prompt, confirm: &dyn Confirm) -> bool {
        confirm.confirm(prompt.message(self.settings.language()))
    }

    /// Mirror the items into storage when `actions` report a change.
    fn commit(&mut self, actions: Vec<Action>) -> Vec<Action> {
        if actions.contains(&Action::ItemsChanged) {
            self.items.set(self.core.items().to_vec());
        }
        actions
    }
}

/// Run a stored layout through the import rules. Coordinates are clamped;
/// duplicate ids or a broken item reject the whole layout in favour of the
/// seed.
fn revalidate(stored: &[BoardItem]) -> Vec<BoardItem> {
    let checked = serde_json::to_value(stored)
        .map_err(ImportError::Malformed)
        .and_then(|raw| validate_items(&raw));
    match checked {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(key = keys::BOARD_ITEMS, error = %e, "stored board rejected; using default layout");
            default_items()
        }
    }
}
