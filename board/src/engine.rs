//! Board engine: the item collection plus selection and gesture state.
//!
//! `BoardCore` is driven by the host layer with pointer events and bounding
//! rectangles and by toolbar/edit-view commands. Every entry point returns the
//! [`Action`]s the host must carry out: persist the item list, re-render,
//! open or close the edit view, and manage pointer capture.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use uuid::Uuid;

use crate::consts::{
    NEW_NOTE_ROTATE, NEW_NOTE_WIDTH, NEW_NOTE_X, NEW_NOTE_Y, NEW_STICKER_ROTATE, NEW_STICKER_X, NEW_STICKER_Y,
};
use crate::doc::{BoardItem, ItemId, ItemKind, ItemPatch, ItemStore, NoteItem, NoteVariant, StickerItem, StickerVariant};
use crate::geometry::ClientRect;
use crate::input::{DragSession, DragState, PointerEvent, PointerId};
use crate::seed::default_items;

const NEW_NOTE_TITLE: &str = "Ghi chú mới";
const NEW_NOTE_TEXT: &str = "Viết gì đó dễ thương ở đây…";
const NEW_STICKER_TEXT: &str = "sticker mới";

/// Actions returned from engine entry points for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The item collection changed; persist and re-render.
    ItemsChanged,
    /// The selected item changed; open (`Some`) or close (`None`) the edit view.
    SelectionChanged(Option<ItemId>),
    /// A press started on this item.
    DragStarted { id: ItemId },
    /// The gesture on this item ended (release or cancel).
    DragEnded { id: ItemId },
    /// Route further events for this pointer to the pressed item.
    CapturePointer(PointerId),
    /// Release pointer capture.
    ReleasePointer(PointerId),
}

/// UI state visible to the renderer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    /// The item whose edit view is open, if any.
    pub selected_id: Option<ItemId>,
}

/// Core board state: items, selection, and the active gesture.
#[derive(Debug, Clone, Default)]
pub struct BoardCore {
    pub doc: ItemStore,
    pub ui: UiState,
    pub drag: DragState,
}

impl BoardCore {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board holding `items`.
    #[must_use]
    pub fn with_items(items: Vec<BoardItem>) -> Self {
        Self { doc: ItemStore::from_items(items), ..Self::default() }
    }

    // --- Queries ---

    /// Items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[BoardItem] {
        self.doc.items()
    }

    /// Look up an item by id.
    #[must_use]
    pub fn item(&self, id: &str) -> Option<&BoardItem> {
        self.doc.get(id)
    }

    /// The currently selected item id, if any.
    #[must_use]
    pub fn selection(&self) -> Option<&str> {
        self.ui.selected_id.as_deref()
    }

    /// The currently selected item, if it still exists.
    #[must_use]
    pub fn selected_item(&self) -> Option<&BoardItem> {
        self.selection().and_then(|id| self.doc.get(id))
    }

    /// Id of the item under an active press or drag.
    #[must_use]
    pub fn dragging_id(&self) -> Option<&str> {
        self.drag.active_id()
    }

    // --- Pointer input ---

    /// Begin a gesture on item `id`.
    ///
    /// `item_rect` is the item's current bounding rectangle; the pointer's
    /// offset from its centre is kept so the item does not jump under the
    /// cursor. The item is brought to the front immediately, whether the
    /// gesture ends up a click or a drag.
    pub fn on_pointer_down(&mut self, id: &str, event: PointerEvent, item_rect: ClientRect) -> Vec<Action> {
        if self.doc.get(id).is_none() {
            return Vec::new();
        }

        let session = DragSession {
            id: id.to_owned(),
            pointer_id: event.pointer_id,
            offset: event.client.sub(item_rect.center()),
            start: event.client,
        };
        self.drag = DragState::ArmedForClick(session);

        let mut actions = vec![Action::DragStarted { id: id.to_owned() }];
        actions.extend(self.bring_to_front(id));
        actions.push(Action::CapturePointer(event.pointer_id));
        actions
    }

    /// Track pointer movement for the active session.
    ///
    /// Until the click threshold is exceeded the item stays put. After that,
    /// each move places the item's centre at `pointer - offset`, converted to
    /// board percentages and clamped.
    pub fn on_pointer_move(&mut self, event: PointerEvent, board_rect: ClientRect) -> Vec<Action> {
        if !self.drag.owned_by(event.pointer_id) {
            return Vec::new();
        }

        if let DragState::ArmedForClick(session) = &self.drag {
            if !session.exceeds_threshold(event.client) {
                return Vec::new();
            }
            self.drag = DragState::Dragging(session.clone());
        }

        let DragState::Dragging(session) = &self.drag else {
            return Vec::new();
        };
        let Some(pos) = board_rect.to_percent(session.center_for(event.client)) else {
            return Vec::new();
        };
        if self.doc.apply_patch(&session.id, &ItemPatch::position(pos.x, pos.y)) {
            vec![Action::ItemsChanged]
        } else {
            Vec::new()
        }
    }

    /// End the active session. A release that never crossed the click
    /// threshold selects the item.
    pub fn on_pointer_up(&mut self, event: PointerEvent) -> Vec<Action> {
        if !self.drag.owned_by(event.pointer_id) {
            return Vec::new();
        }

        match std::mem::take(&mut self.drag) {
            DragState::ArmedForClick(session) => {
                let mut actions = vec![
                    Action::ReleasePointer(session.pointer_id),
                    Action::DragEnded { id: session.id.clone() },
                ];
                actions.extend(self.select(&session.id));
                actions
            }
            DragState::Dragging(session) => {
                vec![Action::ReleasePointer(session.pointer_id), Action::DragEnded { id: session.id }]
            }
            DragState::Idle => Vec::new(),
        }
    }

    /// Abandon the active session without selecting anything.
    pub fn on_pointer_cancel(&mut self, event: PointerEvent) -> Vec<Action> {
        if !self.drag.owned_by(event.pointer_id) {
            return Vec::new();
        }
        self.teardown_drag()
    }

    // --- Selection ---

    /// Open the edit view for `id` (click or keyboard activation).
    pub fn select(&mut self, id: &str) -> Vec<Action> {
        if self.doc.get(id).is_none() {
            return Vec::new();
        }
        self.ui.selected_id = Some(id.to_owned());
        vec![Action::SelectionChanged(Some(id.to_owned()))]
    }

    /// Close the edit view.
    pub fn clear_selection(&mut self) -> Vec<Action> {
        if self.ui.selected_id.take().is_none() {
            return Vec::new();
        }
        vec![Action::SelectionChanged(None)]
    }

    // --- CRUD ---

    /// Append a default note on top of the stack and select it.
    pub fn add_note(&mut self) -> Vec<Action> {
        let item = BoardItem {
            id: new_item_id(),
            x: NEW_NOTE_X,
            y: NEW_NOTE_Y,
            rotate: NEW_NOTE_ROTATE,
            z: self.doc.next_z(),
            kind: ItemKind::Note(NoteItem {
                title: Some(NEW_NOTE_TITLE.to_owned()),
                text: NEW_NOTE_TEXT.to_owned(),
                variant: NoteVariant::Lemon,
                width: NEW_NOTE_WIDTH,
            }),
        };
        self.add(item)
    }

    /// Append a default sticker on top of the stack and select it.
    pub fn add_sticker(&mut self) -> Vec<Action> {
        let item = BoardItem {
            id: new_item_id(),
            x: NEW_STICKER_X,
            y: NEW_STICKER_Y,
            rotate: NEW_STICKER_ROTATE,
            z: self.doc.next_z(),
            kind: ItemKind::Sticker(StickerItem {
                text: NEW_STICKER_TEXT.to_owned(),
                variant: StickerVariant::Lemon,
            }),
        };
        self.add(item)
    }

    fn add(&mut self, item: BoardItem) -> Vec<Action> {
        let id = item.id.clone();
        self.doc.insert(item);
        self.ui.selected_id = Some(id.clone());
        vec![Action::ItemsChanged, Action::SelectionChanged(Some(id))]
    }

    /// Shallow-merge `patch` into item `id`. No-op if the item is missing.
    pub fn update_item(&mut self, id: &str, patch: &ItemPatch) -> Vec<Action> {
        if self.doc.apply_patch(id, patch) {
            vec![Action::ItemsChanged]
        } else {
            Vec::new()
        }
    }

    /// Tilt item `id` by `delta` degrees.
    pub fn rotate_item(&mut self, id: &str, delta: f64) -> Vec<Action> {
        let Some(rotate) = self.doc.get(id).map(|item| item.rotate + delta) else {
            return Vec::new();
        };
        if !rotate.is_finite() {
            return Vec::new();
        }
        self.update_item(id, &ItemPatch { rotate: Some(rotate), ..Default::default() })
    }

    /// Delete item `id`, clearing the selection if it pointed at it.
    pub fn remove_item(&mut self, id: &str) -> Vec<Action> {
        if self.doc.remove(id).is_none() {
            return Vec::new();
        }
        let mut actions = vec![Action::ItemsChanged];
        if self.selection() == Some(id) {
            actions.extend(self.clear_selection());
        }
        actions
    }

    /// Stack item `id` above every other item.
    pub fn bring_to_front(&mut self, id: &str) -> Vec<Action> {
        if self.doc.get(id).is_none() {
            return Vec::new();
        }
        let z = self.doc.next_z();
        self.update_item(id, &ItemPatch::z(z))
    }

    /// Replace the collection with the seed layout and drop selection and
    /// gesture state. Confirmation is the caller's responsibility.
    pub fn reset_board(&mut self) -> Vec<Action> {
        self.replace_items(default_items())
    }

    /// Replace the collection wholesale with an already-validated list.
    pub fn replace_items(&mut self, items: Vec<BoardItem>) -> Vec<Action> {
        self.doc.load_snapshot(items);
        let mut actions = vec![Action::ItemsChanged];
        actions.extend(self.teardown_drag());
        actions.extend(self.clear_selection());
        actions
    }

    fn teardown_drag(&mut self) -> Vec<Action> {
        match std::mem::take(&mut self.drag) {
            DragState::ArmedForClick(session) | DragState::Dragging(session) => {
                vec![Action::ReleasePointer(session.pointer_id), Action::DragEnded { id: session.id }]
            }
            DragState::Idle => Vec::new(),
        }
    }
}

fn new_item_id() -> ItemId {
    Uuid::new_v4().to_string()
}
