//! Input model: pointer events and the drag session state machine.
//!
//! A press on an item arms a session (`ArmedForClick`). Travel beyond
//! [`CLICK_THRESHOLD_PX`] on either axis promotes it to `Dragging`. Release
//! from `ArmedForClick` is a click (select); release from `Dragging` only ends
//! the drag. Cancel always tears down without selecting.
//!
//! Sessions are keyed by pointer id; events from any other pointer are ignored.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::consts::CLICK_THRESHOLD_PX;
use crate::doc::ItemId;
use crate::geometry::Point;

/// Browser pointer identifier (`PointerEvent.pointerId`).
pub type PointerId = i32;

/// A pointer event in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub pointer_id: PointerId,
    pub client: Point,
}

impl PointerEvent {
    #[must_use]
    pub fn new(pointer_id: PointerId, x: f64, y: f64) -> Self {
        Self { pointer_id, client: Point::new(x, y) }
    }
}

/// Context captured at pointer-down and carried for the life of the gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    /// Item being pressed.
    pub id: ItemId,
    /// Pointer that owns this session.
    pub pointer_id: PointerId,
    /// Pointer position minus the item's visual centre at press time.
    pub offset: Point,
    /// Pointer position at press time.
    pub start: Point,
}

impl DragSession {
    /// Whether `client` has travelled past the click threshold from `start`.
    #[must_use]
    pub fn exceeds_threshold(&self, client: Point) -> bool {
        let dx = (client.x - self.start.x).abs();
        let dy = (client.y - self.start.y).abs();
        dx > CLICK_THRESHOLD_PX || dy > CLICK_THRESHOLD_PX
    }

    /// Item centre implied by the pointer at `client`.
    #[must_use]
    pub fn center_for(&self, client: Point) -> Point {
        client.sub(self.offset)
    }
}

/// Gesture state for the board.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Pressed, not yet moved past the threshold. Releasing selects the item.
    ArmedForClick(DragSession),
    /// Moving the item with the pointer. Releasing only ends the drag.
    Dragging(DragSession),
}

impl DragState {
    /// The live session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Idle => None,
            Self::ArmedForClick(session) | Self::Dragging(session) => Some(session),
        }
    }

    /// Whether the live session belongs to `pointer_id`.
    #[must_use]
    pub fn owned_by(&self, pointer_id: PointerId) -> bool {
        self.session().is_some_and(|session| session.pointer_id == pointer_id)
    }

    /// Id of the item under an active gesture.
    #[must_use]
    pub fn active_id(&self) -> Option<&str> {
        self.session().map(|session| session.id.as_str())
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }
}
