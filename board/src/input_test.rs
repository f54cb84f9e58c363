#![allow(clippy::float_cmp)]

use super::*;

fn session_at(x: f64, y: f64) -> DragSession {
    DragSession {
        id: "a".to_owned(),
        pointer_id: 7,
        offset: Point::new(5.0, -5.0),
        start: Point::new(x, y),
    }
}

// =============================================================
// DragSession
// =============================================================

#[test]
fn threshold_not_exceeded_at_exact_limit() {
    let s = session_at(100.0, 100.0);
    assert!(!s.exceeds_threshold(Point::new(103.0, 97.0)));
}

#[test]
fn threshold_exceeded_on_either_axis() {
    let s = session_at(100.0, 100.0);
    assert!(s.exceeds_threshold(Point::new(103.5, 100.0)));
    assert!(s.exceeds_threshold(Point::new(100.0, 96.0)));
}

#[test]
fn center_subtracts_offset() {
    let s = session_at(0.0, 0.0);
    assert_eq!(s.center_for(Point::new(50.0, 50.0)), Point::new(45.0, 55.0));
}

// =============================================================
// DragState
// =============================================================

#[test]
fn default_is_idle() {
    let state = DragState::default();
    assert_eq!(state, DragState::Idle);
    assert!(state.session().is_none());
    assert!(state.active_id().is_none());
    assert!(!state.owned_by(7));
}

#[test]
fn armed_exposes_session() {
    let state = DragState::ArmedForClick(session_at(0.0, 0.0));
    assert_eq!(state.active_id(), Some("a"));
    assert!(state.owned_by(7));
    assert!(!state.owned_by(8));
    assert!(!state.is_dragging());
}

#[test]
fn dragging_is_dragging() {
    let state = DragState::Dragging(session_at(0.0, 0.0));
    assert!(state.is_dragging());
    assert!(state.owned_by(7));
}

#[test]
fn pointer_event_new() {
    let e = PointerEvent::new(3, 1.5, 2.5);
    assert_eq!(e.pointer_id, 3);
    assert_eq!(e.client, Point::new(1.5, 2.5));
}
