use std::collections::HashSet;

use super::*;

#[test]
fn seed_has_six_items_with_expected_ids() {
    let ids: Vec<String> = default_items().into_iter().map(|item| item.id).collect();
    assert_eq!(
        ids,
        [
            "board-photo-1",
            "board-photo-2",
            "board-photo-3",
            "board-note-1",
            "board-sticker-1",
            "board-sticker-2",
        ]
    );
}

#[test]
fn seed_ids_are_unique() {
    let items = default_items();
    let ids: HashSet<&str> = items.iter().map(|item| item.id.as_str()).collect();
    assert_eq!(ids.len(), items.len());
}

#[test]
fn seed_z_is_one_through_six() {
    let z: Vec<i64> = default_items().iter().map(|item| item.z).collect();
    assert_eq!(z, [1, 2, 3, 4, 5, 6]);
}

#[test]
fn seed_positions_are_in_range() {
    for item in default_items() {
        assert!((0.0..=100.0).contains(&item.x), "{} x out of range", item.id);
        assert!((0.0..=100.0).contains(&item.y), "{} y out of range", item.id);
    }
}

#[test]
fn seed_kinds_match_ids() {
    for item in default_items() {
        let prefix = format!("board-{}-", item.kind.type_name());
        assert!(item.id.starts_with(&prefix), "{} is a {}", item.id, item.kind.type_name());
    }
}

#[test]
fn seed_is_deterministic() {
    assert_eq!(default_items(), default_items());
}
