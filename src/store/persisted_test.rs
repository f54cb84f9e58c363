use std::rc::Rc;

use super::*;
use crate::store::keys;
use crate::store::{MemoryStorage, Storage};

fn backed() -> (Rc<MemoryStorage>, Store) {
    let mem = Rc::new(MemoryStorage::new());
    let store = Store::new(Rc::clone(&mem));
    (mem, store)
}

// =============================================================
// Write-through
// =============================================================

#[test]
fn set_writes_json() {
    let (mem, store) = backed();
    let slot = store.open(keys::MUSIC_TRACK, String::new());
    slot.set("perfect".to_owned());
    assert_eq!(mem.get(keys::MUSIC_TRACK).unwrap().as_deref(), Some("\"perfect\""));
    assert_eq!(slot.get(), "perfect");
}

#[test]
fn update_applies_to_current_value() {
    let (mem, store) = backed();
    let slot = store.open(keys::FAVORITES, vec!["a".to_owned()]);
    slot.update(|v| {
        let mut next = v.clone();
        next.push("b".to_owned());
        next
    });
    assert_eq!(slot.get(), ["a", "b"]);
    assert_eq!(mem.get(keys::FAVORITES).unwrap().as_deref(), Some(r#"["a","b"]"#));
}

#[test]
fn modify_mutates_in_place() {
    let (mem, store) = backed();
    let slot = store.open(keys::MUSIC_SHUFFLE, false);
    slot.modify(|v| *v = !*v);
    assert!(slot.get());
    assert_eq!(mem.get(keys::MUSIC_SHUFFLE).unwrap().as_deref(), Some("true"));
}

#[test]
fn value_survives_reopen() {
    let (_mem, store) = backed();
    store.open(keys::LANGUAGE, "vi".to_owned()).set("en".to_owned());
    assert_eq!(store.open(keys::LANGUAGE, "vi".to_owned()).get(), "en");
}

#[test]
fn float_survives_reopen_bit_for_bit() {
    let (_mem, store) = backed();
    for volume in [412.0_f64 / 1017.0, 0.1 + 0.2, 1.0 / 3.0, 39.430_133_835_633_676 / 100.0] {
        store.open(keys::MUSIC_VOLUME, 0.65).set(volume);
        let reopened: f64 = store.open(keys::MUSIC_VOLUME, 0.65).get();
        assert_eq!(reopened.to_bits(), volume.to_bits(), "{volume}");
    }
}

#[test]
fn dragged_layout_survives_reopen() {
    let (_mem, store) = backed();
    let mut items = board::seed::default_items();
    for (i, item) in items.iter_mut().enumerate() {
        let step = f64::from(u32::try_from(i).unwrap_or_default());
        item.x = (412.0 + step * 37.3) / 1017.0 * 100.0;
        item.y = 39.430_133_835_633_676 - step / 7.0;
        item.rotate = step * 2.0 / 3.0;
    }
    store.open(keys::BOARD_ITEMS, Vec::<board::doc::BoardItem>::new()).set(items.clone());
    assert_eq!(store.open(keys::BOARD_ITEMS, Vec::<board::doc::BoardItem>::new()).get(), items);
}

#[test]
fn clones_share_value() {
    let (_mem, store) = backed();
    let a = store.open(keys::MUSIC_COLLAPSED, false);
    let b = a.clone();
    a.set(true);
    assert!(b.get());
    assert_eq!(b.key(), keys::MUSIC_COLLAPSED);
}

#[test]
fn with_reads_without_clone() {
    let (_mem, store) = backed();
    let slot = store.open(keys::FAVORITES, vec!["x".to_owned(), "y".to_owned()]);
    assert_eq!(slot.with(Vec::len), 2);
}

// =============================================================
// Failed writes
// =============================================================

#[test]
fn quota_failure_keeps_memory_value() {
    let mem = Rc::new(MemoryStorage::with_quota(40));
    let store = Store::new(Rc::clone(&mem));
    let slot = store.open(keys::START_DATE, "2022-11-04".to_owned());
    slot.set("2022-11-05".to_owned());
    assert_eq!(mem.get(keys::START_DATE).unwrap().as_deref(), Some("\"2022-11-05\""));

    slot.set("x".repeat(64));
    assert_eq!(slot.get(), "x".repeat(64));
    assert_eq!(mem.get(keys::START_DATE).unwrap().as_deref(), Some("\"2022-11-05\""));
}
