#![allow(clippy::float_cmp)]

use std::cell::RefCell;
use std::rc::Rc;

use board::doc::ItemKind;

use super::*;
use crate::store::{MemoryStorage, Storage, Store};
use crate::util::confirm::Always;

fn page() -> (Rc<MemoryStorage>, AppContext, BoardPage) {
    let mem = Rc::new(MemoryStorage::new());
    let ctx = AppContext::new(Store::new(Rc::clone(&mem)), "");
    let page = BoardPage::open(&ctx);
    (mem, ctx, page)
}

fn stored_items(mem: &MemoryStorage) -> Option<Vec<BoardItem>> {
    let raw = mem.get(keys::BOARD_ITEMS).unwrap()?;
    Some(serde_json::from_str(&raw).unwrap())
}

fn now() -> OffsetDateTime {
    OffsetDateTime::from_unix_timestamp(1_760_000_000).unwrap()
}

const BOARD: ClientRect = ClientRect { left: 0.0, top: 0.0, width: 1000.0, height: 500.0 };
const STICKER_RECT: ClientRect = ClientRect { left: 460.0, top: 240.0, width: 40.0, height: 40.0 };

// =============================================================
// Rehydration
// =============================================================

#[test]
fn empty_storage_seeds_default_layout() {
    let (mem, _ctx, page) = page();
    assert_eq!(page.core().items(), default_items().as_slice());
    assert_eq!(stored_items(&mem), None);
}

#[test]
fn stored_layout_is_restored() {
    let (mem, ctx, mut page) = page();
    page.add_sticker();
    let reopened = BoardPage::open(&ctx);
    assert_eq!(reopened.core().items().len(), 7);
    assert_eq!(stored_items(&mem).map(|items| items.len()), Some(7));
}

#[test]
fn corrupt_slot_falls_back_to_seed() {
    let mem = Rc::new(MemoryStorage::new());
    mem.set(keys::BOARD_ITEMS, "[{\"id\":1}]").unwrap();
    let ctx = AppContext::new(Store::new(mem), "");
    assert_eq!(BoardPage::open(&ctx).core().items().len(), 6);
}

fn open_with_slot(raw: &str) -> BoardPage {
    let mem = Rc::new(MemoryStorage::new());
    mem.set(keys::BOARD_ITEMS, raw).unwrap();
    BoardPage::open(&AppContext::new(Store::new(mem), ""))
}

#[test]
fn stored_duplicate_ids_fall_back_to_seed() {
    let page = open_with_slot(
        r#"[{"id":"a","type":"sticker","x":500,"y":-20,"rotate":0,"z":1,"text":"hi","variant":"rose"},
            {"id":"a","type":"sticker","x":1,"y":1,"rotate":0,"z":2,"text":"yo","variant":"ink"}]"#,
    );
    assert_eq!(page.core().items(), default_items().as_slice());
}

#[test]
fn stored_out_of_range_position_is_clamped() {
    let page = open_with_slot(
        r#"[{"id":"a","type":"sticker","x":500,"y":-20,"rotate":0,"z":1,"text":"hi","variant":"rose"},
            {"id":"b","type":"note","x":30,"y":40,"rotate":2,"z":3,"text":"x","variant":"sky","width":240}]"#,
    );
    let items = page.core().items();
    assert_eq!(items.len(), 2);
    assert_eq!((items[0].x, items[0].y), (100.0, 0.0));
    assert_eq!((items[1].x, items[1].y), (30.0, 40.0));
}

#[test]
fn rejected_slot_is_replaced_on_next_edit() {
    let mem = Rc::new(MemoryStorage::new());
    let dup = r#"{"id":"a","type":"sticker","x":5,"y":5,"rotate":0,"z":1,"text":"hi","variant":"rose"}"#;
    mem.set(keys::BOARD_ITEMS, &format!("[{dup},{dup}]")).unwrap();
    let mut page = BoardPage::open(&AppContext::new(Store::new(Rc::clone(&mem)), ""));
    page.add_note();
    let stored = stored_items(&mem).unwrap();
    assert_eq!(stored.len(), 7);
    assert!(stored.iter().all(|item| item.id != "a"));
}

// =============================================================
// Write-through
// =============================================================

#[test]
fn click_persists_z_only() {
    let (mem, _ctx, mut page) = page();
    page.on_pointer_down("board-sticker-1", PointerEvent::new(1, 480.0, 260.0), STICKER_RECT);
    page.on_pointer_move(PointerEvent::new(1, 482.0, 261.0), BOARD);
    let actions = page.on_pointer_up(PointerEvent::new(1, 482.0, 261.0));

    assert!(actions.contains(&Action::SelectionChanged(Some("board-sticker-1".to_owned()))));
    let stored = stored_items(&mem).unwrap();
    let sticker = stored.iter().find(|i| i.id == "board-sticker-1").unwrap();
    assert_eq!(sticker.z, 7);
    assert!((sticker.x - 48.0).abs() < 1e-9);
    assert!((sticker.y - 52.0).abs() < 1e-9);
}

#[test]
fn drag_persists_new_position() {
    let (mem, _ctx, mut page) = page();
    page.on_pointer_down("board-sticker-1", PointerEvent::new(1, 480.0, 260.0), STICKER_RECT);
    page.on_pointer_move(PointerEvent::new(1, 700.0, 100.0), BOARD);
    page.on_pointer_up(PointerEvent::new(1, 700.0, 100.0));

    let stored = stored_items(&mem).unwrap();
    let sticker = stored.iter().find(|i| i.id == "board-sticker-1").unwrap();
    assert!((sticker.x - 70.0).abs() < 1e-9);
    assert!((sticker.y - 20.0).abs() < 1e-9);
    assert_eq!(page.core().selection(), None);
}

#[test]
fn selection_alone_does_not_write() {
    let (mem, _ctx, mut page) = page();
    page.select("board-note-1");
    page.clear_selection();
    assert_eq!(stored_items(&mem), None);
}

#[test]
fn edits_are_written_through() {
    let (mem, _ctx, mut page) = page();
    page.update_item("board-note-1", &ItemPatch { text: Some("hi".to_owned()), ..Default::default() });
    page.rotate_item("board-note-1", 3.0);
    let stored = stored_items(&mem).unwrap();
    let note = stored.iter().find(|i| i.id == "board-note-1").unwrap();
    assert!(matches!(&note.kind, ItemKind::Note(n) if n.text == "hi"));
    assert_eq!(stored, page.core().items());
}

#[test]
fn bring_to_front_is_written_through() {
    let (mem, _ctx, mut page) = page();
    page.bring_to_front("board-photo-1");
    let stored = stored_items(&mem).unwrap();
    assert_eq!(stored.iter().find(|i| i.id == "board-photo-1").map(|i| i.z), Some(7));
}

// =============================================================
// Confirmation
// =============================================================

#[test]
fn declined_delete_keeps_item() {
    let (mem, _ctx, mut page) = page();
    assert!(page.remove_item("board-photo-2", &Always(false)).is_empty());
    assert!(page.core().item("board-photo-2").is_some());
    assert_eq!(stored_items(&mem), None);
}

#[test]
fn confirmed_delete_removes_item() {
    let (mem, _ctx, mut page) = page();
    page.select("board-photo-2");
    page.remove_item("board-photo-2", &Always(true));
    assert!(page.core().item("board-photo-2").is_none());
    assert_eq!(page.core().selection(), None);
    assert_eq!(stored_items(&mem).map(|items| items.len()), Some(5));
}

#[test]
fn delete_of_unknown_id_does_not_ask() {
    let (_mem, _ctx, mut page) = page();
    let asked = RefCell::new(0);
    let confirm = |_: &str| {
        *asked.borrow_mut() += 1;
        true
    };
    assert!(page.remove_item("missing", &confirm).is_empty());
    assert_eq!(*asked.borrow(), 0);
}

#[test]
fn reset_asks_in_active_language() {
    let (_mem, ctx, mut page) = page();
    ctx.settings().set_language(Language::En);
    let asked = RefCell::new(Vec::new());
    let confirm = |message: &str| {
        asked.borrow_mut().push(message.to_owned());
        false
    };
    page.add_note();
    assert!(page.reset(&confirm).is_empty());
    assert_eq!(*asked.borrow(), ["Reset the board to the default layout?"]);
    assert_eq!(page.core().items().len(), 7);
    assert_eq!(page.notice(), None);
}

#[test]
fn confirmed_reset_restores_seed() {
    let (mem, _ctx, mut page) = page();
    page.add_note();
    page.remove_item("board-photo-1", &Always(true));
    page.reset(&Always(true));
    assert_eq!(page.core().items(), default_items().as_slice());
    assert_eq!(page.core().selection(), None);
    assert_eq!(stored_items(&mem), Some(default_items()));
    assert_eq!(page.notice(), Some(&Notice::Reset));
    assert_eq!(page.notice_message().as_deref(), Some("Đã reset bảng về layout mặc định."));
}

// =============================================================
// Export / import
// =============================================================

#[test]
fn export_names_file_by_date() {
    let (_mem, _ctx, mut page) = page();
    let export = page.export(now()).unwrap();
    assert_eq!(export.file_name, "lovestory-board-2025-10-09.json");
    assert!(export.json.contains("\"exportedAt\": \"2025-10-09T08:53:20Z\""));
    assert_eq!(page.notice(), Some(&Notice::Exported));
}

#[test]
fn import_replaces_board_after_confirmation() {
    let (mem, _ctx, mut page) = page();
    let file = r#"{"items":[{"id":"s","type":"sticker","x":120,"y":-5,"rotate":0,"z":2,"text":"hi","variant":"rose"}]}"#;
    page.select("board-note-1");
    page.import(file, &Always(true));

    assert_eq!(page.core().items().len(), 1);
    assert_eq!(page.core().selection(), None);
    let stored = stored_items(&mem).unwrap();
    assert!((stored[0].x - 100.0).abs() < 1e-9);
    assert!(stored[0].y.abs() < 1e-9);
    assert_eq!(page.notice(), Some(&Notice::Imported(1)));
    assert_eq!(page.notice_message().as_deref(), Some("Đã nhập layout (1 item)."));
}

#[test]
fn declined_import_changes_nothing() {
    let (mem, _ctx, mut page) = page();
    let file = r#"[{"id":"s","type":"sticker","x":1,"y":1,"rotate":0,"z":2,"text":"hi","variant":"rose"}]"#;
    assert!(page.import(file, &Always(false)).is_empty());
    assert_eq!(page.core().items().len(), 6);
    assert_eq!(stored_items(&mem), None);
    assert_eq!(page.notice(), None);
}

#[test]
fn invalid_layout_sets_notice_without_asking() {
    let (_mem, _ctx, mut page) = page();
    let asked = RefCell::new(0);
    let confirm = |_: &str| {
        *asked.borrow_mut() += 1;
        true
    };
    page.import(r#"{"version":1}"#, &confirm);
    assert_eq!(page.notice(), Some(&Notice::InvalidLayout));
    assert_eq!(*asked.borrow(), 0);
    assert_eq!(page.core().items().len(), 6);
}

#[test]
fn malformed_json_is_unreadable() {
    let (_mem, ctx, mut page) = page();
    ctx.settings().set_language(Language::En);
    page.import("not json", &Always(true));
    assert_eq!(page.notice(), Some(&Notice::UnreadableFile));
    assert!(page.notice().is_some_and(Notice::is_error));
    assert_eq!(page.notice_message().as_deref(), Some("Could not read the JSON file. Please try again."));
    page.dismiss_notice();
    assert_eq!(page.notice(), None);
}

#[test]
fn export_then_import_round_trips() {
    let (_mem, _ctx, mut page) = page();
    page.add_note();
    page.add_sticker();
    let before = page.core().items().to_vec();
    let export = page.export(now()).unwrap();
    page.reset(&Always(true));
    page.import(&export.json, &Always(true));
    assert_eq!(page.core().items(), before.as_slice());
}
