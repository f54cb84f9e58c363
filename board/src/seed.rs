//! The built-in default layout shown on first visit and after a reset.

#[cfg(test)]
#[path = "seed_test.rs"]
mod seed_test;

use crate::doc::{BoardItem, ItemKind, NoteItem, NoteVariant, PhotoItem, StickerItem, StickerVariant};

fn photo(id: &str, src: &str, alt: &str, caption: &str, meta: &str, at: (f64, f64, f64, i64), width: f64) -> BoardItem {
    let (x, y, rotate, z) = at;
    BoardItem {
        id: id.to_owned(),
        x,
        y,
        rotate,
        z,
        kind: ItemKind::Photo(PhotoItem {
            src: src.to_owned(),
            alt: alt.to_owned(),
            caption: Some(caption.to_owned()),
            meta: Some(meta.to_owned()),
            width,
        }),
    }
}

fn sticker(id: &str, text: &str, variant: StickerVariant, at: (f64, f64, f64, i64)) -> BoardItem {
    let (x, y, rotate, z) = at;
    BoardItem {
        id: id.to_owned(),
        x,
        y,
        rotate,
        z,
        kind: ItemKind::Sticker(StickerItem { text: text.to_owned(), variant }),
    }
}

/// Six seeded items: three photos, one note, two stickers, stacked `z = 1..=6`.
#[must_use]
pub fn default_items() -> Vec<BoardItem> {
    vec![
        photo(
            "board-photo-1",
            "/main.jpg",
            "Ảnh kỷ niệm của chúng ta",
            "Chúng ta",
            "Mãi mãi",
            (25.0, 32.0, -3.0, 1),
            270.0,
        ),
        photo(
            "board-photo-2",
            "/cuti/PXL_20240804_042658230.jpg",
            "Nắng sớm",
            "Nắng sớm",
            "Thg 8 2024",
            (70.0, 28.0, 3.0, 2),
            240.0,
        ),
        photo(
            "board-photo-3",
            "/tet_holiday_2024/PXL_20230121_170147705.jpg",
            "Tết nhà anh",
            "Tết nhà anh",
            "Thg 1 2023",
            (62.0, 70.0, -1.0, 3),
            260.0,
        ),
        BoardItem {
            id: "board-note-1".to_owned(),
            x: 28.0,
            y: 78.0,
            rotate: 2.0,
            z: 4,
            kind: ItemKind::Note(NoteItem {
                title: Some("Ghi chú nhỏ".to_owned()),
                text: "Kéo thả ảnh, note và sticker để xếp thành một trang scrapbook.\n\nBạn có thể thay nội dung sau."
                    .to_owned(),
                variant: NoteVariant::Lemon,
                width: 320.0,
            }),
        },
        sticker("board-sticker-1", "LOVE", StickerVariant::Accent, (48.0, 52.0, -6.0, 5)),
        sticker("board-sticker-2", "câu chuyện", StickerVariant::Mint, (84.0, 54.0, 4.0, 6)),
    ]
}
