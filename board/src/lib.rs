//! Scrapbook board engine.
//!
//! This crate owns everything that happens on the freeform scrapbook board:
//! the item model (photos, notes, stickers), the in-memory item store, the
//! pointer drag/click state machine, create/edit/delete/re-stack operations,
//! and the JSON export/import format with its validation rules. It has no
//! browser dependencies; the host layer feeds it pointer events and bounding
//! rectangles, and mirrors the resulting item list into durable storage.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::BoardCore`]: input handlers, CRUD, host [`engine::Action`]s |
//! | [`doc`] | Item types, variant enums, sparse patches, and the item store |
//! | [`geometry`] | Points, client rectangles, percentage conversion |
//! | [`input`] | Pointer events and the drag session state machine |
//! | [`transfer`] | Export document and validated import |
//! | [`seed`] | The built-in default layout |
//! | [`consts`] | Shared numeric constants (click threshold, defaults) |

pub mod consts;
pub mod doc;
pub mod engine;
pub mod geometry;
pub mod input;
pub mod seed;
pub mod transfer;
