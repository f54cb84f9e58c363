//! Love-story scrapbook: persisted app state around the scrapbook board.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`store`] | Typed slots written through to localStorage (or memory) |
//! | [`state`] | Shared `AppContext`, settings, music, gallery, games, board page |
//! | [`backup`] | Whole-app backup, restore and wipe |
//! | [`util`] | Anniversary math, confirmation, browser glue |
//! | [`logging`] | Logger installation |
//!
//! The board engine itself lives in the `board` crate and has no storage or
//! browser dependencies.

pub mod backup;
pub mod logging;
pub mod state;
pub mod store;
pub mod util;

pub use logging::init_logging;
pub use state::AppContext;
pub use store::Store;
