//! Shared numeric constants for the board crate.

// ── Coordinates ─────────────────────────────────────────────────

/// Lower bound for item centre coordinates, in percent of the board.
pub const PERCENT_MIN: f64 = 0.0;

/// Upper bound for item centre coordinates, in percent of the board.
pub const PERCENT_MAX: f64 = 100.0;

// ── Gestures ────────────────────────────────────────────────────

/// Pointer travel in CSS pixels (either axis) that turns a press into a drag.
/// Travel must be strictly greater than this value.
pub const CLICK_THRESHOLD_PX: f64 = 3.0;

// ── New items ───────────────────────────────────────────────────

/// Centre of a freshly added note.
pub const NEW_NOTE_X: f64 = 50.0;
pub const NEW_NOTE_Y: f64 = 50.0;
pub const NEW_NOTE_ROTATE: f64 = -2.0;
pub const NEW_NOTE_WIDTH: f64 = 320.0;

/// Centre of a freshly added sticker.
pub const NEW_STICKER_X: f64 = 50.0;
pub const NEW_STICKER_Y: f64 = 40.0;
pub const NEW_STICKER_ROTATE: f64 = 2.0;

// ── Transfer ────────────────────────────────────────────────────

/// Schema version written into exported board files.
pub const EXPORT_VERSION: u32 = 1;
