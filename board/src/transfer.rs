//! Board export and import.
//!
//! DESIGN
//! ======
//! Export writes `{ version, exportedAt, items }`. Import accepts that shape
//! or a bare item array and validates every element by hand against the item
//! schema instead of trusting serde, so that a bad element can be reported
//! precisely and optional fields of the wrong type are dropped rather than
//! failing the whole file.
//!
//! ERROR HANDLING
//! ==============
//! Validation is all-or-nothing: the first failing element rejects the file
//! and nothing is returned for partial application. Coordinates are clamped
//! into the board, `rotate` is taken as-is, and a fractional `z` is rounded.

#[cfg(test)]
#[path = "transfer_test.rs"]
mod transfer_test;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::consts::EXPORT_VERSION;
use crate::doc::{BoardItem, ItemKind, NoteItem, NoteVariant, PhotoItem, StickerItem, StickerVariant};
use crate::geometry::clamp_percent;

/// Error returned when producing an export document.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to format export timestamp: {0}")]
    Timestamp(#[from] time::error::Format),
    #[error("failed to serialize board: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Error returned by [`parse_import`] and [`validate_items`].
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// The file is not valid JSON.
    #[error("malformed JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    /// Neither a bare array nor an object with an `items` array.
    #[error("expected an item array or an object with an `items` array")]
    NotALayout,
    /// An element is not a JSON object.
    #[error("item {index}: expected an object")]
    NotAnObject { index: usize },
    /// A required field is missing or has the wrong primitive type.
    #[error("item {index}: field `{field}` is missing or has the wrong type")]
    InvalidField { index: usize, field: &'static str },
    /// The `type` discriminant is not photo, note, or sticker.
    #[error("item {index}: unknown item type `{found}`")]
    UnknownType { index: usize, found: String },
    /// A note or sticker `variant` outside the allowed palette.
    #[error("item {index}: unknown variant `{found}`")]
    UnknownVariant { index: usize, found: String },
    /// Two elements share the same id.
    #[error("duplicate item id `{0}`")]
    DuplicateId(String),
}

/// The document written by an export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub version: u32,
    /// RFC 3339 UTC timestamp of the export.
    pub exported_at: String,
    pub items: Vec<BoardItem>,
}

impl ExportDocument {
    /// Build an export document for `items` stamped with `now`.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Timestamp`] if `now` cannot be formatted.
    pub fn new(items: &[BoardItem], now: OffsetDateTime) -> Result<Self, ExportError> {
        Ok(Self {
            version: EXPORT_VERSION,
            exported_at: now.format(&Rfc3339)?,
            items: items.to_vec(),
        })
    }

    /// Pretty-printed JSON with two-space indentation.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Serialize`] if serialization fails.
    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Serialize `items` into an export file body.
///
/// # Errors
///
/// Propagates timestamp formatting and serialization failures.
pub fn export_board(items: &[BoardItem], now: OffsetDateTime) -> Result<String, ExportError> {
    ExportDocument::new(items, now)?.to_json()
}

/// `YYYY-MM-DD` of `now`, used in download file names.
#[must_use]
pub fn date_stamp(now: OffsetDateTime) -> String {
    let date = now.date();
    format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day())
}

/// Parse and validate an import file body.
///
/// # Errors
///
/// Returns [`ImportError::Malformed`] for invalid JSON and the validation
/// errors of [`validate_items`] otherwise.
pub fn parse_import(text: &str) -> Result<Vec<BoardItem>, ImportError> {
    let raw: Value = serde_json::from_str(text)?;
    let items = validate_items(&raw);
    if let Err(ref err) = items {
        tracing::debug!(error = %err, "board import rejected");
    }
    items
}

/// Validate a parsed JSON document as a board layout.
///
/// Accepts a bare array of items or an object with an `items` array.
///
/// # Errors
///
/// Returns the first validation failure; no partial result is produced.
pub fn validate_items(raw: &Value) -> Result<Vec<BoardItem>, ImportError> {
    let list = match raw {
        Value::Array(list) => list,
        Value::Object(obj) => match obj.get("items") {
            Some(Value::Array(list)) => list,
            _ => return Err(ImportError::NotALayout),
        },
        _ => return Err(ImportError::NotALayout),
    };

    let mut seen = HashSet::new();
    let mut parsed = Vec::with_capacity(list.len());
    for (index, value) in list.iter().enumerate() {
        let item = validate_item(index, value)?;
        if !seen.insert(item.id.clone()) {
            return Err(ImportError::DuplicateId(item.id));
        }
        parsed.push(item);
    }
    Ok(parsed)
}

fn validate_item(index: usize, value: &Value) -> Result<BoardItem, ImportError> {
    let Some(obj) = value.as_object() else {
        return Err(ImportError::NotAnObject { index });
    };
    let fields = Fields { index, obj };

    let id = fields.string("id")?;
    let kind_name = fields.string("type")?;
    if !matches!(kind_name.as_str(), "photo" | "note" | "sticker") {
        return Err(ImportError::UnknownType { index, found: kind_name });
    }
    let x = fields.number("x")?;
    let y = fields.number("y")?;
    let rotate = fields.number("rotate")?;
    let z = fields.integer("z")?;

    let kind = match kind_name.as_str() {
        "photo" => ItemKind::Photo(PhotoItem {
            src: fields.string("src")?,
            alt: fields.string("alt")?,
            caption: fields.optional_string("caption"),
            meta: fields.optional_string("meta"),
            width: fields.number("width")?,
        }),
        "note" => {
            let text = fields.string("text")?;
            let width = fields.number("width")?;
            let variant = fields.string("variant")?;
            let Some(variant) = NoteVariant::parse(&variant) else {
                return Err(ImportError::UnknownVariant { index, found: variant });
            };
            ItemKind::Note(NoteItem { title: fields.optional_string("title"), text, variant, width })
        }
        _ => {
            let text = fields.string("text")?;
            let variant = fields.string("variant")?;
            let Some(variant) = StickerVariant::parse(&variant) else {
                return Err(ImportError::UnknownVariant { index, found: variant });
            };
            ItemKind::Sticker(StickerItem { text, variant })
        }
    };

    Ok(BoardItem {
        id,
        x: clamp_percent(x),
        y: clamp_percent(y),
        rotate,
        z,
        kind,
    })
}

/// Typed field access for one element under validation.
struct Fields<'a> {
    index: usize,
    obj: &'a Map<String, Value>,
}

impl Fields<'_> {
    fn invalid(&self, field: &'static str) -> ImportError {
        ImportError::InvalidField { index: self.index, field }
    }

    fn string(&self, field: &'static str) -> Result<String, ImportError> {
        self.obj
            .get(field)
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or_else(|| self.invalid(field))
    }

    fn optional_string(&self, field: &'static str) -> Option<String> {
        self.obj.get(field).and_then(Value::as_str).map(str::to_owned)
    }

    fn number(&self, field: &'static str) -> Result<f64, ImportError> {
        self.obj
            .get(field)
            .and_then(Value::as_f64)
            .filter(|v| v.is_finite())
            .ok_or_else(|| self.invalid(field))
    }

    /// Any finite number, rounded. Values past the `i64` range saturate.
    #[allow(clippy::cast_possible_truncation)]
    fn integer(&self, field: &'static str) -> Result<i64, ImportError> {
        let Some(value) = self.obj.get(field) else {
            return Err(self.invalid(field));
        };
        if let Some(z) = value.as_i64() {
            return Ok(z);
        }
        Ok(self.number(field)?.round() as i64)
    }
}
