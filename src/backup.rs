//! Whole-app backup, restore and wipe over the `lovestory:` keys.
//!
//! DESIGN
//! ======
//! A backup is every app-owned key with its stored JSON parsed back into a
//! value, so the file reads naturally and survives a round trip. Values that
//! were never valid JSON are carried as plain strings. Restore writes each
//! entry back re-serialized; the host reloads afterwards so every slot is
//! reopened from storage.
//!
//! ERROR HANDLING
//! ==============
//! Parsing and shape checks happen before the user is asked. Keys outside the
//! app's prefix are skipped on restore and never touched by a wipe.

#[cfg(test)]
#[path = "backup_test.rs"]
mod backup_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::state::Language;
use crate::store::keys;
use crate::store::{Storage, StorageError};
use crate::util::confirm::Confirm;

/// Format version written into every backup.
pub const BACKUP_VERSION: u32 = 1;

#[derive(Debug, thiserror::Error)]
pub enum BackupError {
    #[error("backup is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("backup has no `data` object")]
    MissingData,
    #[error("failed to format backup timestamp: {0}")]
    Timestamp(#[from] time::error::Format),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Backup file body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Backup {
    pub version: u32,
    pub created_at: String,
    pub data: Map<String, Value>,
}

impl Backup {
    /// Pretty-printed JSON for download.
    ///
    /// # Errors
    ///
    /// Returns [`BackupError::Malformed`] if serialization fails.
    pub fn to_json(&self) -> Result<String, BackupError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Result of a confirmed operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The user agreed; this many keys were written or removed.
    Applied(usize),
    /// The user said no; storage is untouched.
    Declined,
}

/// Status shown on the settings page after a backup action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackupNotice {
    Downloaded,
    InvalidFormat,
    Unreadable,
}

impl BackupNotice {
    #[must_use]
    pub fn message(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::Downloaded, Language::Vi) => "Đã tải file sao lưu.",
            (Self::Downloaded, Language::En) => "Backup file downloaded.",
            (Self::InvalidFormat, Language::Vi) => "File không đúng định dạng. Cần có field `data`.",
            (Self::InvalidFormat, Language::En) => "Wrong file format. A `data` field is required.",
            (Self::Unreadable, Language::Vi) => "Không đọc được file sao lưu. Hãy thử lại.",
            (Self::Unreadable, Language::En) => "Could not read the backup file. Please try again.",
        }
    }
}

impl From<&BackupError> for BackupNotice {
    fn from(err: &BackupError) -> Self {
        match err {
            BackupError::MissingData => Self::InvalidFormat,
            BackupError::Malformed(_) | BackupError::Timestamp(_) | BackupError::Storage(_) => Self::Unreadable,
        }
    }
}

fn restore_prompt(language: Language) -> &'static str {
    match language {
        Language::Vi => "Khôi phục sẽ ghi đè dữ liệu hiện tại và tải lại trang. Tiếp tục?",
        Language::En => "Restoring overwrites the current data and reloads the page. Continue?",
    }
}

fn wipe_prompt(language: Language) -> &'static str {
    match language {
        Language::Vi => "Xoá toàn bộ dữ liệu local (theme, nhạc, yêu thích, ghi chú, kỷ lục). Tiếp tục?",
        Language::En => "Delete all local data (theme, music, favorites, notes, records)?",
    }
}

/// Snapshot every app-owned key in `storage`.
///
/// # Errors
///
/// Returns [`BackupError::Storage`] if the backend cannot be read and
/// [`BackupError::Timestamp`] if `now` cannot be formatted.
pub fn create_backup(storage: &dyn Storage, now: OffsetDateTime) -> Result<Backup, BackupError> {
    let mut data = Map::new();
    for key in storage.keys()?.into_iter().filter(|k| keys::is_app_key(k)) {
        let Some(raw) = storage.get(&key)? else {
            continue;
        };
        let value = serde_json::from_str(&raw).unwrap_or(Value::String(raw));
        data.insert(key, value);
    }
    Ok(Backup { version: BACKUP_VERSION, created_at: now.format(&Rfc3339)?, data })
}

/// `lovestory-backup-YYYY-MM-DD.json` for `now`.
#[must_use]
pub fn backup_file_name(now: OffsetDateTime) -> String {
    format!("lovestory-backup-{}.json", board::transfer::date_stamp(now))
}

/// Write the entries of a backup file back into `storage` once the user
/// agrees. Only the `data` object is required; version and timestamp are
/// informational.
///
/// # Errors
///
/// Returns [`BackupError::Malformed`] or [`BackupError::MissingData`] before
/// asking, and [`BackupError::Storage`] if a write fails part way.
pub fn restore_backup(
    storage: &dyn Storage,
    text: &str,
    confirm: &dyn Confirm,
    language: Language,
) -> Result<Outcome, BackupError> {
    let parsed: Value = serde_json::from_str(text).inspect_err(|e| {
        tracing::warn!(error = %e, "backup file is not JSON");
    })?;
    let Some(Value::Object(data)) = parsed.get("data") else {
        tracing::warn!("backup file has no data object");
        return Err(BackupError::MissingData);
    };

    if !confirm.confirm(restore_prompt(language)) {
        return Ok(Outcome::Declined);
    }

    let mut written = 0;
    for (key, value) in data {
        if !keys::is_app_key(key) {
            tracing::debug!(key = %key, "skipping foreign key in backup");
            continue;
        }
        let raw = serde_json::to_string(value)?;
        storage.set(key, &raw).inspect_err(|e| {
            tracing::warn!(key = %key, error = %e, "restore write failed");
        })?;
        written += 1;
    }
    tracing::info!(written, "backup restored");
    Ok(Outcome::Applied(written))
}

/// Remove every app-owned key once the user agrees.
///
/// # Errors
///
/// Returns [`BackupError::Storage`] if the backend cannot be listed or a
/// removal fails.
pub fn wipe_local_data(storage: &dyn Storage, confirm: &dyn Confirm, language: Language) -> Result<Outcome, BackupError> {
    if !confirm.confirm(wipe_prompt(language)) {
        return Ok(Outcome::Declined);
    }
    let doomed: Vec<String> = storage.keys()?.into_iter().filter(|k| keys::is_app_key(k)).collect();
    for key in &doomed {
        storage.remove(key)?;
    }
    tracing::info!(removed = doomed.len(), "local data wiped");
    Ok(Outcome::Applied(doomed.len()))
}
