//! Persisted snapshot of the ledger.
//!
//! The on-disk shape is a JSON object:
//!
//! ```json
//! { "theme": "dark", "expr": "2+2", "entries": [ { "id": "...", "expr": "1+1",
//!   "value": 2.0, "label": "coffee", "created_at": "2026-01-01T00:00:00Z" } ] }
//! ```
//!
//! Decoding is forgiving: a partly damaged file still yields every entry
//! that parses.

use serde::Serialize;
use uuid::Uuid;

use crate::error::{Result, TapeError};
use crate::format::clamp_label;
use crate::ledger::{Entry, Theme, MAX_LABEL_LEN};

/// Ledger state as stored by a [`SnapshotStore`](super::SnapshotStore).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Snapshot {
    pub theme: Theme,
    /// Current (uncommitted) expression
    pub expr: String,
    /// Newest first
    pub entries: Vec<Entry>,
}

impl Snapshot {
    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode a stored snapshot.
    ///
    /// - an unknown or missing theme becomes dark
    /// - a missing or non-string `expr` becomes empty
    /// - an entry whose id is missing or not a UUID gets a fresh one
    /// - entries that do not decode, or whose value is not finite, are dropped
    /// - labels are trimmed and clamped again
    ///
    /// # Errors
    ///
    /// Returns `TapeError::Validation` when the text is not a JSON object.
    pub fn from_json(text: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        let object = value
            .as_object()
            .ok_or_else(|| TapeError::Validation("Snapshot is not a JSON object".to_string()))?;

        let theme = object
            .get("theme")
            .and_then(|v| v.as_str())
            .map(Theme::from_lossy)
            .unwrap_or_default();
        let expr = object
            .get("expr")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();

        let raw_entries = object
            .get("entries")
            .and_then(|v| v.as_array())
            .map(Vec::as_slice)
            .unwrap_or_default();
        let mut entries = Vec::with_capacity(raw_entries.len());
        for raw in raw_entries {
            match serde_json::from_value::<Entry>(with_uuid_id(raw)) {
                Ok(mut entry) if entry.value.is_finite() => {
                    entry.label = clamp_label(&entry.label, MAX_LABEL_LEN);
                    entries.push(entry);
                }
                Ok(entry) => log::warn!("Dropping entry {} with non-finite value", entry.id),
                Err(err) => log::warn!("Dropping malformed entry: {}", err),
            }
        }

        Ok(Self {
            theme,
            expr,
            entries,
        })
    }
}

/// Copy of `raw` whose `id` is a UUID string.
fn with_uuid_id(raw: &serde_json::Value) -> serde_json::Value {
    let mut raw = raw.clone();
    if let Some(object) = raw.as_object_mut() {
        let valid = object
            .get("id")
            .and_then(|v| v.as_str())
            .is_some_and(|id| Uuid::parse_str(id).is_ok());
        if !valid {
            let id = Uuid::new_v4();
            log::warn!("Entry id {:?} is not a UUID; using {}", object.get("id"), id);
            object.insert("id".to_string(), serde_json::Value::String(id.to_string()));
        }
    }
    raw
}
