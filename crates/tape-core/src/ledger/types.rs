//! Data types owned by the ledger.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::TapeError;

/// How long a [`Notice`] stays visible.
pub const NOTICE_TTL: Duration = Duration::from_millis(1200);

/// A committed line on the tape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique identifier for this entry
    pub id: Uuid,

    /// Expression as the user typed it
    pub expr: String,

    /// Evaluated value (always finite)
    pub value: f64,

    /// Caption, trimmed, at most 140 characters
    #[serde(default)]
    pub label: String,

    /// When this entry was added to the tape
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Entry {
    pub(crate) fn new(expr: impl Into<String>, value: f64, label: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            expr: expr.into(),
            value,
            label: label.into(),
            created_at: Utc::now(),
        }
    }
}

/// Color theme remembered with the tape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Anything other than `"light"` is dark.
    pub fn from_lossy(value: &str) -> Self {
        if value == "light" {
            Theme::Light
        } else {
            Theme::Dark
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = TapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(TapeError::Validation(format!(
                "Unknown theme: {} (use dark or light)",
                other
            ))),
        }
    }
}

/// Everything the ledger persists, plus the derived total.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LedgerState {
    /// Newest first
    pub entries: Vec<Entry>,
    /// Sum of `entries[*].value`
    pub total: f64,
    pub theme: Theme,
    pub current_expr: String,
}

impl LedgerState {
    pub(crate) fn recompute_total(&mut self) {
        self.total = self.entries.iter().fold(0.0, |acc, entry| acc + entry.value);
    }
}

/// An evaluated expression waiting for the user to label it.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingLabel {
    pub expr: String,
    pub value: f64,
}

/// Ledger state machine position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Idle,
    AwaitingLabel,
}

/// A short-lived message for the user, e.g. why `=` did nothing.
#[derive(Debug, Clone)]
pub struct Notice {
    pub message: String,
    created: Instant,
}

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            created: Instant::now(),
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created) >= NOTICE_TTL
    }
}

impl From<&TapeError> for Notice {
    fn from(err: &TapeError) -> Self {
        Notice::new(err.to_string())
    }
}

/// Result of a successful [`commit`](super::Ledger::commit).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// An entry was created with the inline label.
    Added(Uuid),
    /// The value is held until [`resolve_label`](super::Ledger::resolve_label).
    AwaitingLabel,
    /// A label was already pending; nothing changed.
    AlreadyPending,
}

/// Result of [`append_key`](super::Ledger::append_key).
#[derive(Debug, Clone)]
pub enum KeyOutcome {
    /// The expression changed.
    Changed,
    /// The key was not allowed here; nothing changed.
    Rejected,
    /// `=` replaced the expression with its formatted value.
    Evaluated(f64),
    /// `=` failed; the expression is untouched.
    Failed(Notice),
}

/// New content for an existing entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Replacement {
    /// Re-evaluate this expression.
    Expr(String),
    /// Use this value directly.
    Value(f64),
}
