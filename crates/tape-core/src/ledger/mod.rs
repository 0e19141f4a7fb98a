//! The tape ledger.
//!
//! [`Ledger`] owns the entries, the running total, the expression being
//! typed and the pending-label state machine:
//!
//! ```text
//! Idle --commit(no label)--> AwaitingLabel --resolve_label--> Idle
//! ```
//!
//! Every structural change recomputes the total from the entries and hands a
//! [`Snapshot`] to the store. Store failures are logged and never affect the
//! in-memory state.

mod keypad;
mod types;

pub use keypad::{parse_keys, Key, MAX_EXPR_LEN};
pub use types::{
    CommitOutcome, Entry, KeyOutcome, LedgerState, Mode, Notice, PendingLabel, Replacement,
    Theme, NOTICE_TTL,
};

use uuid::Uuid;

use crate::error::{Result, TapeError};
use crate::expr::evaluate;
use crate::format::{clamp_label, format_number, Decimals};
use crate::storage::{Snapshot, SnapshotStore};
use keypad::Edit;

/// Longest label kept on an entry, in characters.
pub const MAX_LABEL_LEN: usize = 140;

/// Fractional digits used when an entry is edited by value.
pub const DEFAULT_EDIT_DECIMALS: usize = 2;

/// Evaluate `expr`, refusing results that are not finite.
fn evaluate_finite(expr: &str) -> Result<f64> {
    let value = evaluate(expr)?;
    if !value.is_finite() {
        return Err(TapeError::NonFinite(expr.trim().to_string()));
    }
    Ok(value)
}

/// A calculator tape backed by a [`SnapshotStore`].
#[derive(Debug)]
pub struct Ledger<S: SnapshotStore> {
    state: LedgerState,
    pending: Option<PendingLabel>,
    store: S,
    edit_decimals: usize,
}

impl<S: SnapshotStore> Ledger<S> {
    /// Start with an empty tape, ignoring anything in the store.
    pub fn new(store: S) -> Self {
        Self {
            state: LedgerState::default(),
            pending: None,
            store,
            edit_decimals: DEFAULT_EDIT_DECIMALS,
        }
    }

    /// Restore the tape from the store.
    ///
    /// An absent or unreadable snapshot yields an empty tape.
    pub fn open(store: S) -> Self {
        let snapshot = match store.load() {
            Ok(snapshot) => snapshot.unwrap_or_default(),
            Err(err) => {
                log::warn!("Ignoring unreadable tape snapshot: {}", err);
                Snapshot::default()
            }
        };

        let mut ledger = Self::new(store);
        ledger.state.theme = snapshot.theme;
        ledger.state.current_expr = snapshot.expr;
        ledger.state.entries = snapshot.entries;
        ledger.state.recompute_total();
        log::debug!(
            "Opened tape with {} entries, total {}",
            ledger.state.entries.len(),
            ledger.state.total
        );
        ledger
    }

    /// Set the fractional digits used by [`Replacement::Value`] edits.
    pub fn with_edit_decimals(mut self, decimals: usize) -> Self {
        self.edit_decimals = decimals;
        self
    }

    pub fn state(&self) -> &LedgerState {
        &self.state
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &[Entry] {
        &self.state.entries
    }

    pub fn total(&self) -> f64 {
        self.state.total
    }

    pub fn current_expr(&self) -> &str {
        &self.state.current_expr
    }

    pub fn theme(&self) -> Theme {
        self.state.theme
    }

    pub fn pending(&self) -> Option<&PendingLabel> {
        self.pending.as_ref()
    }

    pub fn mode(&self) -> Mode {
        if self.pending.is_some() {
            Mode::AwaitingLabel
        } else {
            Mode::Idle
        }
    }

    pub fn find_entry(&self, id: Uuid) -> Option<&Entry> {
        self.state.entries.iter().find(|entry| entry.id == id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The persisted view of the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            theme: self.state.theme,
            expr: self.state.current_expr.clone(),
            entries: self.state.entries.clone(),
        }
    }

    /// Replace the expression being typed.
    pub fn set_expr(&mut self, text: impl Into<String>) {
        self.state.current_expr = text.into();
        self.persist();
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.state.theme = theme;
        self.persist();
    }

    /// Apply one keypad press to the current expression.
    pub fn append_key(&mut self, key: Key) -> KeyOutcome {
        if key == Key::Equals {
            return self.evaluate_in_place();
        }
        match keypad::edit(&self.state.current_expr, key) {
            Edit::Replace(next) => {
                self.state.current_expr = next;
                self.persist();
                KeyOutcome::Changed
            }
            Edit::Reject => {
                log::debug!("Rejected key {} on {:?}", key, self.state.current_expr);
                KeyOutcome::Rejected
            }
        }
    }

    fn evaluate_in_place(&mut self) -> KeyOutcome {
        match evaluate_finite(&self.state.current_expr) {
            Ok(value) => {
                self.state.current_expr = format_number(value, Decimals::Auto);
                self.persist();
                KeyOutcome::Evaluated(value)
            }
            Err(err) => KeyOutcome::Failed(Notice::from(&err)),
        }
    }

    /// The formatted value of the current expression, if it evaluates.
    pub fn preview(&self) -> Option<String> {
        if self.state.current_expr.trim().is_empty() {
            return None;
        }
        evaluate_finite(&self.state.current_expr)
            .ok()
            .map(|value| format!("= {}", format_number(value, Decimals::Auto)))
    }

    /// Add the current expression to the tape.
    ///
    /// With a non-empty `inline_label` the entry is created immediately.
    /// Otherwise the evaluated expression waits for [`resolve_label`].
    ///
    /// # Errors
    ///
    /// Returns `TapeError::Eval` or `TapeError::NonFinite` when the
    /// expression does not evaluate; nothing changes in that case.
    ///
    /// [`resolve_label`]: Ledger::resolve_label
    pub fn commit(&mut self, inline_label: Option<&str>) -> Result<CommitOutcome> {
        if self.pending.is_some() {
            return Ok(CommitOutcome::AlreadyPending);
        }

        let expr = self.state.current_expr.trim().to_string();
        let value = evaluate_finite(&expr)?;
        let label = inline_label
            .map(|text| clamp_label(text, MAX_LABEL_LEN))
            .unwrap_or_default();

        if label.is_empty() {
            log::debug!("Awaiting label for {} = {}", expr, value);
            self.pending = Some(PendingLabel { expr, value });
            return Ok(CommitOutcome::AwaitingLabel);
        }

        let id = self.push_entry(Entry::new(expr, value, label));
        Ok(CommitOutcome::Added(id))
    }

    /// Finish a commit that was waiting for a label.
    ///
    /// `confirm` keeps the value under `text` (which may be empty); otherwise
    /// the value is discarded. Either way the expression is cleared.
    ///
    /// # Returns
    ///
    /// The new entry's id, or `None` when discarded.
    ///
    /// # Errors
    ///
    /// Returns `TapeError::NoPendingLabel` when no commit is waiting.
    pub fn resolve_label(&mut self, confirm: bool, text: &str) -> Result<Option<Uuid>> {
        let pending = self.pending.take().ok_or(TapeError::NoPendingLabel)?;

        if confirm {
            let entry = Entry::new(pending.expr, pending.value, clamp_label(text, MAX_LABEL_LEN));
            return Ok(Some(self.push_entry(entry)));
        }

        log::debug!("Discarded pending value {}", pending.value);
        self.state.current_expr.clear();
        self.state.recompute_total();
        self.persist();
        Ok(None)
    }

    fn push_entry(&mut self, entry: Entry) -> Uuid {
        let id = entry.id;
        log::debug!("Adding entry {} = {}", entry.expr, entry.value);
        self.state.entries.insert(0, entry);
        self.state.current_expr.clear();
        self.state.recompute_total();
        self.persist();
        id
    }

    /// Overwrite an entry's expression, value and label.
    ///
    /// # Errors
    ///
    /// Returns `TapeError::NotFound` for an unknown id, or an evaluation
    /// error for a replacement that does not yield a finite value. The entry
    /// is unchanged on error.
    pub fn edit_entry(&mut self, id: Uuid, replacement: Replacement, label: &str) -> Result<()> {
        let index = self
            .state
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or_else(|| TapeError::NotFound(id.to_string()))?;

        let (expr, value) = match replacement {
            Replacement::Expr(expr) => {
                let value = evaluate_finite(&expr)?;
                (expr.trim().to_string(), value)
            }
            Replacement::Value(value) => {
                if !value.is_finite() {
                    return Err(TapeError::NonFinite(value.to_string()));
                }
                (format_number(value, Decimals::Fixed(self.edit_decimals)), value)
            }
        };

        let entry = &mut self.state.entries[index];
        entry.expr = expr;
        entry.value = value;
        entry.label = clamp_label(label, MAX_LABEL_LEN);
        log::debug!("Edited entry {}", id);

        self.state.recompute_total();
        self.persist();
        Ok(())
    }

    /// Remove an entry. Returns `false` when no entry has this id.
    pub fn delete_entry(&mut self, id: Uuid) -> bool {
        let before = self.state.entries.len();
        self.state.entries.retain(|entry| entry.id != id);
        if self.state.entries.len() == before {
            return false;
        }
        log::debug!("Deleted entry {}", id);
        self.state.recompute_total();
        self.persist();
        true
    }

    /// Empty the tape and the expression. The theme is kept.
    pub fn reset(&mut self) {
        self.state.entries.clear();
        self.state.current_expr.clear();
        self.pending = None;
        self.state.recompute_total();
        if let Err(err) = self.store.clear() {
            log::warn!("Failed to clear stored tape: {}", err);
        }
        self.persist();
    }

    /// Plain-text tape, oldest entry first, ending with the total.
    pub fn export_text(&self) -> String {
        let mut lines: Vec<String> = self
            .state
            .entries
            .iter()
            .rev()
            .map(|entry| {
                let mut line = format!(
                    "{} | {}",
                    format_number(entry.value, Decimals::Auto),
                    entry.expr
                );
                if !entry.label.is_empty() {
                    line.push_str(" — ");
                    line.push_str(&entry.label);
                }
                line
            })
            .collect();
        lines.push(format!("= {}", format_number(self.state.total, Decimals::Auto)));
        lines.join("\n")
    }

    fn persist(&mut self) {
        let snapshot = self.snapshot();
        if let Err(err) = self.store.save(&snapshot) {
            log::warn!("Failed to save tape: {}", err);
        }
    }
}
