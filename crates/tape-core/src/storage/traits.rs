//! Snapshot store trait definition.
//!
//! The `SnapshotStore` trait is the persistence boundary of the ledger. A
//! store keeps exactly one snapshot (theme, current expression, entries) and
//! can be backed by anything that behaves like a key-value slot.

use super::types::Snapshot;
use crate::error::Result;

/// Durable slot for the ledger snapshot.
///
/// The ledger treats every call as best-effort: errors are logged and
/// otherwise ignored, so implementations should report failures rather than
/// try to recover from them.
pub trait SnapshotStore: Send {
    /// Read the stored snapshot.
    ///
    /// # Returns
    ///
    /// Returns `Ok(None)` when nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns `TapeError::Storage` if the backend cannot be read, or
    /// `TapeError::Validation` if the stored data is not a snapshot.
    fn load(&self) -> Result<Option<Snapshot>>;

    /// Replace the stored snapshot.
    fn save(&mut self, snapshot: &Snapshot) -> Result<()>;

    /// Remove the stored snapshot. Clearing an empty store succeeds.
    fn clear(&mut self) -> Result<()>;
}
