//! In-memory snapshot store.

use super::traits::SnapshotStore;
use super::types::Snapshot;
use crate::error::{Result, TapeError};

/// Holds the serialized snapshot in memory.
///
/// Useful for embedding the ledger without a filesystem and for exercising
/// the ledger's handling of damaged or unavailable storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    raw: Option<String>,
    failing: bool,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with arbitrary stored text, valid or not.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
            ..Self::default()
        }
    }

    /// A store whose every operation fails.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn set_failing(&mut self, failing: bool) {
        self.failing = failing;
    }

    /// The stored text, if any.
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    fn check(&self) -> Result<()> {
        if self.failing {
            return Err(TapeError::Storage("Store unavailable".to_string()));
        }
        Ok(())
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Result<Option<Snapshot>> {
        self.check()?;
        match &self.raw {
            Some(raw) => Snapshot::from_json(raw).map(Some),
            None => Ok(None),
        }
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<()> {
        self.check()?;
        self.raw = Some(snapshot.to_json()?);
        self.saves += 1;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.check()?;
        self.raw = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let mut store = MemoryStore::new();
        assert!(store.load().unwrap().is_none());
        let snapshot = Snapshot {
            expr: "1".to_string(),
            ..Snapshot::default()
        };
        store.save(&snapshot).unwrap();
        assert_eq!(store.load().unwrap(), Some(snapshot));
        assert_eq!(store.save_count(), 1);
        store.clear().unwrap();
        assert!(store.raw().is_none());
    }

    #[test]
    fn test_failing_store() {
        let mut store = MemoryStore::failing();
        assert!(store.load().is_err());
        assert!(store.save(&Snapshot::default()).is_err());
        assert!(store.clear().is_err());
        store.set_failing(false);
        assert!(store.save(&Snapshot::default()).is_ok());
    }
}
