//! Snapshot persistence.
//!
//! This module provides:
//! - `SnapshotStore` trait: the load/save/clear contract the ledger relies on
//! - `Snapshot`: the persisted shape and its lenient decoder
//! - `JsonFileStore`: one JSON file, atomically replaced
//! - `MemoryStore`: in-process store

pub mod json_file;
pub mod memory;
pub mod traits;
pub mod types;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use traits::SnapshotStore;
pub use types::Snapshot;
