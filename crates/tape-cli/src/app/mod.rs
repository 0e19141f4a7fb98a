//! Application-level utilities for the Tape CLI.
//!
//! This module provides:
//! - Path resolution for config and tape files
//! - The per-invocation [`AppContext`]
//! - Entry ID resolution (full UUID or unique prefix)

mod context;
mod resolver;

pub use context::AppContext;
pub use resolver::{resolve_config_path, resolve_entry_id};
