//! UI primitives for the Tape CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, color) and the tape's palette
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badges, palette, styling via owo-colors
//! - **Render**: Tables, headers, receipts, hints
//! - **Format**: String utilities (truncate, ids, dates)

mod context;
pub mod format;
pub mod mode;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use mode::OutputFormat;
pub use theme::{styled, Badge};

pub use render::{badge, header, kv, print, print_error, receipt, table, Column};

pub use format::{format_datetime, plain_spaces, short_id, single_line, truncate};
