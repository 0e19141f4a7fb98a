//! Output formatting helpers for the CLI.
//!
//! This module provides formatting utilities for displaying entries
//! in various formats (JSON, table, plain text).

mod json;
mod text;

pub use json::{entries_json, entry_json, evaluation_json, expr_json, total_json};
pub use text::{display_number, print_entry_list, print_expr_status};
