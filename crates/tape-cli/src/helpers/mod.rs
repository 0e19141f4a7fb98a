//! Input and parsing helper functions for the CLI.
//!
//! This module provides utilities for:
//! - Label prompts and confirmations (`input`)
//! - Output format and value parsing (`parsing`)

mod input;
mod parsing;

pub use input::{confirm, prompt_label, LabelChoice};
pub use parsing::{join_words, parse_output_format, parse_value};
