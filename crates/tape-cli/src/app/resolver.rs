//! Path and entry ID resolution.

use std::path::PathBuf;

use tape_core::ledger::Entry;
use uuid::Uuid;

use crate::config::{default_config_path, default_tape_path, TapeConfig};
use crate::constants::MIN_ID_PREFIX_LEN;
use crate::errors::CliError;

/// Resolve the config file path, checking TAPE_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("TAPE_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the tape file path: `--tape`/`TAPE_PATH`, then config, then the
/// XDG data directory.
pub fn resolve_tape_path(flag: Option<&str>, config: Option<&TapeConfig>) -> anyhow::Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(PathBuf::from(path));
    }
    if let Some(config) = config {
        return Ok(PathBuf::from(&config.tape.path));
    }
    default_tape_path()
}

/// Find the entry whose ID is `input` or starts with it.
///
/// # Errors
///
/// `CliError::NotFound` when nothing matches, `CliError::InvalidInput` for a
/// prefix that is too short or matches several entries.
pub fn resolve_entry_id(entries: &[Entry], input: &str) -> anyhow::Result<Uuid> {
    let needle = input.trim().to_ascii_lowercase();

    if let Ok(id) = Uuid::parse_str(&needle) {
        if entries.iter().any(|entry| entry.id == id) {
            return Ok(id);
        }
        return Err(not_found(input).into());
    }

    if needle.len() < MIN_ID_PREFIX_LEN {
        return Err(CliError::invalid_input(format!(
            "Entry ID prefix must be at least {} characters: {}",
            MIN_ID_PREFIX_LEN, input
        ))
        .into());
    }

    let matches: Vec<Uuid> = entries
        .iter()
        .map(|entry| entry.id)
        .filter(|id| id.to_string().starts_with(&needle))
        .collect();

    match matches.as_slice() {
        [id] => Ok(*id),
        [] => Err(not_found(input).into()),
        _ => Err(CliError::invalid_input(format!(
            "Entry ID prefix {} is ambiguous ({} matches); use more characters",
            input,
            matches.len()
        ))
        .into()),
    }
}

fn not_found(input: &str) -> CliError {
    CliError::not_found(
        format!("Entry not found: {}", input),
        "Hint: Run `tape list` to find entry IDs.",
    )
}
