//! `config.toml`: where the tape lives and how it is shown.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tape_core::fs::write_atomic;
use tape_core::ledger::DEFAULT_EDIT_DECIMALS;

#[derive(Debug, Serialize, Deserialize)]
pub struct TapeConfig {
    pub tape: TapeSection,
    #[serde(default)]
    pub display: DisplaySection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TapeSection {
    pub path: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DisplaySection {
    #[serde(default = "default_edit_decimals")]
    pub edit_decimals: usize,
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            edit_decimals: default_edit_decimals(),
            color: default_color(),
        }
    }
}

fn default_edit_decimals() -> usize {
    DEFAULT_EDIT_DECIMALS
}

fn default_color() -> bool {
    true
}

impl TapeConfig {
    pub fn new(tape_path: PathBuf, edit_decimals: usize) -> Self {
        Self {
            tape: TapeSection {
                path: tape_path.to_string_lossy().to_string(),
            },
            display: DisplaySection {
                edit_decimals,
                color: default_color(),
            },
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_tape_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join("tape.json"))
}

pub fn read_config(path: &Path) -> anyhow::Result<TapeConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

/// Written to a temp sibling and renamed into place.
pub fn write_config(path: &Path, config: &TapeConfig) -> anyhow::Result<()> {
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    write_atomic(path, contents.as_bytes())
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    xdg_dir("XDG_CONFIG_HOME", &[".config"])
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    xdg_dir("XDG_DATA_HOME", &[".local", "share"])
}

/// `$VAR/tape`, or `$HOME/<fallback>/tape` when the variable is unset or blank.
fn xdg_dir(var: &str, fallback: &[&str]) -> anyhow::Result<PathBuf> {
    let base = match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => {
            let home = std::env::var("HOME")
                .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
            fallback.iter().fold(PathBuf::from(home), |path, part| path.join(part))
        }
    };
    Ok(base.join("tape"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_section_defaults() {
        let config: TapeConfig = toml::from_str("[tape]\npath = \"/tmp/t.json\"\n").unwrap();
        assert_eq!(config.tape.path, "/tmp/t.json");
        assert_eq!(config.display.edit_decimals, DEFAULT_EDIT_DECIMALS);
        assert!(config.display.color);
    }

    #[test]
    fn test_partial_display_section() {
        let config: TapeConfig =
            toml::from_str("[tape]\npath = \"t.json\"\n\n[display]\ncolor = false\n").unwrap();
        assert!(!config.display.color);
        assert_eq!(config.display.edit_decimals, DEFAULT_EDIT_DECIMALS);
    }

    #[test]
    fn test_round_trip() {
        let config = TapeConfig::new(PathBuf::from("/data/tape.json"), 3);
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: TapeConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.tape.path, "/data/tape.json");
        assert_eq!(parsed.display.edit_decimals, 3);
    }
}
