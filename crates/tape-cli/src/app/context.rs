//! Application context for the Tape CLI.
//!
//! Bundles the parsed CLI arguments with the lazily-loaded config file.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use tape_core::ledger::{Theme, DEFAULT_EDIT_DECIMALS};
use tape_core::storage::JsonFileStore;
use tape_core::Ledger;

use crate::cli::Cli;
use crate::config::{read_config, TapeConfig};
use crate::ui::{OutputFormat, UiContext};

use super::resolver::{resolve_config_path, resolve_tape_path};

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<Option<TapeConfig>>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    pub fn cli(&self) -> &Cli {
        self.cli
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// The config file, loaded on first use. A missing file is `None`.
    pub fn config(&self) -> anyhow::Result<Option<&TapeConfig>> {
        self.config
            .get_or_try_init(|| {
                let path = resolve_config_path()?;
                if !path.exists() {
                    log::debug!("No config at {}; using defaults", path.display());
                    return Ok(None);
                }
                log::debug!("Loading config from {}", path.display());
                read_config(&path).map(Some)
            })
            .map(Option::as_ref)
    }

    pub fn tape_path(&self) -> anyhow::Result<PathBuf> {
        resolve_tape_path(self.cli.tape.as_deref(), self.config()?)
    }

    pub fn edit_decimals(&self) -> anyhow::Result<usize> {
        Ok(self
            .config()?
            .map(|config| config.display.edit_decimals)
            .unwrap_or(DEFAULT_EDIT_DECIMALS))
    }

    /// Color is off with `--no-color` or `color = false` in config.
    pub fn color_allowed(&self) -> bool {
        if self.cli.no_color {
            return false;
        }
        match self.config() {
            Ok(Some(config)) => config.display.color,
            _ => true,
        }
    }

    /// Open the tape file (missing or unreadable files give an empty tape).
    pub fn open_ledger(&self) -> anyhow::Result<Ledger<JsonFileStore>> {
        let path = self.tape_path()?;
        log::debug!("Opening tape at {}", path.display());
        Ok(Ledger::open(JsonFileStore::new(path)).with_edit_decimals(self.edit_decimals()?))
    }

    /// Build a UI context for a command's output.
    pub fn ui_context(&self, json: bool, format: Option<OutputFormat>, theme: Theme) -> UiContext {
        UiContext::from_env(json, format, self.color_allowed(), theme)
    }
}
