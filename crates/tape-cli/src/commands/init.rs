//! `tape init`: write a config file and an empty tape.

use std::path::PathBuf;

use tape_core::ledger::DEFAULT_EDIT_DECIMALS;
use tape_core::storage::{JsonFileStore, Snapshot, SnapshotStore};

use crate::app::{resolve_config_path, AppContext};
use crate::cli::InitArgs;
use crate::config::{default_tape_path, write_config, TapeConfig};
use crate::errors::CliError;
use crate::ui::{print, receipt};

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let config_path = resolve_config_path()?;
    if config_path.exists() && !args.force {
        return Err(CliError::invalid_input(format!(
            "Config already exists at {}\nHint: Use --force to overwrite it.",
            config_path.display()
        ))
        .into());
    }

    let tape_path = match args.path.as_deref().or(ctx.cli().tape.as_deref()) {
        Some(path) => PathBuf::from(path),
        None => default_tape_path()?,
    };
    let edit_decimals = args.edit_decimals.unwrap_or(DEFAULT_EDIT_DECIMALS);

    write_config(&config_path, &TapeConfig::new(tape_path.clone(), edit_decimals))?;
    log::debug!("Wrote config to {}", config_path.display());

    let created = !tape_path.exists();
    if created {
        let mut store = JsonFileStore::new(&tape_path);
        store.save(&Snapshot::default()).map_err(|e| {
            anyhow::anyhow!("Failed to create tape at {}: {}", tape_path.display(), e)
        })?;
    }

    if !ctx.quiet() {
        let ui = ctx.ui_context(false, None, Default::default());
        let config_display = config_path.display().to_string();
        let tape_display = tape_path.display().to_string();
        let title = if created {
            "Initialized new tape"
        } else {
            "Using existing tape"
        };
        print(
            &ui,
            &receipt(
                &ui,
                title,
                &[("Tape", tape_display.as_str()), ("Config", config_display.as_str())],
            ),
        );
    }
    Ok(())
}
