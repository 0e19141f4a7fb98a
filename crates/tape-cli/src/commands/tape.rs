//! Whole-tape commands: `reset`, `export`, `total`, `theme`.

use tape_core::ledger::Theme;

use crate::app::AppContext;
use crate::cli::{ExportArgs, ResetArgs, ThemeArgs, TotalArgs};
use crate::errors::CliError;
use crate::helpers::confirm;
use crate::output::{display_number, total_json};
use crate::ui::{kv, print, receipt, UiContext};

pub fn handle_reset(ctx: &AppContext, args: &ResetArgs) -> anyhow::Result<()> {
    let mut ledger = ctx.open_ledger()?;

    if !args.yes {
        if !UiContext::is_interactive() {
            return Err(CliError::invalid_input(
                "Refusing to reset without confirmation\nHint: Pass --yes to clear the tape.",
            )
            .into());
        }
        let prompt = format!(
            "Clear {} entries and the current expression?",
            ledger.entries().len()
        );
        if !confirm(&prompt, false)? {
            if !ctx.quiet() {
                println!("Cancelled");
            }
            return Ok(());
        }
    }

    let cleared = ledger.entries().len();
    ledger.reset();

    if !ctx.quiet() {
        let ui = ctx.ui_context(false, None, ledger.theme());
        let cleared = cleared.to_string();
        print(&ui, &receipt(&ui, "Tape cleared", &[("Entries", cleared.as_str())]));
    }
    Ok(())
}

pub fn handle_export(ctx: &AppContext, args: &ExportArgs) -> anyhow::Result<()> {
    let ledger = ctx.open_ledger()?;
    let text = ledger.export_text();

    match &args.output {
        Some(path) => {
            std::fs::write(path, format!("{}\n", text))
                .map_err(|e| anyhow::anyhow!("Failed to write export to {}: {}", path, e))?;
            if !ctx.quiet() {
                let ui = ctx.ui_context(false, None, ledger.theme());
                print(&ui, &receipt(&ui, "Exported tape", &[("File", path.as_str())]));
            }
        }
        None => println!("{}", text),
    }
    Ok(())
}

pub fn handle_total(ctx: &AppContext, args: &TotalArgs) -> anyhow::Result<()> {
    let ledger = ctx.open_ledger()?;
    let ui = ctx.ui_context(args.json, None, ledger.theme());

    if ui.mode.is_json() {
        let value = total_json(ledger.total(), ledger.entries().len());
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else if ui.mode.is_pretty() && !ctx.quiet() {
        print(&ui, &kv(&ui, "Total", &display_number(&ui, ledger.total())));
    } else {
        print(&ui, &display_number(&ui, ledger.total()));
    }
    Ok(())
}

pub fn handle_theme(ctx: &AppContext, args: &ThemeArgs) -> anyhow::Result<()> {
    let mut ledger = ctx.open_ledger()?;
    if let Some(name) = &args.theme {
        let theme: Theme = name.parse()?;
        ledger.set_theme(theme);
    }
    println!("{}", ledger.theme());
    Ok(())
}
