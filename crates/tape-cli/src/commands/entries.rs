//! Entry commands: `add`, `list`, `edit`, `delete`.

use tape_core::format::{format_number, Decimals};
use tape_core::ledger::{CommitOutcome, Replacement};

use crate::app::{resolve_entry_id, AppContext};
use crate::cli::{AddArgs, DeleteArgs, EditArgs, ListArgs};
use crate::errors::CliError;
use crate::helpers::{parse_output_format, parse_value, prompt_label, LabelChoice};
use crate::output::{display_number, entries_json, entry_json, print_entry_list};
use crate::ui::{header, print, receipt, short_id, UiContext};

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let mut ledger = ctx.open_ledger()?;
    let previous_expr = ledger.current_expr().to_string();
    if let Some(expr) = &args.expr {
        ledger.set_expr(expr.clone());
    }

    let inline_label = args.label.as_deref().filter(|label| !label.trim().is_empty());
    let outcome = match ledger.commit(inline_label) {
        Ok(outcome) => outcome,
        Err(err) => {
            if args.expr.is_some() {
                ledger.set_expr(previous_expr);
            }
            return Err(err.into());
        }
    };

    let added = match outcome {
        CommitOutcome::Added(id) => Some(id),
        CommitOutcome::AwaitingLabel => {
            let choice = if !args.no_input && UiContext::is_interactive() {
                let display = ledger
                    .pending()
                    .map(|pending| format_number(pending.value, Decimals::Auto))
                    .unwrap_or_default();
                prompt_label(&display)?
            } else {
                LabelChoice::Keep(String::new())
            };
            match choice {
                LabelChoice::Keep(label) => ledger.resolve_label(true, &label)?,
                LabelChoice::Discard => ledger.resolve_label(false, "")?,
            }
        }
        CommitOutcome::AlreadyPending => {
            return Err(anyhow::anyhow!("A value is already waiting for a label"));
        }
    };

    let ui = ctx.ui_context(args.json, None, ledger.theme());
    let Some(entry) = added.and_then(|id| ledger.find_entry(id)) else {
        if ui.mode.is_json() {
            println!("{}", serde_json::json!({ "discarded": true }));
        } else if !ctx.quiet() {
            print(&ui, "Discarded value");
        }
        return Ok(());
    };

    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&entry_json(entry))?);
    } else if ctx.quiet() {
        println!("{}", entry.id);
    } else {
        let id = entry.id.to_string();
        let value = display_number(&ui, entry.value);
        let total = display_number(&ui, ledger.total());
        let mut items = vec![("ID", id.as_str()), ("Value", value.as_str())];
        if !entry.label.is_empty() {
            items.push(("Label", entry.label.as_str()));
        }
        items.push(("Total", total.as_str()));
        print(&ui, &receipt(&ui, "Added entry", &items));
    }
    Ok(())
}

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let ledger = ctx.open_ledger()?;
    let format = parse_output_format(args.format.as_deref())?;
    if args.json && format.is_some() {
        return Err(CliError::invalid_input("--format cannot be used with --json").into());
    }

    let entries = ledger.entries();
    let shown = &entries[..args.limit.unwrap_or(entries.len()).min(entries.len())];

    let ui = ctx.ui_context(args.json, format, ledger.theme());
    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&entries_json(shown))?);
        return Ok(());
    }

    if ui.mode.is_pretty() && !ctx.quiet() {
        let context = format!("{} of {} entries", shown.len(), entries.len());
        print(&ui, &header(&ui, "list", Some(&context)));
    }
    print_entry_list(&ui, shown, ledger.total(), ctx.quiet());
    Ok(())
}

pub fn handle_edit(ctx: &AppContext, args: &EditArgs) -> anyhow::Result<()> {
    let mut ledger = ctx.open_ledger()?;
    let id = resolve_entry_id(ledger.entries(), &args.id)?;
    let (current_expr, current_label) = match ledger.find_entry(id) {
        Some(entry) => (entry.expr.clone(), entry.label.clone()),
        None => {
            return Err(CliError::not_found(
                format!("Entry not found: {}", args.id),
                "Hint: Run `tape list` to find entry IDs.",
            )
            .into());
        }
    };

    let replacement = match (&args.expr, &args.value) {
        (Some(expr), _) => Replacement::Expr(expr.clone()),
        (None, Some(value)) => Replacement::Value(parse_value(value)?),
        (None, None) if args.label.is_some() => Replacement::Expr(current_expr),
        (None, None) => {
            return Err(CliError::invalid_input(
                "Nothing to change\nHint: Pass --expr, --value or --label.",
            )
            .into());
        }
    };
    let label = args.label.clone().unwrap_or(current_label);

    ledger.edit_entry(id, replacement, &label)?;

    let ui = ctx.ui_context(args.json, None, ledger.theme());
    if let Some(entry) = ledger.find_entry(id) {
        if ui.mode.is_json() {
            println!("{}", serde_json::to_string_pretty(&entry_json(entry))?);
        } else if !ctx.quiet() {
            let short = short_id(&entry.id);
            let value = display_number(&ui, entry.value);
            let total = display_number(&ui, ledger.total());
            let items = [
                ("ID", short.as_str()),
                ("Expr", entry.expr.as_str()),
                ("Value", value.as_str()),
                ("Total", total.as_str()),
            ];
            print(&ui, &receipt(&ui, "Edited entry", &items));
        }
    }
    Ok(())
}

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    let mut ledger = ctx.open_ledger()?;
    let id = resolve_entry_id(ledger.entries(), &args.id)?;
    ledger.delete_entry(id);

    if !ctx.quiet() {
        let ui = ctx.ui_context(false, None, ledger.theme());
        let id = id.to_string();
        let total = display_number(&ui, ledger.total());
        print(
            &ui,
            &receipt(&ui, "Deleted entry", &[("ID", id.as_str()), ("Total", total.as_str())]),
        );
    }
    Ok(())
}
