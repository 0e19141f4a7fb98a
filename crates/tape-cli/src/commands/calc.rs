//! Expression commands: `eval`, `expr`, `keys`.

use tape_core::ledger::{parse_keys, KeyOutcome, Theme};
use tape_core::{evaluate, TapeError};

use crate::app::AppContext;
use crate::cli::{EvalArgs, ExprArgs, KeysArgs};
use crate::errors::CliError;
use crate::helpers::join_words;
use crate::output::{display_number, evaluation_json, expr_json, print_expr_status};
use crate::ui::print;

pub fn handle_eval(ctx: &AppContext, args: &EvalArgs) -> anyhow::Result<()> {
    let expr = join_words(&args.expr);
    let value = evaluate(&expr)?;
    if !value.is_finite() {
        return Err(TapeError::NonFinite(expr.trim().to_string()).into());
    }

    let ui = ctx.ui_context(args.json, None, Theme::default());
    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&evaluation_json(&expr, value))?);
    } else {
        print(&ui, &display_number(&ui, value));
    }
    Ok(())
}

pub fn handle_expr(ctx: &AppContext, args: &ExprArgs) -> anyhow::Result<()> {
    let mut ledger = ctx.open_ledger()?;
    if args.clear {
        ledger.set_expr(String::new());
    } else if let Some(text) = &args.text {
        ledger.set_expr(text.clone());
    }

    let preview = ledger.preview();
    let ui = ctx.ui_context(args.json, None, ledger.theme());
    if ui.mode.is_json() {
        let value = expr_json(ledger.current_expr(), preview.as_deref());
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else if !ctx.quiet() {
        print_expr_status(&ui, ledger.current_expr(), preview.as_deref());
    }
    Ok(())
}

pub fn handle_keys(ctx: &AppContext, args: &KeysArgs) -> anyhow::Result<()> {
    let keys = parse_keys(&args.keys.join(" "))?;
    let mut ledger = ctx.open_ledger()?;

    let mut rejected = 0usize;
    let mut result = None;
    let mut failure = None;
    for key in keys {
        match ledger.append_key(key) {
            KeyOutcome::Changed => {}
            KeyOutcome::Rejected => rejected += 1,
            // Only the last `=` decides the outcome
            KeyOutcome::Evaluated(value) => {
                result = Some(value);
                failure = None;
            }
            KeyOutcome::Failed(notice) => {
                result = None;
                failure = Some(notice);
            }
        }
    }

    let preview = ledger.preview();
    let ui = ctx.ui_context(args.json, None, ledger.theme());
    if ui.mode.is_json() {
        let mut value = expr_json(ledger.current_expr(), preview.as_deref());
        value["rejected"] = serde_json::json!(rejected);
        value["result"] = serde_json::json!(result);
        value["error"] = serde_json::json!(failure.as_ref().map(|n| n.message.clone()));
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else if !ctx.quiet() {
        print_expr_status(&ui, ledger.current_expr(), preview.as_deref());
        if rejected > 0 {
            log::info!("{} key(s) ignored", rejected);
        }
    }

    match failure {
        Some(notice) => Err(CliError::invalid_input(notice.message).into()),
        None => Ok(()),
    }
}
