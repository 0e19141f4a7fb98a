//! Tape CLI - a keypad calculator that keeps a labeled, running-total tape
//!
//! This is the command-line interface for Tape. It drives the ledger in
//! `tape-core` against a JSON file on disk.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod output;
mod ui;

use clap::Parser;
use log::LevelFilter;
use tape_core::ledger::Theme;
use tape_core::VERSION;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{calc, entries, init, misc, session, tape};
use crate::errors::exit_code_for;
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx.ui_context(false, None, Theme::default());

        let error_msg = format!("{}", e);
        let (message, hint) = split_error_hint(&error_msg);

        log::debug!("Command failed: {:?}", e);
        print_error(&ui_ctx, message, hint);
        std::process::exit(exit_code_for(&e));
    }
}

/// Warnings by default, debug with `-v`; `RUST_LOG` refines either.
fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    let _ = builder.try_init();
}

/// Split "message\nHint: ..." into its two halves.
fn split_error_hint(error: &str) -> (&str, Option<&str>) {
    for marker in ["\nHint:", "\nhint:"] {
        if let Some(idx) = error.find(marker) {
            return (&error[..idx], Some(&error[idx + 1..]));
        }
    }
    (error, None)
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Init(args)) => {
            init::handle_init(ctx, args)?;
        }
        Some(Commands::Eval(args)) => {
            calc::handle_eval(ctx, args)?;
        }
        Some(Commands::Expr(args)) => {
            calc::handle_expr(ctx, args)?;
        }
        Some(Commands::Keys(args)) => {
            calc::handle_keys(ctx, args)?;
        }
        Some(Commands::Add(args)) => {
            entries::handle_add(ctx, args)?;
        }
        Some(Commands::List(args)) => {
            entries::handle_list(ctx, args)?;
        }
        Some(Commands::Edit(args)) => {
            entries::handle_edit(ctx, args)?;
        }
        Some(Commands::Delete(args)) => {
            entries::handle_delete(ctx, args)?;
        }
        Some(Commands::Reset(args)) => {
            tape::handle_reset(ctx, args)?;
        }
        Some(Commands::Export(args)) => {
            tape::handle_export(ctx, args)?;
        }
        Some(Commands::Total(args)) => {
            tape::handle_total(ctx, args)?;
        }
        Some(Commands::Theme(args)) => {
            tape::handle_theme(ctx, args)?;
        }
        Some(Commands::Session) => {
            session::handle_session(ctx)?;
        }
        Some(Commands::Completions(args)) => {
            misc::handle_completions(args)?;
        }
        None => {
            println!("Tape v{}", VERSION);
            println!("\nQuickstart:");
            println!("  tape init");
            println!("  tape add \"1200+350\" --label rent");
            println!("  tape keys 2 , 5 × 4 =");
            println!("  tape list");
            println!("  tape session");
            println!("\nRun `tape --help` for full usage.");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_error_hint() {
        assert_eq!(
            split_error_hint("Entry not found\nHint: Run `tape list`"),
            ("Entry not found", Some("Hint: Run `tape list`"))
        );
        assert_eq!(split_error_hint("Division by zero"), ("Division by zero", None));
    }
}
