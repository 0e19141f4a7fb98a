//! `tape session`: an interactive keypad on stdin.
//!
//! Plain lines are keypad input (`12,5 + 3 =`). Lines starting with `:` are
//! commands. While a value waits for a label, a plain line is the label.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use tape_core::format::{format_number, Decimals};
use tape_core::ledger::{parse_keys, CommitOutcome, KeyOutcome, Mode, Notice, Theme};
use tape_core::storage::JsonFileStore;
use tape_core::Ledger;

use crate::app::AppContext;
use crate::output::{display_number, print_entry_list, print_expr_status};
use crate::ui::{badge, kv, print, print_error, Badge, UiContext};

const HELP: &str = "\
Keys:      digits , + - * / ( ) = BK C  (e.g. `12,5 + 3 =`)
:add [L]   add the current expression, labeled L (asks when omitted)
:skip      add the waiting value without a label
:discard   drop the waiting value
:list      show the tape
:total     show the total
:export    print the tape as text
:theme [T] show or set the theme (dark, light)
:reset     clear the tape
:help      this help
:quit      leave";

/// One parsed line of session input.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SessionCommand {
    Keys(String),
    Label(String),
    Add(Option<String>),
    Skip,
    Discard,
    List,
    Total,
    Export,
    Theme(Option<String>),
    Reset,
    Help,
    Quit,
    Unknown(String),
}

fn parse_line(line: &str, awaiting_label: bool) -> SessionCommand {
    let Some(command) = line.strip_prefix(':') else {
        return if awaiting_label {
            SessionCommand::Label(line.to_string())
        } else {
            SessionCommand::Keys(line.to_string())
        };
    };

    let (name, rest) = match command.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (command, ""),
    };
    let argument = (!rest.is_empty()).then(|| rest.to_string());

    match name {
        "add" | "a" => SessionCommand::Add(argument),
        "skip" => SessionCommand::Skip,
        "discard" | "cancel" => SessionCommand::Discard,
        "list" | "l" => SessionCommand::List,
        "total" | "t" => SessionCommand::Total,
        "export" => SessionCommand::Export,
        "theme" => SessionCommand::Theme(argument),
        "reset" => SessionCommand::Reset,
        "help" | "h" | "?" => SessionCommand::Help,
        "quit" | "q" | "exit" => SessionCommand::Quit,
        other => SessionCommand::Unknown(other.to_string()),
    }
}

struct Session<'a> {
    ledger: Ledger<JsonFileStore>,
    ui: UiContext,
    ctx: &'a AppContext<'a>,
    notice: Option<Notice>,
}

impl<'a> Session<'a> {
    fn warn(&mut self, notice: Notice) {
        print_error(&self.ui, &notice.message, None);
        self.notice = Some(notice);
    }

    fn prompt(&mut self) -> String {
        if self
            .notice
            .as_ref()
            .is_some_and(|notice| notice.is_expired(Instant::now()))
        {
            self.notice = None;
        }
        match (&self.notice, self.ledger.mode()) {
            (_, Mode::AwaitingLabel) => "label> ".to_string(),
            (Some(notice), _) => format!("[{}] {}> ", notice.message, self.ledger.current_expr()),
            (None, _) => format!("{}> ", self.ledger.current_expr()),
        }
    }

    fn show_status(&self) {
        let preview = self.ledger.preview();
        print_expr_status(&self.ui, self.ledger.current_expr(), preview.as_deref());
    }

    fn show_added(&self, id: Option<uuid::Uuid>) {
        match id.and_then(|id| self.ledger.find_entry(id)) {
            Some(entry) => {
                let value = display_number(&self.ui, entry.value);
                let message = if entry.label.is_empty() {
                    format!("Added {}", value)
                } else {
                    format!("Added {} ({})", value, entry.label)
                };
                print(&self.ui, &badge(&self.ui, Badge::Ok, &message));
                print(
                    &self.ui,
                    &kv(&self.ui, "Total", &display_number(&self.ui, self.ledger.total())),
                );
            }
            None => print(&self.ui, "Discarded value"),
        }
    }

    fn resolve(&mut self, confirm: bool, label: &str) {
        match self.ledger.resolve_label(confirm, label) {
            Ok(id) => self.show_added(id),
            Err(err) => self.warn(Notice::from(&err)),
        }
    }

    fn press(&mut self, input: &str) {
        let keys = match parse_keys(input) {
            Ok(keys) => keys,
            Err(err) => return self.warn(Notice::from(&err)),
        };
        for key in keys {
            if let KeyOutcome::Failed(notice) = self.ledger.append_key(key) {
                self.warn(notice);
            }
        }
        self.show_status();
    }

    fn add(&mut self, label: Option<&str>) {
        match self.ledger.commit(label) {
            Ok(CommitOutcome::Added(id)) => self.show_added(Some(id)),
            Ok(CommitOutcome::AwaitingLabel) => {
                let value = self
                    .ledger
                    .pending()
                    .map(|pending| format_number(pending.value, Decimals::Auto))
                    .unwrap_or_default();
                print(
                    &self.ui,
                    &format!(
                        "Label for {} (:skip adds it without one, :discard drops it)",
                        value
                    ),
                );
            }
            Ok(CommitOutcome::AlreadyPending) => print(
                &self.ui,
                &badge(&self.ui, Badge::Warn, "A value is waiting for a label"),
            ),
            Err(err) => self.warn(Notice::from(&err)),
        }
    }

    fn set_theme(&mut self, name: Option<&str>) {
        if let Some(name) = name {
            match name.parse::<Theme>() {
                Ok(theme) => {
                    self.ledger.set_theme(theme);
                    self.ui = self.ctx.ui_context(false, None, theme);
                }
                Err(err) => return self.warn(Notice::from(&err)),
            }
        }
        print(&self.ui, &kv(&self.ui, "Theme", self.ledger.theme().as_str()));
    }

    /// Handle one line; returns `false` to stop.
    fn handle(&mut self, line: &str) -> bool {
        let awaiting = self.ledger.mode() == Mode::AwaitingLabel;
        match parse_line(line, awaiting) {
            SessionCommand::Keys(input) => self.press(&input),
            SessionCommand::Label(label) => self.resolve(true, &label),
            SessionCommand::Add(label) => self.add(label.as_deref()),
            SessionCommand::Skip => self.resolve(true, ""),
            SessionCommand::Discard => self.resolve(false, ""),
            SessionCommand::List => print_entry_list(
                &self.ui,
                self.ledger.entries(),
                self.ledger.total(),
                self.ctx.quiet(),
            ),
            SessionCommand::Total => print(
                &self.ui,
                &kv(&self.ui, "Total", &display_number(&self.ui, self.ledger.total())),
            ),
            SessionCommand::Export => print(&self.ui, &self.ledger.export_text()),
            SessionCommand::Theme(name) => self.set_theme(name.as_deref()),
            SessionCommand::Reset => {
                self.ledger.reset();
                print(&self.ui, &badge(&self.ui, Badge::Ok, "Tape cleared"));
            }
            SessionCommand::Help => print(&self.ui, HELP),
            SessionCommand::Quit => return false,
            SessionCommand::Unknown(name) => {
                self.warn(Notice::new(format!("Unknown command: :{} (try :help)", name)));
            }
        }
        true
    }
}

pub fn handle_session(ctx: &AppContext) -> anyhow::Result<()> {
    let ledger = ctx.open_ledger()?;
    let ui = ctx.ui_context(false, None, ledger.theme());
    let interactive = UiContext::is_interactive();
    let mut session = Session {
        ledger,
        ui,
        ctx,
        notice: None,
    };

    if interactive && !ctx.quiet() {
        print(&session.ui, "Tape session. Type :help for commands, :quit to leave.");
        session.show_status();
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("{}", session.prompt());
            io::stdout().flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if !session.handle(line) {
            break;
        }
    }

    if session.ledger.mode() == Mode::AwaitingLabel {
        log::debug!("Session ended with a value waiting for a label; dropping it");
    }
    Ok(())
}
