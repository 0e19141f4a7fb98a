use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use tape_core::VERSION;

/// Tape - a keypad calculator that keeps a labeled, running-total tape
#[derive(Parser)]
#[command(name = "tape")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the tape file
    #[arg(short, long, global = true, env = "TAPE_PATH")]
    pub tape: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose logging (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Path where the tape will be kept
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Fractional digits written when an entry is edited by value
    #[arg(long, value_name = "N")]
    pub edit_decimals: Option<usize>,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `eval` command
#[derive(Args)]
pub struct EvalArgs {
    /// Expression to evaluate (e.g. "2,5*(3+1)")
    #[arg(value_name = "EXPR", num_args = 1.., required = true, allow_hyphen_values = true)]
    pub expr: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `expr` command
#[derive(Args)]
pub struct ExprArgs {
    /// Replace the current expression with this text
    #[arg(value_name = "TEXT", conflicts_with = "clear", allow_hyphen_values = true)]
    pub text: Option<String>,

    /// Empty the current expression
    #[arg(long)]
    pub clear: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `keys` command
#[derive(Args)]
pub struct KeysArgs {
    /// Keys to press, e.g. `1 2 , 5 + 3 =` (BK = backspace, C = clear)
    #[arg(value_name = "KEY", num_args = 1.., required = true)]
    pub keys: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Expression to add (defaults to the current expression)
    #[arg(value_name = "EXPR", allow_hyphen_values = true)]
    pub expr: Option<String>,

    /// Label for the entry (skips the label prompt)
    #[arg(short, long)]
    pub label: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Limit number of results (newest first)
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `edit` command
#[derive(Args)]
pub struct EditArgs {
    /// Entry ID (full UUID or unique prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// New expression
    #[arg(long, conflicts_with = "value", allow_hyphen_values = true)]
    pub expr: Option<String>,

    /// New value, e.g. "1 234,50"
    #[arg(long, allow_hyphen_values = true)]
    pub value: Option<String>,

    /// New label (keeps the current one when omitted)
    #[arg(short, long)]
    pub label: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Entry ID (full UUID or unique prefix)
    #[arg(value_name = "ID")]
    pub id: String,
}

/// Arguments for the `reset` command
#[derive(Args)]
pub struct ResetArgs {
    /// Do not ask for confirmation
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `export` command
#[derive(Args)]
pub struct ExportArgs {
    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,
}

/// Arguments for the `total` command
#[derive(Args)]
pub struct TotalArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `theme` command
#[derive(Args)]
pub struct ThemeArgs {
    /// Theme to switch to (dark, light); shows the current one when omitted
    #[arg(value_name = "THEME")]
    pub theme: Option<String>,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a config file and create an empty tape
    Init(InitArgs),

    /// Evaluate an expression without touching the tape
    Eval(EvalArgs),

    /// Show or replace the current expression
    Expr(ExprArgs),

    /// Press keypad keys on the current expression
    Keys(KeysArgs),

    /// Add the current expression (or EXPR) to the tape
    Add(AddArgs),

    /// List entries, newest first
    List(ListArgs),

    /// Change an entry's expression or value and label
    Edit(EditArgs),

    /// Delete an entry
    Delete(DeleteArgs),

    /// Clear all entries and the current expression
    Reset(ResetArgs),

    /// Export the tape as plain text, oldest first
    Export(ExportArgs),

    /// Show the running total
    Total(TotalArgs),

    /// Show or set the color theme
    Theme(ThemeArgs),

    /// Interactive keypad session
    Session,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
