//! Per-command rendering context.

use std::io::IsTerminal;

use tape_core::ledger::Theme;

use super::mode::{OutputFormat, OutputMode, Terminal};
use super::theme::Palette;

#[derive(Debug, Clone)]
pub struct UiContext {
    /// Write ANSI colors
    pub color: bool,
    pub mode: OutputMode,
    /// Colors for the tape's theme
    pub palette: Palette,
}

impl UiContext {
    /// Build the context for one command.
    ///
    /// Color needs a capable terminal, `color_allowed` (no `--no-color`, not
    /// disabled in config) and no `NO_COLOR` in the environment.
    pub fn from_env(
        json: bool,
        format: Option<OutputFormat>,
        color_allowed: bool,
        theme: Theme,
    ) -> Self {
        let terminal = Terminal::detect();
        let no_color_env = std::env::var_os("NO_COLOR").is_some();

        Self {
            color: terminal.is_capable() && color_allowed && !no_color_env,
            mode: OutputMode::resolve(json, format, terminal),
            palette: Palette::for_theme(theme),
        }
    }

    /// Prompts need a person on both ends.
    pub fn is_interactive() -> bool {
        std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_flag_gives_json_mode() {
        let ctx = UiContext::from_env(true, None, true, Theme::Dark);
        assert_eq!(ctx.mode, OutputMode::Json);
    }

    #[test]
    fn test_color_can_be_disabled() {
        let ctx = UiContext::from_env(false, Some(OutputFormat::Table), false, Theme::Light);
        assert!(!ctx.color);
        assert_eq!(ctx.mode, OutputMode::Pretty);
    }
}
