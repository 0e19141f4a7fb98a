//! Output mode selection.

use std::io::IsTerminal;

/// Layout requested with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Plain,
}

/// How results are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// JSON documents only
    Json,
    /// `key=value` lines and tab-separated rows
    #[default]
    Plain,
    /// Tables, badges and colors
    Pretty,
}

/// What stdout is connected to.
#[derive(Debug, Clone, Copy, Default)]
pub struct Terminal {
    pub is_tty: bool,
    pub dumb: bool,
}

impl Terminal {
    pub fn detect() -> Self {
        Self {
            is_tty: std::io::stdout().is_terminal(),
            dumb: std::env::var("TERM").is_ok_and(|term| term == "dumb"),
        }
    }

    /// A terminal that can show tables and escape codes.
    pub fn is_capable(&self) -> bool {
        self.is_tty && !self.dumb
    }
}

impl OutputMode {
    /// `--json` wins; an explicit `--format` comes next, so `--format table`
    /// keeps the table layout when piped. Otherwise pretty on a capable
    /// terminal and plain everywhere else.
    pub fn resolve(json: bool, format: Option<OutputFormat>, terminal: Terminal) -> Self {
        if json {
            return Self::Json;
        }
        match format {
            Some(OutputFormat::Plain) => Self::Plain,
            Some(OutputFormat::Table) => Self::Pretty,
            None if terminal.is_capable() => Self::Pretty,
            None => Self::Plain,
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTY: Terminal = Terminal {
        is_tty: true,
        dumb: false,
    };
    const PIPE: Terminal = Terminal {
        is_tty: false,
        dumb: false,
    };

    #[test]
    fn test_json_beats_format() {
        assert_eq!(
            OutputMode::resolve(true, Some(OutputFormat::Table), TTY),
            OutputMode::Json
        );
    }

    #[test]
    fn test_terminal_decides_without_format() {
        assert_eq!(OutputMode::resolve(false, None, TTY), OutputMode::Pretty);
        assert_eq!(OutputMode::resolve(false, None, PIPE), OutputMode::Plain);

        let dumb = Terminal {
            is_tty: true,
            dumb: true,
        };
        assert_eq!(OutputMode::resolve(false, None, dumb), OutputMode::Plain);
    }

    #[test]
    fn test_explicit_format_ignores_terminal() {
        assert_eq!(
            OutputMode::resolve(false, Some(OutputFormat::Table), PIPE),
            OutputMode::Pretty
        );
        assert_eq!(
            OutputMode::resolve(false, Some(OutputFormat::Plain), TTY),
            OutputMode::Plain
        );
    }
}
