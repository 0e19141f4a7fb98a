//! Badges, color palette and styling helpers.

use owo_colors::{OwoColorize, Style};
use tape_core::ledger::Theme;

/// Badge types for status indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Ok,
    Warn,
    Err,
}

impl Badge {
    /// Get badge text (e.g., "[OK]")
    pub fn text(&self) -> &'static str {
        match self {
            Self::Ok => "[OK]",
            Self::Warn => "[WARN]",
            Self::Err => "[ERR]",
        }
    }

    /// Get badge with symbol for display.
    pub fn display(&self) -> &'static str {
        match self {
            Self::Ok => "[\u{2713}]",   // [✓]
            Self::Warn => "[\u{26A0}]", // [⚠]
            Self::Err => "[\u{2717}]",  // [✗]
        }
    }

    pub fn style(&self) -> Style {
        match self {
            Self::Ok => styles::success(),
            Self::Warn => styles::warning(),
            Self::Err => styles::error(),
        }
    }
}

/// Colors used for tape values, chosen by the tape's theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Totals and evaluated results
    pub accent: Style,
    /// Negative values
    pub negative: Style,
    /// Labels and secondary text
    pub muted: Style,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                accent: Style::new().bright_cyan().bold(),
                negative: Style::new().bright_red(),
                muted: Style::new().dimmed(),
            },
            Theme::Light => Self {
                accent: Style::new().blue().bold(),
                negative: Style::new().red(),
                muted: Style::new().bright_black(),
            },
        }
    }
}

/// Apply `style` to `text` when color is enabled.
pub fn styled(text: &str, style: Style, color: bool) -> String {
    if color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

pub mod styles {
    use owo_colors::Style;

    pub fn bold() -> Style {
        Style::new().bold()
    }

    pub fn dim() -> Style {
        Style::new().dimmed()
    }

    pub fn success() -> Style {
        Style::new().green()
    }

    pub fn warning() -> Style {
        Style::new().yellow()
    }

    pub fn error() -> Style {
        Style::new().red()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_text() {
        assert_eq!(Badge::Ok.text(), "[OK]");
        assert_eq!(Badge::Warn.text(), "[WARN]");
        assert_eq!(Badge::Err.text(), "[ERR]");
    }

    #[test]
    fn test_badge_display() {
        assert_eq!(Badge::Ok.display(), "[\u{2713}]");
    }

    #[test]
    fn test_styled_without_color_is_plain() {
        let palette = Palette::for_theme(Theme::Light);
        assert_eq!(styled("42", palette.accent, false), "42");
    }

    #[test]
    fn test_styled_with_color_wraps_text() {
        let out = styled("42", styles::bold(), true);
        assert!(out.contains("42"));
        assert_ne!(out, "42");
    }
}
