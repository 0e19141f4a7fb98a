//! Text and table output formatting.

use tape_core::format::{format_number, Decimals};
use tape_core::ledger::Entry;

use crate::ui::{
    format_datetime, kv, plain_spaces, print, short_id, single_line, styled, table, truncate,
    Column, UiContext,
};

const TABLE_EXPR_MAX: usize = 32;
const TABLE_LABEL_MAX: usize = 48;

/// Format a number for the terminal: thin spaces and palette colors in
/// pretty mode, plain spaces otherwise.
pub fn display_number(ctx: &UiContext, value: f64) -> String {
    let formatted = format_number(value, Decimals::Auto);
    if !ctx.mode.is_pretty() {
        return plain_spaces(&formatted);
    }
    let style = if value < 0.0 {
        ctx.palette.negative
    } else {
        ctx.palette.accent
    };
    styled(&formatted, style, ctx.color)
}

fn entry_row(ctx: &UiContext, entry: &Entry) -> Vec<String> {
    let pretty = ctx.mode.is_pretty();
    let (expr, label) = if pretty {
        (
            truncate(&single_line(&entry.expr), TABLE_EXPR_MAX),
            styled(
                &truncate(&single_line(&entry.label), TABLE_LABEL_MAX),
                ctx.palette.muted,
                ctx.color,
            ),
        )
    } else {
        (single_line(&entry.expr), single_line(&entry.label))
    };
    vec![
        if pretty {
            short_id(&entry.id)
        } else {
            entry.id.to_string()
        },
        display_number(ctx, entry.value),
        expr,
        label,
        format_datetime(&entry.created_at, pretty),
    ]
}

/// Print entries (newest first) followed by the total.
pub fn print_entry_list(ctx: &UiContext, entries: &[Entry], total: f64, quiet: bool) {
    let columns = [
        Column::new("ID"),
        Column::numeric("VALUE"),
        Column::new("EXPR"),
        Column::new("LABEL"),
        Column::new("ADDED"),
    ];
    let rows: Vec<Vec<String>> = entries.iter().map(|entry| entry_row(ctx, entry)).collect();

    if !rows.is_empty() {
        print(ctx, &table(ctx, &columns, &rows));
    } else if ctx.mode.is_pretty() && !quiet {
        print(ctx, "The tape is empty.");
    }
    if !quiet {
        print(ctx, &kv(ctx, "Total", &display_number(ctx, total)));
    }
}

/// Print the current expression and either its preview or a message.
pub fn print_expr_status(ctx: &UiContext, expr: &str, preview: Option<&str>) {
    print(ctx, &kv(ctx, "Expr", expr));
    if let Some(preview) = preview {
        let value = if ctx.mode.is_pretty() {
            styled(preview, ctx.palette.accent, ctx.color)
        } else {
            plain_spaces(preview)
        };
        print(ctx, &kv(ctx, "Preview", &value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::Palette;
    use crate::ui::mode::OutputMode;
    use tape_core::ledger::Theme;

    fn plain_ctx() -> UiContext {
        UiContext {
            color: false,
            mode: OutputMode::Plain,
            palette: Palette::for_theme(Theme::Dark),
        }
    }

    #[test]
    fn test_display_number_plain() {
        assert_eq!(display_number(&plain_ctx(), 1234.5), "1 234,5");
        assert_eq!(display_number(&plain_ctx(), -3.0), "-3");
    }

    #[test]
    fn test_entry_row_plain_uses_full_id() {
        let entry: Entry = serde_json::from_str(
            r#"{"id":"7a2e3c0b-1234-4678-9abc-def012345678","expr":"2*2","value":4.0,"label":"a\nb",
               "created_at":"2026-01-02T03:04:05Z"}"#,
        )
        .unwrap();
        let row = entry_row(&plain_ctx(), &entry);
        assert_eq!(row[0], "7a2e3c0b-1234-4678-9abc-def012345678");
        assert_eq!(row[1], "4");
        assert_eq!(row[2], "2*2");
        assert_eq!(row[3], "a b");
        assert_eq!(row[4], "2026-01-02T03:04:05+00:00");
    }
}
