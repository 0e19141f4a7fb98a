//! Line and table rendering.
//!
//! Every helper has two shapes: a pretty one for terminals and a plain
//! `key=value` one that scripts can split on.

use comfy_table::presets::NOTHING;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use super::context::UiContext;
use super::theme::{styled, styles, Badge};

/// `Tape · list (2 of 5 entries)` or `tape list`.
pub fn header(ctx: &UiContext, command: &str, detail: Option<&str>) -> String {
    if !ctx.mode.is_pretty() {
        return format!("tape {}", command);
    }
    let title = format!("{} \u{00B7} {}", styled("Tape", styles::bold(), ctx.color), command);
    match detail {
        Some(detail) => format!("{} ({})", title, detail),
        None => title,
    }
}

pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let mark = if ctx.mode.is_pretty() {
        kind.display()
    } else {
        kind.text()
    };
    let mark = styled(mark, kind.style(), ctx.color);
    if message.is_empty() {
        mark
    } else {
        format!("{} {}", mark, message)
    }
}

fn key_slug(key: &str) -> String {
    key.trim().to_lowercase().replace(' ', "_")
}

/// `Total: 12` with a dim key, or `total=12`.
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        format!("{} {}", styled(&format!("{}:", key), styles::dim(), ctx.color), value)
    } else {
        format!("{}={}", key_slug(key), value)
    }
}

fn hint(ctx: &UiContext, text: &str) -> String {
    let text = text.strip_prefix("Hint:").map(str::trim_start).unwrap_or(text);
    if ctx.mode.is_pretty() {
        format!("{} {}", styled("Hint:", styles::dim(), ctx.color), text)
    } else {
        format!("hint={}", text)
    }
}

/// Summary printed after a command changed the tape.
///
/// Pretty: an OK badge with the title, then indented pairs.
/// Plain: `status=ok` followed by one `key=value` line per pair.
pub fn receipt(ctx: &UiContext, title: &str, items: &[(&str, &str)]) -> String {
    let (first, indent) = if ctx.mode.is_pretty() {
        (badge(ctx, Badge::Ok, title), "  ")
    } else {
        ("status=ok".to_string(), "")
    };
    std::iter::once(first)
        .chain(
            items
                .iter()
                .map(|(key, value)| format!("{}{}", indent, kv(ctx, key, value))),
        )
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone)]
pub struct Column {
    pub header: &'static str,
    pub align_right: bool,
}

impl Column {
    pub const fn new(header: &'static str) -> Self {
        Self {
            header,
            align_right: false,
        }
    }

    /// Right-aligned, for amounts.
    pub const fn numeric(header: &'static str) -> Self {
        Self {
            header,
            align_right: true,
        }
    }
}

/// Borderless table with a header row in pretty mode; tab-separated rows
/// without a header otherwise.
pub fn table(ctx: &UiContext, columns: &[Column], rows: &[Vec<String>]) -> String {
    if !ctx.mode.is_pretty() {
        return rows
            .iter()
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n");
    }

    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(columns.iter().map(|column| {
            let cell = Cell::new(column.header);
            if ctx.color {
                cell.add_attribute(Attribute::Dim)
            } else {
                cell
            }
        }));
    for row in rows {
        table.add_row(row);
    }
    for (index, col) in columns.iter().enumerate() {
        if let Some(column) = table.column_mut(index) {
            column.set_padding((0, 2));
            if col.align_right {
                column.set_cell_alignment(CellAlignment::Right);
            }
        }
    }
    table.to_string()
}

/// Write to stdout; JSON mode keeps stdout for the document.
pub fn print(ctx: &UiContext, message: &str) {
    if !ctx.mode.is_json() {
        println!("{}", message);
    }
}

pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let first = if ctx.mode.is_pretty() {
        badge(ctx, Badge::Err, message)
    } else {
        format!("error={}", message)
    };
    match error_hint {
        Some(text) => format!("{}\n{}", first, hint(ctx, text)),
        None => first,
    }
}

/// Errors go to stderr in every mode.
pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, error_hint));
}
