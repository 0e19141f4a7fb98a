//! JSON output formatting.

use tape_core::format::{format_number, Decimals};
use tape_core::ledger::Entry;

/// Convert an entry to JSON for output.
pub fn entry_json(entry: &Entry) -> serde_json::Value {
    serde_json::json!({
        "id": entry.id,
        "expr": entry.expr,
        "value": entry.value,
        "display": format_number(entry.value, Decimals::Auto),
        "label": entry.label,
        "created_at": entry.created_at,
    })
}

/// Convert multiple entries to a JSON array for output.
pub fn entries_json(entries: &[Entry]) -> Vec<serde_json::Value> {
    entries.iter().map(entry_json).collect()
}

pub fn total_json(total: f64, count: usize) -> serde_json::Value {
    serde_json::json!({
        "total": total,
        "display": format_number(total, Decimals::Auto),
        "count": count,
    })
}

pub fn evaluation_json(expr: &str, value: f64) -> serde_json::Value {
    serde_json::json!({
        "expr": expr,
        "value": value,
        "display": format_number(value, Decimals::Auto),
    })
}

/// The current expression and its live preview, if it evaluates.
pub fn expr_json(expr: &str, preview: Option<&str>) -> serde_json::Value {
    serde_json::json!({
        "expr": expr,
        "preview": preview,
    })
}
