//! Cell text helpers for the entry table.

use chrono::{DateTime, Local, Utc};
use uuid::Uuid;

use crate::constants::SHORT_ID_LEN;

/// Cut `s` to at most `max_chars` characters, ending in `…` when cut.
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    match max_chars {
        0 => String::new(),
        n => s.chars().take(n - 1).chain(std::iter::once('…')).collect(),
    }
}

pub fn short_id(id: &Uuid) -> String {
    id.simple().to_string()[..SHORT_ID_LEN].to_string()
}

/// Local `YYYY-MM-DD HH:MM` for people, RFC 3339 UTC for scripts.
pub fn format_datetime(dt: &DateTime<Utc>, pretty: bool) -> String {
    if pretty {
        dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
    } else {
        dt.to_rfc3339()
    }
}

/// Thin-space digit groups as ordinary spaces.
pub fn plain_spaces(s: &str) -> String {
    s.replace('\u{2009}', " ")
}

/// Collapse line breaks and tabs so a value fits one table cell.
pub fn single_line(s: &str) -> String {
    s.split(['\n', '\r', '\t'])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_truncate_keeps_short_labels() {
        assert_eq!(truncate("rent", 10), "rent");
        assert_eq!(truncate("rent", 4), "rent");
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("groceries and coffee", 10), "groceries…");
        assert_eq!(truncate("кофе с молоком", 5), "кофе…");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn test_short_id_is_a_prefix() {
        let id = Uuid::parse_str("7a2e3c0b-1234-4678-9abc-def012345678").unwrap();
        assert_eq!(short_id(&id), "7a2e3c0b");
        assert!(id.to_string().starts_with(&short_id(&id)));
    }

    #[test]
    fn test_plain_datetime_is_rfc3339() {
        let dt = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap();
        assert_eq!(format_datetime(&dt, false), "2026-03-01T09:30:00+00:00");
        assert_eq!(format_datetime(&dt, true).len(), "2026-03-01 09:30".len());
    }

    #[test]
    fn test_plain_spaces() {
        assert_eq!(plain_spaces("-1\u{2009}234\u{2009}567,5"), "-1 234 567,5");
    }

    #[test]
    fn test_single_line() {
        assert_eq!(single_line("rent\r\nmarch"), "rent march");
        assert_eq!(single_line("a\tb"), "a b");
    }
}
