//! Display formatting for numbers and labels.
//!
//! Numbers are shown with the integer part grouped in triples by a thin
//! space (U+2009) and a comma as the decimal separator, e.g. `1 234 567,89`.

use crate::expr::{normalize, EvalError};

/// Maximum fractional digits shown in auto mode.
pub const AUTO_DECIMALS: usize = 10;

/// Rendering of non-finite values.
pub const ERROR_TEXT: &str = "Error";

/// Digit group separator (THIN SPACE).
pub const GROUP_SEPARATOR: char = '\u{2009}';

/// Decimal separator.
pub const DECIMAL_SEPARATOR: char = ',';

/// Fractional precision for [`format_number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Decimals {
    /// Up to [`AUTO_DECIMALS`] digits, trailing zeros removed
    #[default]
    Auto,
    /// Exactly this many digits
    Fixed(usize),
}

/// Render a number for display.
///
/// Non-finite values render as [`ERROR_TEXT`].
pub fn format_number(n: f64, decimals: Decimals) -> String {
    if !n.is_finite() {
        return ERROR_TEXT.to_string();
    }

    let fixed = match decimals {
        Decimals::Auto => {
            let raw = format!("{:.*}", AUTO_DECIMALS, n);
            raw.trim_end_matches('0').trim_end_matches('.').to_string()
        }
        Decimals::Fixed(places) => format!("{:.*}", places, n),
    };

    // No sign on a value that rounds to zero
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) if rest.chars().any(|c| matches!(c, '1'..='9')) => ("-", rest),
        Some(rest) => ("", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 * 3);
    out.push_str(sign);
    out.push_str(&group_digits(int_part));
    if let Some(frac) = frac_part {
        out.push(DECIMAL_SEPARATOR);
        out.push_str(frac);
    }
    out
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * GROUP_SEPARATOR.len_utf8());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(c);
    }
    out
}

/// Parse a displayed number (grouping spaces, decimal comma) back to `f64`.
///
/// # Errors
///
/// Returns `InvalidNumber` when the text is not a plain decimal number.
pub fn parse_input_to_number(text: &str) -> Result<f64, EvalError> {
    let normalized = normalize(text);
    let digits = normalized.strip_prefix('-').unwrap_or(&normalized);
    let plain = !digits.is_empty()
        && digits != "."
        && digits.chars().all(|c| c.is_ascii_digit() || c == '.')
        && digits.matches('.').count() <= 1;
    if !plain {
        return Err(EvalError::InvalidNumber(text.to_string()));
    }
    normalized
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| EvalError::InvalidNumber(text.to_string()))
}

/// Trim a label and cut it to at most `max` characters.
pub fn clamp_label(text: &str, max: usize) -> String {
    let trimmed = text.trim();
    match trimmed.char_indices().nth(max) {
        Some((cut, _)) => trimmed[..cut].to_string(),
        None => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thin(s: &str) -> String {
        s.replace(' ', "\u{2009}")
    }

    #[test]
    fn test_format_auto_trims_zeros() {
        assert_eq!(format_number(4.0, Decimals::Auto), "4");
        assert_eq!(format_number(2.5, Decimals::Auto), "2,5");
        assert_eq!(format_number(0.1 + 0.2, Decimals::Auto), "0,3");
        assert_eq!(format_number(1.0 / 3.0, Decimals::Auto), "0,3333333333");
    }

    #[test]
    fn test_format_groups_thousands() {
        assert_eq!(format_number(1234567.0, Decimals::Auto), thin("1 234 567"));
        assert_eq!(format_number(999.0, Decimals::Auto), "999");
        assert_eq!(format_number(1000.0, Decimals::Auto), thin("1 000"));
        assert_eq!(
            format_number(-1234.5, Decimals::Auto),
            thin("-1 234,5")
        );
    }

    #[test]
    fn test_format_fixed() {
        assert_eq!(format_number(1234.5, Decimals::Fixed(2)), thin("1 234,50"));
        assert_eq!(format_number(7.0, Decimals::Fixed(0)), "7");
        assert_eq!(format_number(-0.125, Decimals::Fixed(1)), "-0,1");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_number(f64::NAN, Decimals::Auto), ERROR_TEXT);
        assert_eq!(format_number(f64::INFINITY, Decimals::Fixed(2)), ERROR_TEXT);
        assert_eq!(format_number(f64::NEG_INFINITY, Decimals::Auto), ERROR_TEXT);
    }

    #[test]
    fn test_format_negative_zero() {
        assert_eq!(format_number(-0.0, Decimals::Auto), "0");
        assert_eq!(format_number(-1e-12, Decimals::Auto), "0");
    }

    #[test]
    fn test_format_fixed_negative_zero() {
        assert_eq!(format_number(-0.0, Decimals::Fixed(2)), "0,00");
        assert_eq!(format_number(-0.001, Decimals::Fixed(2)), "0,00");
        assert_eq!(format_number(-0.4, Decimals::Fixed(0)), "0");
        assert_eq!(format_number(-0.005, Decimals::Fixed(3)), "-0,005");
    }

    #[test]
    fn test_parse_input_round_trip() {
        let samples = [
            0.0,
            1.0,
            -3.0,
            2.5,
            1234567.891,
            -98765.4321,
            0.1 + 0.2,
            1.0 / 3.0,
            1e15,
            -7.000_000_000_1,
        ];
        for n in samples {
            let shown = format_number(n, Decimals::Auto);
            let parsed = parse_input_to_number(&shown).unwrap();
            assert!(
                (parsed - n).abs() <= 0.5e-10 * n.abs().max(1.0),
                "{} -> {} -> {}",
                n,
                shown,
                parsed
            );
        }
    }

    #[test]
    fn test_parse_input_rejects_expressions() {
        assert!(parse_input_to_number("1+2").is_err());
        assert!(parse_input_to_number("").is_err());
        assert!(parse_input_to_number(",").is_err());
        assert!(parse_input_to_number(ERROR_TEXT).is_err());
        assert!(parse_input_to_number("1,2,3").is_err());
    }

    #[test]
    fn test_clamp_label() {
        assert_eq!(clamp_label("  lunch  ", 140), "lunch");
        assert_eq!(clamp_label("", 140), "");
        assert_eq!(clamp_label("abcdef", 3), "abc");
        assert_eq!(clamp_label("ääää", 2), "ää");
        let long = "x".repeat(200);
        assert_eq!(clamp_label(&long, 140).chars().count(), 140);
    }
}
