//! Keypad input policy.
//!
//! Decides how a key press changes the current expression. The rules hold
//! regardless of which front end sends the keys.

use std::fmt;
use std::str::FromStr;

use crate::error::TapeError;
use crate::expr::{normalize, Operator};

/// Longest expression the keypad will build, in normalized characters.
pub const MAX_EXPR_LEN: usize = 80;

/// A key on the virtual keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit(u8),
    Comma,
    Operator(Operator),
    LeftParen,
    RightParen,
    Backspace,
    Clear,
    Equals,
}

impl FromStr for Key {
    type Err = TapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s {
            "," | "." => Key::Comma,
            "+" => Key::Operator(Operator::Add),
            "-" => Key::Operator(Operator::Sub),
            "*" | "×" | "x" => Key::Operator(Operator::Mul),
            "/" | "÷" => Key::Operator(Operator::Div),
            "(" => Key::LeftParen,
            ")" => Key::RightParen,
            "BK" | "bk" | "backspace" | "Backspace" | "<" => Key::Backspace,
            "C" | "c" | "clear" | "Clear" => Key::Clear,
            "=" => Key::Equals,
            digit if digit.len() == 1 && digit.as_bytes()[0].is_ascii_digit() => {
                Key::Digit(digit.as_bytes()[0] - b'0')
            }
            other => {
                return Err(TapeError::Validation(format!("Unknown key: {}", other)));
            }
        };
        Ok(key)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Digit(d) => write!(f, "{}", d),
            Key::Comma => f.write_str(","),
            Key::Operator(op) => write!(f, "{}", op),
            Key::LeftParen => f.write_str("("),
            Key::RightParen => f.write_str(")"),
            Key::Backspace => f.write_str("BK"),
            Key::Clear => f.write_str("C"),
            Key::Equals => f.write_str("="),
        }
    }
}

/// Split a whitespace-separated key string such as `"1 2 , 5 + 3 ="`.
///
/// Runs of digits may also be written together (`"12,5+3="`); every
/// character of a token that is not itself a key name becomes its own key.
pub fn parse_keys(input: &str) -> Result<Vec<Key>, TapeError> {
    let mut keys = Vec::new();
    for word in input.split_whitespace() {
        if let Ok(key) = word.parse::<Key>() {
            keys.push(key);
            continue;
        }
        for c in word.chars() {
            keys.push(c.to_string().parse()?);
        }
    }
    Ok(keys)
}

/// What an editing key does to the expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Edit {
    Replace(String),
    Reject,
}

fn is_operator_char(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '×' | '÷')
}

/// The number currently being typed: everything after the last operator or
/// paren, on the normalized text.
fn current_run(normalized: &str) -> &str {
    match normalized.rfind(|c: char| is_operator_char(c) || c == '(' || c == ')') {
        Some(pos) => &normalized[pos + 1..],
        None => normalized,
    }
}

/// Apply an editing key (anything but `=`) to `expr`.
pub(crate) fn edit(expr: &str, key: Key) -> Edit {
    let addition: String = match key {
        Key::Clear => return Edit::Replace(String::new()),
        Key::Backspace => {
            let mut next = expr.to_string();
            return match next.pop() {
                Some(_) => Edit::Replace(next),
                None => Edit::Reject,
            };
        }
        Key::Equals => return Edit::Reject,
        Key::Digit(d) => char::from(b'0' + d.min(9)).to_string(),
        Key::LeftParen => "(".to_string(),
        Key::RightParen => ")".to_string(),
        Key::Comma => {
            let normalized = normalize(expr);
            let run = current_run(&normalized);
            if run.contains('.') {
                return Edit::Reject;
            }
            if run.is_empty() {
                "0,".to_string()
            } else {
                ",".to_string()
            }
        }
        Key::Operator(op) => {
            let symbol = op.symbol();
            match expr.chars().last() {
                None if op != Operator::Sub => return Edit::Reject,
                // A lone leading `-` stays; only `-` may open an expression
                Some(last)
                    if is_operator_char(last) && op != Operator::Sub && expr.chars().count() == 1 =>
                {
                    return Edit::Reject;
                }
                Some(last) if is_operator_char(last) && op != Operator::Sub => {
                    let mut next = expr.to_string();
                    next.pop();
                    next.push(symbol);
                    return Edit::Replace(next);
                }
                _ => symbol.to_string(),
            }
        }
    };

    let next = format!("{}{}", expr, addition);
    if normalize(&next).chars().count() > MAX_EXPR_LEN {
        return Edit::Reject;
    }
    Edit::Replace(next)
}
