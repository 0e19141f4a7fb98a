use std::fmt;

use super::EvalError;

/// Binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Map a normalized character to an operator.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// Binding strength; every operator is left-associative.
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 1,
            Operator::Mul | Operator::Div => 2,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A lexical unit of a normalized expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Number literal, kept as text until evaluation
    Number(String),
    Operator(Operator),
    LeftParen,
    RightParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(text) => write!(f, "{}", text),
            Token::Operator(op) => write!(f, "{}", op),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
        }
    }
}

/// Split a normalized expression into tokens in a single left-to-right pass.
///
/// A `-` at the start of input, after `(` or after another operator is unary
/// and is emitted as `Number("0"), Operator(Sub)`.
///
/// Number runs start at a digit or `.`, take digits and at most one `.`; a
/// second `.` ends the run without being consumed.
///
/// # Errors
///
/// - `InvalidNumber(".")` for a run consisting of a lone `.`
/// - `InvalidCharacter` for anything that is not a digit, `.`, operator or paren
pub fn tokenize(normalized: &str) -> Result<Vec<Token>, EvalError> {
    let chars: Vec<char> = normalized.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '(' {
            tokens.push(Token::LeftParen);
            i += 1;
            continue;
        }
        if c == ')' {
            tokens.push(Token::RightParen);
            i += 1;
            continue;
        }

        if let Some(op) = Operator::from_char(c) {
            let unary = op == Operator::Sub
                && matches!(
                    tokens.last(),
                    None | Some(Token::LeftParen) | Some(Token::Operator(_))
                );
            if unary {
                tokens.push(Token::Number("0".to_string()));
            }
            tokens.push(Token::Operator(op));
            i += 1;
            continue;
        }

        if c.is_ascii_digit() || c == '.' {
            let start = i;
            let mut seen_dot = false;
            while i < chars.len() {
                let cc = chars[i];
                if cc == '.' {
                    if seen_dot {
                        break;
                    }
                    seen_dot = true;
                } else if !cc.is_ascii_digit() {
                    break;
                }
                i += 1;
            }
            let text: String = chars[start..i].iter().collect();
            if text == "." {
                return Err(EvalError::InvalidNumber(text));
            }
            tokens.push(Token::Number(text));
            continue;
        }

        return Err(EvalError::InvalidCharacter(c.to_string()));
    }

    Ok(tokens)
}
