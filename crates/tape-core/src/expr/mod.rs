//! Arithmetic expression engine.
//!
//! Raw keypad text goes through four stages, each a pure function:
//!
//! 1. [`normalize`] - strip whitespace, map `,` `×` `÷` to `.` `*` `/`
//! 2. [`tokenize`] - flat token list, unary minus rewritten as `0 -`
//! 3. [`to_postfix`] - shunting-yard reordering
//! 4. [`eval_postfix`] - stack reduction to an `f64`
//!
//! [`evaluate`] composes them and returns the first failure as a value.

mod normalize;
mod postfix;
mod token;

use thiserror::Error;

pub use normalize::normalize;
pub use postfix::{eval_postfix, to_postfix};
pub use token::{tokenize, Operator, Token};

/// Reasons an expression cannot be evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("Expression is empty")]
    EmptyExpression,

    #[error("Invalid character: {0}")]
    InvalidCharacter(String),

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Unbalanced parentheses")]
    UnbalancedParens,

    #[error("Malformed expression")]
    MalformedExpression,

    #[error("Division by zero")]
    DivisionByZero,
}

/// Evaluate raw keypad text.
///
/// Arithmetic follows `f64` semantics, so overflow yields an infinite result
/// rather than an error. Division by zero is always an error.
///
/// # Errors
///
/// Returns the first [`EvalError`] produced by any stage.
pub fn evaluate(raw: &str) -> Result<f64, EvalError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EvalError::EmptyExpression);
    }
    let normalized = normalize(trimmed);
    let tokens = tokenize(&normalized)?;
    let postfix = to_postfix(&tokens)?;
    eval_postfix(&postfix)
}
