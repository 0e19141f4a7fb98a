//! Error types for Tape core operations.
//!
//! Expression failures live in [`crate::expr::EvalError`]; this module wraps
//! them together with ledger and storage failures. The CLI layer maps these
//! to user-facing messages and exit codes.

use thiserror::Error;

use crate::expr::EvalError;

/// Result type alias for Tape operations.
pub type Result<T> = std::result::Result<T, TapeError>;

/// Core error type for Tape operations.
#[derive(Debug, Error)]
pub enum TapeError {
    /// The expression could not be evaluated
    #[error(transparent)]
    Eval(#[from] EvalError),

    /// The expression evaluated, but not to a finite number
    #[error("Result is not a finite number: {0}")]
    NonFinite(String),

    /// A label was resolved while no expression was waiting for one
    #[error("No expression is waiting for a label")]
    NoPendingLabel,

    /// Entry not found
    #[error("Entry not found: {0}")]
    NotFound(String),

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl TapeError {
    /// Whether the error was caused by user input rather than the environment.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            TapeError::Eval(_) | TapeError::NonFinite(_) | TapeError::NoPendingLabel
        )
    }
}

impl From<std::io::Error> for TapeError {
    fn from(err: std::io::Error) -> Self {
        TapeError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for TapeError {
    fn from(err: serde_json::Error) -> Self {
        TapeError::Validation(err.to_string())
    }
}
