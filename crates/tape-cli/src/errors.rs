//! CLI error types for structured error handling.
//!
//! Typed errors map to specific exit codes; core errors are classified in
//! [`exit_code_for`].

use std::fmt;

use tape_core::{EvalError, TapeError};

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (entry, config)
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => write!(f, "{}\n{}", message, hint),
            CliError::InvalidInput(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
        }
    }
}

/// Pick the process exit code for an error that reached `main`.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }
    if err.downcast_ref::<EvalError>().is_some() {
        return exit_codes::INVALID_INPUT;
    }
    match err.downcast_ref::<TapeError>() {
        Some(TapeError::NotFound(_)) => exit_codes::NOT_FOUND,
        Some(TapeError::Validation(_)) => exit_codes::INVALID_INPUT,
        Some(tape_err) if tape_err.is_user_error() => exit_codes::INVALID_INPUT,
        _ => exit_codes::FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display_includes_hint() {
        let err = CliError::not_found("Entry not found: abcd", "Hint: Run `tape list`.");
        assert_eq!(err.to_string(), "Entry not found: abcd\nHint: Run `tape list`.");
        assert_eq!(err.exit_code(), exit_codes::NOT_FOUND);
    }

    #[test]
    fn test_exit_codes_for_core_errors() {
        let eval = anyhow::Error::from(TapeError::from(EvalError::DivisionByZero));
        assert_eq!(exit_code_for(&eval), exit_codes::INVALID_INPUT);

        let bare = anyhow::Error::from(EvalError::EmptyExpression);
        assert_eq!(exit_code_for(&bare), exit_codes::INVALID_INPUT);

        let missing = anyhow::Error::from(TapeError::NotFound("x".to_string()));
        assert_eq!(exit_code_for(&missing), exit_codes::NOT_FOUND);

        let storage = anyhow::Error::from(TapeError::Storage("disk".to_string()));
        assert_eq!(exit_code_for(&storage), exit_codes::FAILURE);

        let other = anyhow::anyhow!("boom");
        assert_eq!(exit_code_for(&other), exit_codes::FAILURE);
    }
}
