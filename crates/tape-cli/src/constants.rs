//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Unclassified failure.
    pub const FAILURE: i32 = 1;

    /// Resource not found (entry, config).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input: an expression that does not evaluate, a bad key
    /// or value, an ambiguous ID.
    pub const INVALID_INPUT: i32 = 4;
}

/// Characters of a UUID shown in tables.
pub const SHORT_ID_LEN: usize = 8;

/// Shortest accepted entry ID prefix.
pub const MIN_ID_PREFIX_LEN: usize = 4;
