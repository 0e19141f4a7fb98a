//! # Tape Core
//!
//! Core library for Tape - a keypad calculator that keeps a labeled,
//! running-total tape of evaluated expressions.
//!
//! This crate provides the expression engine, number formatting, the tape
//! ledger state machine and the snapshot persistence contract, independent of
//! any front end.
//!
//! ## Architecture
//!
//! - **expr**: normalization, tokenization, shunting-yard and postfix evaluation
//! - **format**: display formatting (thin-space grouping, decimal comma)
//! - **ledger**: entries, running total, keypad policy, pending-label flow
//! - **storage**: snapshot store trait and implementations (JSON file, memory)

pub mod error;
pub mod expr;
pub mod format;
pub mod fs;
pub mod ledger;
pub mod storage;

pub use error::{Result, TapeError};
pub use expr::{evaluate, EvalError};
pub use format::{format_number, Decimals};
pub use ledger::Ledger;
pub use storage::SnapshotStore;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
