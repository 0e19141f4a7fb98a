//! Parsing helpers for output format and numeric input.

use tape_core::format::parse_input_to_number;

use crate::errors::CliError;
use crate::ui::OutputFormat;

pub fn parse_output_format(value: Option<&str>) -> anyhow::Result<Option<OutputFormat>> {
    match value {
        None => Ok(None),
        Some("table") => Ok(Some(OutputFormat::Table)),
        Some("plain") => Ok(Some(OutputFormat::Plain)),
        Some(other) => Err(CliError::invalid_input(format!(
            "Unsupported format: {} (use table or plain)",
            other
        ))
        .into()),
    }
}

/// Parse a number as displayed by the tape ("1 234,5", "-0.25").
pub fn parse_value(value: &str) -> anyhow::Result<f64> {
    parse_input_to_number(value).map_err(|_| {
        CliError::invalid_input(format!(
            "Invalid value: {} (expected a number such as 1 234,50)",
            value
        ))
        .into()
    })
}

/// Join shell words of an expression (`tape eval 2 + 3`).
pub fn join_words(words: &[String]) -> String {
    words.join(" ")
}
