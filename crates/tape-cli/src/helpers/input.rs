//! Interactive prompts for labels and confirmations.

use dialoguer::{Confirm, Input};

/// What the user decided for a value waiting for a label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelChoice {
    /// Keep the value with this label (may be empty)
    Keep(String),
    /// Drop the value
    Discard,
}

/// Ask for a label for `display_value`.
///
/// An empty answer asks whether to keep the value without a label.
pub fn prompt_label(display_value: &str) -> anyhow::Result<LabelChoice> {
    let label: String = Input::new()
        .with_prompt(format!("Label for {}", display_value))
        .allow_empty(true)
        .interact_text()
        .map_err(|e| anyhow::anyhow!("Failed to read label: {}", e))?;

    if !label.trim().is_empty() {
        return Ok(LabelChoice::Keep(label));
    }

    if confirm("Add without a label?", true)? {
        Ok(LabelChoice::Keep(String::new()))
    } else {
        Ok(LabelChoice::Discard)
    }
}

/// Yes/no question.
pub fn confirm(prompt: &str, default: bool) -> anyhow::Result<bool> {
    Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read answer: {}", e))
}
