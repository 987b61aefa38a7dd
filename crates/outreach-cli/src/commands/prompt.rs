//! Interactive console prompts.
//!
//! Collectors are pure functions of their parameters; prompting for the
//! values the user did not pass as flags happens here, at the CLI edge.

use anyhow::Result;
use colored::Colorize;
use rustyline::DefaultEditor;

/// Reads one trimmed line from the user.
pub(crate) fn line(message: &str) -> Result<String> {
    let mut editor = DefaultEditor::new()?;
    let input = editor.readline(&format!("{} ", message.bold()))?;
    Ok(input.trim().to_string())
}

/// Reads one trimmed line, treating an empty answer as "skip".
pub(crate) fn optional(message: &str) -> Result<Option<String>> {
    let input = line(message)?;
    if input.is_empty() { Ok(None) } else { Ok(Some(input)) }
}

/// Returns `value` if present, otherwise prompts for it.
pub(crate) fn or_ask(value: Option<String>, message: &str) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None => line(message),
    }
}

/// Returns `value` if present, otherwise prompts, allowing a skip.
pub(crate) fn or_ask_optional(value: Option<String>, message: &str) -> Result<Option<String>> {
    match value {
        Some(value) => Ok(Some(value)),
        None => optional(message),
    }
}
