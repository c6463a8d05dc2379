//! Resolution of raw input into output lines.

use crate::config::MAX_SUGGESTIONS;
use crate::core::error::CommandError;

use super::Command;

/// Hint appended to every "not found" response.
const HELP_HINT: &str = "Type 'help' to see all available commands.";

/// Resolve raw user input into the lines to display.
///
/// Total over all inputs: unknown commands produce a "not found" message,
/// related command names when any exist, and a pointer to `help`.
pub fn resolve(raw: &str) -> Vec<String> {
    match Command::parse(raw) {
        Ok(cmd) => cmd.output(),
        Err(err) => not_found_lines(&err),
    }
}

/// Table names related to `normalized` by substring, in table order.
///
/// A name is related when either string contains the other. At most
/// `MAX_SUGGESTIONS` names are returned.
pub fn suggestions(normalized: &str) -> Vec<&'static str> {
    Command::names()
        .filter(|name| name.contains(normalized) || normalized.contains(name))
        .take(MAX_SUGGESTIONS)
        .collect()
}

fn not_found_lines(err: &CommandError) -> Vec<String> {
    let CommandError::NotFound { suggestions, .. } = err;
    let mut lines = vec![err.to_string()];
    if !suggestions.is_empty() {
        lines.push(format!("Did you mean: {}?", suggestions.join(", ")));
    }
    lines.push(HELP_HINT.to_string());
    lines
}
