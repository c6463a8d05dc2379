//! Tab autocomplete for command names.
//!
//! Completion is prefix-based over [`COMPLETIONS`]:
//! - Single match: replace the input with it
//! - Multiple matches: show all of them, input unchanged
//! - No match or empty input: nothing happens

use crate::config::COMPLETIONS;

/// Result of an autocomplete attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AutocompleteResult {
    /// Single match - complete with this value.
    Single(&'static str),
    /// Multiple matches, in completion-list order.
    Multiple(Vec<&'static str>),
    /// No matches found.
    None,
}

/// Perform autocomplete on Tab press.
pub fn autocomplete(input: &str) -> AutocompleteResult {
    let mut matches = candidates(input);
    match matches.len() {
        0 => AutocompleteResult::None,
        1 => AutocompleteResult::Single(matches.remove(0)),
        _ => AutocompleteResult::Multiple(matches),
    }
}

/// Completion names starting with `input`, ignoring case.
///
/// Empty input has no candidates.
pub fn candidates(input: &str) -> Vec<&'static str> {
    if input.is_empty() {
        return vec![];
    }
    let input_lower = input.to_lowercase();
    COMPLETIONS
        .iter()
        .copied()
        .filter(|name| name.starts_with(&input_lower))
        .collect()
}
