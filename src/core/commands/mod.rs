//! Command table and resolution.
//!
//! This module provides:
//! - `Command` enum, the closed set of portfolio commands
//! - `TABLE`, the ordered name → command mapping (aliases included)
//! - `resolve` for turning raw input into output lines
//!
//! # Architecture
//!
//! Input is normalized (trimmed, lowercased) and looked up in `TABLE`.
//! A hit yields the command's fixed text via `Command::output`; a miss
//! becomes a `CommandError::NotFound` carrying suggestions, which
//! `resolve` renders as ordinary output.

mod execute;
mod resolve;

pub use resolve::{resolve, suggestions};

use crate::core::error::CommandError;

// =============================================================================
// Command Enum
// =============================================================================

/// A recognized portfolio command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    About,
    Projects,
    Skills,
    Experience,
    Awards,
    Contact,
    Whoami,
    Pwd,
    Ls,
    /// Clears the screen. Produces no lines; the session discards the
    /// transcript instead.
    Clear,
    Sudo,
    Hack,
    Matrix,
    /// `sudo rm -rf /`
    RmRf,
    Exit,
}

/// Command names in lookup and suggestion order.
pub const TABLE: &[(&str, Command)] = &[
    ("help", Command::Help),
    ("about", Command::About),
    ("projects", Command::Projects),
    ("skills", Command::Skills),
    ("experience", Command::Experience),
    ("awards", Command::Awards),
    ("contact", Command::Contact),
    ("whoami", Command::Whoami),
    ("pwd", Command::Pwd),
    ("ls", Command::Ls),
    ("clear", Command::Clear),
    ("sudo", Command::Sudo),
    ("hack", Command::Hack),
    ("hacks", Command::Hack),
    ("matrix", Command::Matrix),
    ("sudo rm -rf /", Command::RmRf),
    ("exit", Command::Exit),
];

impl Command {
    /// All registered command names, aliases included.
    pub fn names() -> impl Iterator<Item = &'static str> {
        TABLE.iter().map(|(name, _)| *name)
    }

    /// Look up a command by name, ignoring case and surrounding whitespace.
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let normalized = normalize(input);
        TABLE
            .iter()
            .find(|(name, _)| *name == normalized)
            .map(|(_, cmd)| *cmd)
            .ok_or_else(|| CommandError::NotFound {
                input: input.trim().to_string(),
                suggestions: suggestions(&normalized),
            })
    }
}

/// Lowercase and trim a raw command string.
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_table_name() {
        for (name, cmd) in TABLE {
            assert_eq!(Command::parse(name), Ok(*cmd), "{name}");
        }
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(Command::parse("HELP"), Ok(Command::Help));
        assert_eq!(Command::parse("CleAr"), Ok(Command::Clear));
        assert_eq!(Command::parse("Sudo RM -rf /"), Ok(Command::RmRf));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(Command::parse("  about\t"), Ok(Command::About));
        assert_eq!(Command::parse("\n ls \n"), Ok(Command::Ls));
    }

    #[test]
    fn test_parse_keeps_inner_whitespace() {
        assert!(Command::parse("sudo  rm -rf /").is_err());
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!(Command::parse("hacks"), Ok(Command::Hack));
        assert_eq!(Command::parse("hack"), Ok(Command::Hack));
    }

    #[test]
    fn test_parse_unknown() {
        match Command::parse("Foobar") {
            Err(CommandError::NotFound { input, suggestions }) => {
                assert_eq!(input, "Foobar");
                assert!(suggestions.is_empty());
            }
            other => panic!("Expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_command_names() {
        let names: Vec<_> = Command::names().collect();
        assert_eq!(names.len(), 17);
        assert_eq!(names[0], "help");
        assert!(names.contains(&"sudo rm -rf /"));
        assert!(names.contains(&"hacks"));
        // Names are stored normalized so lookup is a plain comparison
        for name in names {
            assert_eq!(normalize(name), name);
        }
    }
}
