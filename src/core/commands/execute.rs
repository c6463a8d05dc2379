//! Command output producers.
//!
//! Every command maps to a fixed block of text; producing it has no side
//! effects.

use crate::config::{content, site};

use super::Command;

impl Command {
    /// The fixed output lines of this command.
    pub fn output(self) -> Vec<String> {
        match self {
            Self::Help => text_lines(content::HELP),
            Self::About => text_lines(content::ABOUT),
            Self::Projects => text_lines(content::PROJECTS),
            Self::Skills => text_lines(content::SKILLS),
            Self::Experience => text_lines(content::EXPERIENCE),
            Self::Awards => text_lines(content::AWARDS),
            Self::Contact => text_lines(content::CONTACT),
            Self::Whoami => text_lines(content::WHOAMI),
            Self::Pwd => vec![site().home.clone()],
            Self::Ls => text_lines(content::LS),
            // Handled by the session, which discards the transcript
            Self::Clear => vec![],
            Self::Sudo => text_lines(content::SUDO),
            Self::Hack => text_lines(content::HACK),
            Self::Matrix => text_lines(content::MATRIX),
            Self::RmRf => text_lines(content::RM_RF),
            Self::Exit => text_lines(content::EXIT),
        }
    }
}

/// Split a text asset into owned lines.
///
/// A trailing blank line in the asset becomes a trailing empty string.
fn text_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}
