//! Custom error types for the application.
//!
//! - [`CommandError`] - unrecognized commands (rendered as terminal output)
//! - [`ConfigError`] - invalid `site.toml`
//! - [`MountError`] - missing DOM pieces at startup

use thiserror::Error;

/// Command resolution errors.
///
/// Never surfaces to the user as a failure: the resolver turns it into
/// ordinary output lines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// No table entry matches the normalized input.
    #[error("Command '{input}' not found.")]
    NotFound {
        /// The input as the user typed it.
        input: String,
        /// Related command names, in table order.
        suggestions: Vec<&'static str>,
    },
}

/// Site configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site.toml: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("site.toml field `{0}` must not be empty")]
    EmptyField(&'static str),
    #[error("site.toml boot sequence has no messages")]
    EmptyBoot,
}

/// Startup errors while locating the mount point.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MountError {
    #[error("browser window not available")]
    NoWindow,
    #[error("document not available")]
    NoDocument,
    #[error("mount element #{0} not found")]
    MissingElement(&'static str),
}
