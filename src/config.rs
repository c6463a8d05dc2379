//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Text assets are loaded at compile time using `include_str!`, and the site
//! identity plus boot script come from `assets/site.toml`.

use std::sync::OnceLock;

use log::Level;
use serde::Deserialize;

use crate::core::error::ConfigError;

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// Command output blocks, one file per command.
pub mod content {
    pub const HELP: &str = include_str!("../assets/text/help.txt");
    pub const ABOUT: &str = include_str!("../assets/text/about.txt");
    pub const PROJECTS: &str = include_str!("../assets/text/projects.txt");
    pub const SKILLS: &str = include_str!("../assets/text/skills.txt");
    pub const EXPERIENCE: &str = include_str!("../assets/text/experience.txt");
    pub const AWARDS: &str = include_str!("../assets/text/awards.txt");
    pub const CONTACT: &str = include_str!("../assets/text/contact.txt");
    pub const WHOAMI: &str = include_str!("../assets/text/whoami.txt");
    pub const LS: &str = include_str!("../assets/text/ls.txt");
    pub const SUDO: &str = include_str!("../assets/text/sudo.txt");
    pub const HACK: &str = include_str!("../assets/text/hack.txt");
    pub const MATRIX: &str = include_str!("../assets/text/matrix.txt");
    pub const RM_RF: &str = include_str!("../assets/text/rm_rf.txt");
    pub const EXIT: &str = include_str!("../assets/text/exit.txt");
}

/// Raw site configuration.
const SITE_TOML: &str = include_str!("../assets/site.toml");

// =============================================================================
// Application Metadata
// =============================================================================

/// Id of the element the application mounts into.
pub const MOUNT_ELEMENT_ID: &str = "app";

/// Log level for the browser console logger.
pub const LOG_LEVEL: Level = if cfg!(debug_assertions) {
    Level::Debug
} else {
    Level::Info
};

// =============================================================================
// Terminal Configuration
// =============================================================================

/// Maximum number of displayed lines kept in the transcript.
pub const MAX_TERMINAL_HISTORY: usize = 1000;

/// Maximum number of command history entries to keep.
pub const MAX_COMMAND_HISTORY: usize = 100;

/// Command names offered by Tab completion, in display order.
///
/// Easter eggs are deliberately absent.
pub const COMPLETIONS: &[&str] = &[
    "about",
    "projects",
    "skills",
    "experience",
    "awards",
    "contact",
    "help",
    "clear",
    "whoami",
    "pwd",
    "ls",
];

/// Maximum number of "did you mean" suggestions for an unknown command.
pub const MAX_SUGGESTIONS: usize = 3;

// =============================================================================
// Site Configuration
// =============================================================================

/// Identity and boot script of the portfolio owner.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SiteConfig {
    /// Login name shown in the prompt.
    pub user: String,
    /// Host name shown in the prompt.
    pub host: String,
    /// Working directory printed by `pwd`.
    pub home: String,
    /// Full name of the portfolio owner.
    pub owner: String,
    #[serde(default)]
    pub boot: BootConfig,
}

/// Boot sequence messages and pacing.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct BootConfig {
    /// Number of leading messages that use `slow_delay_ms`.
    pub slow_steps: usize,
    pub slow_delay_ms: u32,
    pub fast_delay_ms: u32,
    pub messages: Vec<String>,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            slow_steps: 5,
            slow_delay_ms: 400,
            fast_delay_ms: 200,
            messages: vec!["Starting interactive shell... ✓".to_string(), String::new()],
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            user: "guest".to_string(),
            host: "portfolio".to_string(),
            home: "/home/guest".to_string(),
            owner: "guest".to_string(),
            boot: BootConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a site configuration from TOML text.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("user", &self.user),
            ("host", &self.host),
            ("home", &self.home),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyField(field));
            }
        }
        if self.boot.messages.is_empty() {
            return Err(ConfigError::EmptyBoot);
        }
        Ok(())
    }

    /// Prompt shown before input lines (`user@host:~$`).
    pub fn prompt(&self) -> String {
        format!("{}@{}:~$", self.user, self.host)
    }

    /// Title shown in the window chrome (`user@host: ~`).
    pub fn title(&self) -> String {
        format!("{}@{}: ~", self.user, self.host)
    }
}

/// The site configuration, parsed once.
///
/// A broken `site.toml` is logged and replaced by [`SiteConfig::default`].
pub fn site() -> &'static SiteConfig {
    static SITE: OnceLock<SiteConfig> = OnceLock::new();
    SITE.get_or_init(|| {
        SiteConfig::parse(SITE_TOML).unwrap_or_else(|e| {
            log::error!("falling back to default site config: {}", e);
            SiteConfig::default()
        })
    })
}
