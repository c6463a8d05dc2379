//! Core business logic for the terminal application.
//!
//! This module provides:
//! - `commands`: the command table and `resolve` for command output
//! - [`Session`], the terminal state machine driven by [`KeyAction`]s
//! - `autocomplete`: prefix completion for Tab
//! - [`boot`]: the boot sequence schedule

mod autocomplete;
pub mod boot;
mod commands;
pub mod error;
mod history;
mod keymap;
mod session;
mod transcript;

pub use keymap::KeyAction;
pub use session::Session;
