//! Data models and types for the application.
//!
//! - [`DisplayedLine`], [`Tone`] - Terminal transcript lines (see [`terminal`])

pub mod terminal;

pub use terminal::{DisplayedLine, Tone};
