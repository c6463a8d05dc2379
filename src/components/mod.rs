//! UI components built with Leptos.
//!
//! - [`terminal`] - Terminal emulator interface, with [`Shell`] as its window

pub mod terminal;

pub use terminal::Shell;
