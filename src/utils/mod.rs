//! Utility modules for browser and time operations.
//!
//! Provides:
//! - [`dom`] - Mount point lookup, focus and caret helpers
//! - [`time`] - Timestamps and clock formatting

pub mod dom;
pub mod time;
