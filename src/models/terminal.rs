//! Terminal-related data types for output rendering.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::utils::time::now_ms;

/// Who produced a displayed line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    /// Echo of a submitted command
    Input,
    /// Command or boot output
    Output,
    /// Output reporting a failure
    Error,
}

impl LineKind {
    /// Kind of a resolved output line, judged by its text.
    pub fn for_output(text: &str) -> Self {
        if text.starts_with("Error:") {
            Self::Error
        } else {
            Self::Output
        }
    }
}

/// Color hint for rendering a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    /// Submitted command (shown after the prompt)
    Prompt,
    /// Error output (red)
    Error,
    /// Completed step, marked with ✓ (green)
    Success,
    /// Progress bar output (cyan)
    Progress,
    /// Everything else
    Plain,
}

/// A single line of the terminal transcript with a unique ID.
#[derive(Clone, Debug)]
pub struct DisplayedLine {
    /// Unique ID for efficient keying in For loops
    pub id: usize,
    pub kind: LineKind,
    pub text: String,
    /// Creation time, milliseconds since the Unix epoch
    pub timestamp: f64,
}

// Global counter for generating unique IDs
static LINE_COUNTER: AtomicUsize = AtomicUsize::new(0);

impl DisplayedLine {
    fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            id: LINE_COUNTER.fetch_add(1, Ordering::Relaxed),
            kind,
            text: text.into(),
            timestamp: now_ms(),
        }
    }

    pub fn input(text: impl Into<String>) -> Self {
        Self::new(LineKind::Input, text)
    }

    /// An output line, classified as error when it reads like one.
    pub fn output(text: impl Into<String>) -> Self {
        let text = text.into();
        Self::new(LineKind::for_output(&text), text)
    }

    pub fn tone(&self) -> Tone {
        match self.kind {
            LineKind::Input => Tone::Prompt,
            LineKind::Error => Tone::Error,
            LineKind::Output if self.text.contains('✓') => Tone::Success,
            LineKind::Output if self.text.contains("████") => Tone::Progress,
            LineKind::Output => Tone::Plain,
        }
    }

    /// Empty lines still take up a row when rendered.
    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }
}

impl PartialEq for DisplayedLine {
    fn eq(&self, other: &Self) -> bool {
        // Only compare content, not ID or time
        self.kind == other.kind && self.text == other.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        assert_eq!(LineKind::for_output("Error: nope"), LineKind::Error);
        assert_eq!(LineKind::for_output("error: lowercase"), LineKind::Output);
        assert_eq!(LineKind::for_output("  Error: indented"), LineKind::Output);
        assert_eq!(LineKind::for_output(""), LineKind::Output);
    }

    #[test]
    fn test_constructors() {
        assert_eq!(DisplayedLine::input("ls").kind, LineKind::Input);
        assert_eq!(DisplayedLine::output("total 42").kind, LineKind::Output);
        assert_eq!(
            DisplayedLine::output("Error: Cannot exit from awesome portfolio!").kind,
            LineKind::Error
        );
    }

    #[test]
    fn test_tone() {
        assert_eq!(DisplayedLine::input("ls").tone(), Tone::Prompt);
        assert_eq!(DisplayedLine::output("Error: x").tone(), Tone::Error);
        assert_eq!(
            DisplayedLine::output("Mounting file systems... ✓").tone(),
            Tone::Success
        );
        assert_eq!(
            DisplayedLine::output("Loading... ████████████ 100%").tone(),
            Tone::Progress
        );
        assert_eq!(DisplayedLine::output("hello").tone(), Tone::Plain);
    }

    #[test]
    fn test_input_line_is_never_toned_as_output() {
        assert_eq!(DisplayedLine::input("✓ ████").tone(), Tone::Prompt);
    }

    #[test]
    fn test_unique_ids() {
        let line1 = DisplayedLine::output("first");
        let line2 = DisplayedLine::output("second");
        let line3 = DisplayedLine::output("first");

        assert_ne!(line1.id, line2.id);
        assert_ne!(line1.id, line3.id);
        assert_ne!(line2.id, line3.id);

        // But content equality works
        assert_eq!(line1, line3);
    }

    #[test]
    fn test_timestamp_is_set() {
        assert!(DisplayedLine::output("x").timestamp > 0.0);
    }

    #[test]
    fn test_blank() {
        assert!(DisplayedLine::output("").is_blank());
        assert!(!DisplayedLine::output(" ").is_blank());
    }
}
