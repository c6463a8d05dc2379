//! Bounded store for the displayed terminal lines.

use std::collections::VecDeque;

use crate::config::MAX_TERMINAL_HISTORY;
use crate::models::DisplayedLine;

/// Displayed lines, oldest first.
///
/// When the transcript reaches capacity, new lines push out the oldest ones.
/// Every change bumps [`revision`](Transcript::revision), so observers can
/// tell whether the lines changed without comparing them.
#[derive(Clone, Debug)]
pub struct Transcript {
    lines: VecDeque<DisplayedLine>,
    capacity: usize,
    revision: u64,
}

impl Transcript {
    pub fn new() -> Self {
        Self::with_capacity(MAX_TERMINAL_HISTORY)
    }

    /// Creates a transcript holding at most `capacity` lines.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "Transcript capacity must be greater than 0");
        Self {
            lines: VecDeque::with_capacity(capacity.min(64)),
            capacity,
            revision: 0,
        }
    }

    /// Appends a line. O(1).
    pub fn push(&mut self, line: DisplayedLine) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
        self.revision = self.revision.wrapping_add(1);
    }

    pub fn extend(&mut self, lines: impl IntoIterator<Item = DisplayedLine>) {
        for line in lines {
            self.push(line);
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.revision = self.revision.wrapping_add(1);
    }

    /// Change counter, bumped by every push and clear.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &DisplayedLine> {
        self.lines.iter()
    }

    /// Clones the lines into a `Vec` for rendering.
    pub fn to_vec(&self) -> Vec<DisplayedLine> {
        self.iter().cloned().collect()
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(t: &Transcript) -> Vec<String> {
        t.iter().map(|l| l.text.clone()).collect()
    }

    #[test]
    fn test_push_and_iterate_in_order() {
        let mut t = Transcript::new();
        t.push(DisplayedLine::input("ls"));
        t.push(DisplayedLine::output("total 42"));
        assert_eq!(texts(&t), vec!["ls", "total 42"]);
        assert_eq!(t.iter().last().map(|l| l.text.as_str()), Some("total 42"));
    }

    #[test]
    fn test_overflow_drops_oldest() {
        let mut t = Transcript::with_capacity(3);
        t.extend(["1", "2", "3", "4", "5"].map(DisplayedLine::output));
        assert_eq!(t.len(), 3);
        assert_eq!(texts(&t), vec!["3", "4", "5"]);
    }

    #[test]
    fn test_clear() {
        let mut t = Transcript::new();
        t.extend(["a", "b"].map(DisplayedLine::output));
        t.clear();
        assert!(t.is_empty());
        assert!(t.iter().last().is_none());
        t.push(DisplayedLine::output("c"));
        assert_eq!(texts(&t), vec!["c"]);
    }

    #[test]
    fn test_revision_tracks_changes() {
        let mut t = Transcript::with_capacity(2);
        assert_eq!(t.revision(), 0);
        t.push(DisplayedLine::output("a"));
        t.extend(["b", "c"].map(DisplayedLine::output));
        // Evicting the oldest line is still a change
        assert_eq!(t.revision(), 3);
        t.clear();
        assert_eq!(t.revision(), 4);
    }

    #[test]
    fn test_to_vec_preserves_ids() {
        let mut t = Transcript::new();
        let line = DisplayedLine::output("x");
        let id = line.id;
        t.push(line);
        assert_eq!(t.to_vec()[0].id, id);
    }

    #[test]
    #[should_panic(expected = "capacity must be greater than 0")]
    fn test_zero_capacity_panics() {
        let _ = Transcript::with_capacity(0);
    }
}
