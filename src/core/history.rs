//! Command history with an up/down recall cursor.

use crate::config::MAX_COMMAND_HISTORY;

/// Effect of a recall step on the input buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Recall<'a> {
    /// Replace the buffer with this entry.
    Entry(&'a str),
    /// Walked past the newest entry: clear the buffer.
    Cleared,
    /// Nothing to do.
    Unchanged,
}

/// Submitted commands, oldest first, with an optional recall cursor.
///
/// The cursor, when set, always indexes a valid entry.
#[derive(Clone, Debug)]
pub struct CommandHistory {
    entries: Vec<String>,
    cursor: Option<usize>,
    capacity: usize,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::with_capacity(MAX_COMMAND_HISTORY)
    }

    /// Creates a history keeping at most `capacity` entries.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "CommandHistory capacity must be greater than 0");
        Self {
            entries: Vec::new(),
            cursor: None,
            capacity,
        }
    }

    /// Appends a submitted command and resets the cursor.
    ///
    /// Blank commands are not recorded. The oldest entry is dropped once
    /// the history is full.
    pub fn push(&mut self, cmd: &str) {
        let cmd = cmd.trim();
        if !cmd.is_empty() {
            if self.entries.len() == self.capacity {
                self.entries.remove(0);
            }
            self.entries.push(cmd.to_string());
        }
        self.cursor = None;
    }

    /// Step toward older entries, saturating at the oldest.
    pub fn older(&mut self) -> Recall<'_> {
        if self.is_empty() {
            return Recall::Unchanged;
        }
        let index = match self.cursor {
            None => self.entries.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.cursor = Some(index);
        Recall::Entry(&self.entries[index])
    }

    /// Step toward newer entries; past the newest the cursor is released.
    pub fn newer(&mut self) -> Recall<'_> {
        match self.cursor {
            None => Recall::Unchanged,
            Some(i) if i + 1 < self.entries.len() => {
                self.cursor = Some(i + 1);
                Recall::Entry(&self.entries[i + 1])
            }
            Some(_) => {
                self.cursor = None;
                Recall::Cleared
            }
        }
    }

    #[cfg(test)]
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new()
    }
}
