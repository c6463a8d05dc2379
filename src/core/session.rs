//! Terminal session state.
//!
//! A [`Session`] owns everything the terminal shows or remembers: the
//! transcript, the input buffer, the command history cursor, the
//! autocomplete candidate panel and whether the boot sequence has finished.
//! Every transition is synchronous and runs to completion.

use crate::core::autocomplete::{AutocompleteResult, autocomplete, candidates};
use crate::core::commands::{Command, resolve};
use crate::core::history::{CommandHistory, Recall};
use crate::core::keymap::KeyAction;
use crate::core::transcript::Transcript;
use crate::models::DisplayedLine;

/// What a submit did to the transcript.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Submitted {
    /// Blank input, nothing happened.
    Ignored,
    /// `clear` was run and the transcript discarded.
    Cleared,
    /// This many lines were appended (the input echo included).
    Appended(usize),
}

/// State of one terminal session.
#[derive(Clone, Debug, Default)]
pub struct Session {
    transcript: Transcript,
    buffer: String,
    history: CommandHistory,
    candidates: Vec<&'static str>,
    panel_visible: bool,
    booted: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    #[cfg(test)]
    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    /// Candidates to show in the suggestion panel, if it is visible.
    pub fn visible_candidates(&self) -> Option<&[&'static str]> {
        (self.panel_visible && !self.candidates.is_empty()).then_some(self.candidates.as_slice())
    }

    pub fn is_booted(&self) -> bool {
        self.booted
    }

    // ------------------------------------------------------------------------
    // Boot
    // ------------------------------------------------------------------------

    /// Append a boot message to the transcript.
    pub fn push_output(&mut self, text: impl Into<String>) {
        self.transcript.push(DisplayedLine::output(text));
    }

    pub fn finish_boot(&mut self) {
        self.booted = true;
    }

    // ------------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------------

    /// Apply a key action. Keys are ignored until boot completes.
    pub fn handle(&mut self, action: KeyAction) {
        if !self.booted {
            log::trace!("ignoring {:?} during boot", action);
            return;
        }
        match action {
            KeyAction::Submit => {
                self.submit();
            }
            KeyAction::HistoryOlder => self.history_older(),
            KeyAction::HistoryNewer => self.history_newer(),
            KeyAction::Complete => self.complete(),
            KeyAction::Dismiss => self.dismiss(),
            KeyAction::ClearScreen => self.clear_screen(),
            KeyAction::Interrupt => self.interrupt(),
            KeyAction::Ignore => {}
        }
    }

    /// Run the command in the buffer (Enter).
    pub fn submit(&mut self) -> Submitted {
        let input = self.buffer.trim().to_string();
        if input.is_empty() {
            return Submitted::Ignored;
        }

        self.history.push(&input);
        self.buffer.clear();
        self.panel_visible = false;

        if matches!(Command::parse(&input), Ok(Command::Clear)) {
            log::debug!("clear: discarding {} lines", self.transcript.len());
            self.transcript.clear();
            return Submitted::Cleared;
        }

        let output = resolve(&input);
        let appended = output.len() + 1;
        log::debug!(
            "submit {:?}: {} output lines, {} in history",
            input,
            output.len(),
            self.history.len()
        );
        self.transcript.push(DisplayedLine::input(input));
        self.transcript
            .extend(output.into_iter().map(DisplayedLine::output));
        Submitted::Appended(appended)
    }

    /// Recall the previous command (ArrowUp).
    pub fn history_older(&mut self) {
        let recall = self.history.older();
        Self::apply_recall(&mut self.buffer, recall);
    }

    /// Recall the next command (ArrowDown).
    pub fn history_newer(&mut self) {
        let recall = self.history.newer();
        Self::apply_recall(&mut self.buffer, recall);
    }

    fn apply_recall(buffer: &mut String, recall: Recall<'_>) {
        match recall {
            Recall::Entry(cmd) => {
                buffer.clear();
                buffer.push_str(cmd);
            }
            Recall::Cleared => buffer.clear(),
            Recall::Unchanged => {}
        }
    }

    /// Tab completion.
    pub fn complete(&mut self) {
        match autocomplete(&self.buffer) {
            AutocompleteResult::Single(name) => {
                self.buffer = name.to_string();
                self.candidates = vec![name];
                self.panel_visible = false;
            }
            AutocompleteResult::Multiple(matches) => {
                self.candidates = matches;
                self.panel_visible = true;
            }
            AutocompleteResult::None => {}
        }
    }

    /// Hide the suggestion panel (Escape).
    pub fn dismiss(&mut self) {
        self.panel_visible = false;
    }

    /// Discard the transcript (Ctrl+K / Ctrl+L).
    pub fn clear_screen(&mut self) {
        if self.transcript.is_empty() {
            return;
        }
        log::debug!("clear screen: discarding {} lines", self.transcript.len());
        self.transcript.clear();
    }

    /// Abandon the current input (Ctrl+C).
    pub fn interrupt(&mut self) {
        self.buffer.clear();
        self.panel_visible = false;
    }

    /// Replace the buffer after the user typed or deleted text.
    pub fn edit(&mut self, value: impl Into<String>) {
        self.buffer = value.into();
        self.candidates = candidates(&self.buffer);
        self.panel_visible = self.candidates.len() > 1;
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::terminal::LineKind;

    fn booted() -> Session {
        let mut s = Session::new();
        s.finish_boot();
        s
    }

    fn run(s: &mut Session, cmd: &str) -> Submitted {
        s.edit(cmd);
        s.submit()
    }

    fn texts(s: &Session) -> Vec<String> {
        s.transcript().iter().map(|l| l.text.clone()).collect()
    }

    #[test]
    fn test_submit_appends_input_and_output() {
        let mut s = booted();
        let result = run(&mut s, "pwd");
        assert_eq!(result, Submitted::Appended(2));
        assert_eq!(texts(&s), vec!["pwd", "/home/lakshay/portfolio"]);
        let kinds: Vec<_> = s.transcript().iter().map(|l| l.kind).collect();
        assert_eq!(kinds, vec![LineKind::Input, LineKind::Output]);
        assert_eq!(s.buffer(), "");
    }

    #[test]
    fn test_submit_appends_one_line_per_output_line() {
        let mut s = booted();
        let expected = resolve("skills").len() + 1;
        assert_eq!(run(&mut s, "skills"), Submitted::Appended(expected));
        assert_eq!(s.transcript().len(), expected);
    }

    #[test]
    fn test_submit_echoes_trimmed_input() {
        let mut s = booted();
        run(&mut s, "  About  ");
        assert_eq!(s.transcript().iter().next().map(|l| l.text.as_str()), Some("About"));
        assert_eq!(s.history().entries(), &["About".to_string()]);
    }

    #[test]
    fn test_submit_blank_is_noop() {
        let mut s = booted();
        s.edit("   ");
        assert_eq!(s.submit(), Submitted::Ignored);
        assert!(s.transcript().is_empty());
        assert!(s.history().is_empty());
        assert_eq!(s.buffer(), "   ");
    }

    #[test]
    fn test_submit_unknown_command() {
        let mut s = booted();
        run(&mut s, "lsx");
        assert_eq!(
            texts(&s),
            vec![
                "lsx",
                "Command 'lsx' not found.",
                "Did you mean: ls?",
                "Type 'help' to see all available commands.",
            ]
        );
    }

    #[test]
    fn test_error_lines_are_error_kind() {
        let mut s = booted();
        run(&mut s, "exit");
        assert!(
            s.transcript()
                .iter()
                .any(|l| l.kind == LineKind::Error && l.text.starts_with("Error:"))
        );
    }

    #[test]
    fn test_clear_discards_transcript() {
        let mut s = booted();
        run(&mut s, "about");
        run(&mut s, "ls");
        assert_eq!(run(&mut s, "clear"), Submitted::Cleared);
        assert!(s.transcript().is_empty());
        // clear is still recorded for recall
        assert_eq!(s.history().len(), 3);
    }

    #[test]
    fn test_clear_is_case_insensitive() {
        let mut s = booted();
        run(&mut s, "about");
        assert_eq!(run(&mut s, " CLEAR "), Submitted::Cleared);
        assert!(s.transcript().is_empty());
    }

    #[test]
    fn test_history_navigation() {
        let mut s = booted();
        run(&mut s, "ls");
        run(&mut s, "pwd");

        s.history_older();
        assert_eq!(s.buffer(), "pwd");
        s.history_older();
        assert_eq!(s.buffer(), "ls");
        s.history_older();
        assert_eq!(s.buffer(), "ls");

        s.history_newer();
        assert_eq!(s.buffer(), "pwd");
        s.history_newer();
        assert_eq!(s.buffer(), "");
        assert_eq!(s.history().cursor(), None);
    }

    #[test]
    fn test_history_newer_without_cursor_keeps_buffer() {
        let mut s = booted();
        run(&mut s, "ls");
        s.edit("ab");
        s.history_newer();
        assert_eq!(s.buffer(), "ab");
    }

    #[test]
    fn test_submit_resets_cursor() {
        let mut s = booted();
        run(&mut s, "ls");
        run(&mut s, "pwd");
        s.history_older();
        s.history_older();
        s.submit();
        assert_eq!(s.history().cursor(), None);
        assert_eq!(s.history().entries().last().map(String::as_str), Some("ls"));
    }

    #[test]
    fn test_tab_single_match_fills_buffer() {
        let mut s = booted();
        s.edit("ab");
        s.complete();
        assert_eq!(s.buffer(), "about");
        assert!(s.visible_candidates().is_none());

        s.edit("s");
        s.complete();
        assert_eq!(s.buffer(), "skills");
    }

    #[test]
    fn test_tab_multiple_matches_show_panel() {
        let mut s = booted();
        s.edit("p");
        s.dismiss();
        s.complete();
        assert_eq!(s.buffer(), "p");
        assert_eq!(s.visible_candidates(), Some(&["projects", "pwd"][..]));
    }

    #[test]
    fn test_tab_on_empty_buffer_is_noop() {
        let mut s = booted();
        s.complete();
        assert_eq!(s.buffer(), "");
        assert!(s.visible_candidates().is_none());
    }

    #[test]
    fn test_tab_without_match_is_noop() {
        let mut s = booted();
        s.edit("zz");
        s.complete();
        assert_eq!(s.buffer(), "zz");
        assert!(s.visible_candidates().is_none());
    }

    #[test]
    fn test_edit_shows_panel_only_for_several_candidates() {
        let mut s = booted();
        s.edit("a");
        assert_eq!(s.visible_candidates(), Some(&["about", "awards"][..]));
        s.edit("ab");
        assert!(s.visible_candidates().is_none());
        s.edit("");
        assert!(s.visible_candidates().is_none());
    }

    #[test]
    fn test_escape_hides_panel_only() {
        let mut s = booted();
        s.edit("c");
        assert!(s.visible_candidates().is_some());
        s.dismiss();
        assert!(s.visible_candidates().is_none());
        assert_eq!(s.buffer(), "c");
    }

    #[test]
    fn test_history_recall_keeps_panel() {
        let mut s = booted();
        run(&mut s, "ls");
        s.edit("a");
        assert!(s.visible_candidates().is_some());
        s.handle(KeyAction::HistoryOlder);
        assert_eq!(s.buffer(), "ls");
        assert_eq!(s.visible_candidates(), Some(&["about", "awards"][..]));
        s.handle(KeyAction::HistoryNewer);
        assert_eq!(s.buffer(), "");
        assert!(s.visible_candidates().is_some());
    }

    #[test]
    fn test_submit_hides_panel() {
        let mut s = booted();
        s.edit("c");
        s.submit();
        assert!(s.visible_candidates().is_none());
    }

    #[test]
    fn test_clear_shortcut() {
        let mut s = booted();
        run(&mut s, "about");
        s.edit("pw");
        s.handle(KeyAction::ClearScreen);
        assert!(s.transcript().is_empty());
        assert_eq!(s.buffer(), "pw");
        assert_eq!(s.history().len(), 1);
    }

    #[test]
    fn test_clear_shortcut_on_empty_screen_is_noop() {
        let mut s = booted();
        let revision = s.transcript().revision();
        s.clear_screen();
        assert_eq!(s.transcript().revision(), revision);
    }

    #[test]
    fn test_typing_leaves_transcript_untouched() {
        let mut s = booted();
        run(&mut s, "whoami");
        let revision = s.transcript().revision();
        s.edit("a");
        s.handle(KeyAction::Complete);
        s.handle(KeyAction::HistoryOlder);
        s.handle(KeyAction::Dismiss);
        s.handle(KeyAction::Interrupt);
        assert_eq!(s.transcript().revision(), revision);
        run(&mut s, "pwd");
        assert_ne!(s.transcript().revision(), revision);
    }

    #[test]
    fn test_history_older_on_empty_history_keeps_buffer() {
        let mut s = booted();
        s.edit("ab");
        s.history_older();
        assert_eq!(s.buffer(), "ab");
    }

    #[test]
    fn test_interrupt_clears_buffer() {
        let mut s = booted();
        s.edit("a");
        s.handle(KeyAction::Interrupt);
        assert_eq!(s.buffer(), "");
        assert!(s.visible_candidates().is_none());
    }

    #[test]
    fn test_handle_routes_actions() {
        let mut s = booted();
        s.edit("wh");
        s.handle(KeyAction::Complete);
        assert_eq!(s.buffer(), "whoami");
        s.handle(KeyAction::Submit);
        assert_eq!(s.transcript().iter().next().map(|l| l.text.as_str()), Some("whoami"));
        s.handle(KeyAction::HistoryOlder);
        assert_eq!(s.buffer(), "whoami");
        s.handle(KeyAction::HistoryNewer);
        assert_eq!(s.buffer(), "");
    }

    #[test]
    fn test_keys_ignored_until_booted() {
        let mut s = Session::new();
        s.edit("ls");
        s.handle(KeyAction::Submit);
        assert!(s.transcript().is_empty());
        assert_eq!(s.buffer(), "ls");

        s.finish_boot();
        s.handle(KeyAction::Submit);
        assert_eq!(s.transcript().len(), resolve("ls").len() + 1);
    }

    #[test]
    fn test_boot_output_before_commands() {
        let mut s = Session::new();
        s.push_output("Mounting file systems... ✓");
        s.finish_boot();
        assert!(s.is_booted());
        assert_eq!(s.transcript().len(), 1);
        assert!(s.history().is_empty());
    }
}
