//! Keyboard bindings of the terminal input.

/// A session transition requested by a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Enter
    Submit,
    /// ArrowUp
    HistoryOlder,
    /// ArrowDown
    HistoryNewer,
    /// Tab
    Complete,
    /// Escape
    Dismiss,
    /// Ctrl+K or Ctrl+L
    ClearScreen,
    /// Ctrl+C
    Interrupt,
    /// Any other key; text changes arrive through input events.
    Ignore,
}

impl KeyAction {
    /// Map a `KeyboardEvent.key` value and the Ctrl/Meta state to an action.
    pub fn from_key(key: &str, ctrl: bool) -> Self {
        if ctrl {
            return match key.to_ascii_lowercase().as_str() {
                "k" | "l" => Self::ClearScreen,
                "c" => Self::Interrupt,
                _ => Self::Ignore,
            };
        }
        match key {
            "Enter" => Self::Submit,
            "ArrowUp" => Self::HistoryOlder,
            "ArrowDown" => Self::HistoryNewer,
            "Tab" => Self::Complete,
            "Escape" => Self::Dismiss,
            _ => Self::Ignore,
        }
    }

    /// Whether the browser's default handling of the key must be suppressed.
    ///
    /// Tab would move focus, the arrows would move the caret, and Ctrl+K/L
    /// are browser shortcuts. Ctrl+C keeps its copy behavior.
    pub fn prevents_default(self) -> bool {
        matches!(
            self,
            Self::HistoryOlder | Self::HistoryNewer | Self::Complete | Self::ClearScreen
        )
    }
}
