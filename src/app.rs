//! Root application module.
//!
//! Contains the main App component, AppContext definition, TerminalState,
//! and application-level setup logic following Leptos conventions.

use leptos::prelude::*;

use crate::components::Shell;
use crate::config::{SiteConfig, site};
use crate::core::{KeyAction, Session};
use crate::models::DisplayedLine;

// ============================================================================
// TerminalState
// ============================================================================

/// Reactive wrapper around the terminal [`Session`].
///
/// All transitions go through `update`, so each one runs to completion
/// before subscribers re-render. The transcript and the candidate panel are
/// exposed through memos so keystrokes only re-render the input line.
///
/// # Note
///
/// This struct is `Copy` because its fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct TerminalState {
    pub session: RwSignal<Session>,
    /// Transcript change counter.
    pub revision: Memo<u64>,
    /// Candidates of the visible suggestion panel.
    pub panel: Memo<Option<Vec<&'static str>>>,
}

impl TerminalState {
    pub fn new() -> Self {
        let session = RwSignal::new(Session::new());
        Self {
            session,
            revision: Memo::new(move |_| session.with(|s| s.transcript().revision())),
            panel: Memo::new(move |_| {
                session.with(|s| s.visible_candidates().map(<[&'static str]>::to_vec))
            }),
        }
    }

    /// Apply a key press to the session.
    pub fn dispatch(&self, action: KeyAction) {
        self.session.update(|s| s.handle(action));
    }

    /// Record new input text typed by the user.
    pub fn edit(&self, value: String) {
        self.session.update(|s| s.edit(value));
    }

    /// Append a boot message.
    pub fn push_output(&self, text: &str) {
        self.session.update(|s| s.push_output(text));
    }

    pub fn finish_boot(&self) {
        self.session.update(Session::finish_boot);
    }

    pub fn is_booted(&self) -> bool {
        self.session.with(Session::is_booted)
    }

    /// Current input buffer.
    pub fn buffer(&self) -> String {
        self.session.with(|s| s.buffer().to_string())
    }

    /// Transcript lines for rendering.
    ///
    /// Tracks only the transcript revision, not the input buffer.
    pub fn lines(&self) -> Vec<DisplayedLine> {
        self.revision.track();
        self.session.with_untracked(|s| s.transcript().to_vec())
    }

    /// Candidates of the visible suggestion panel.
    pub fn candidates(&self) -> Option<Vec<&'static str>> {
        self.panel.get()
    }
}

impl Default for TerminalState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Terminal session (transcript, input, history).
    pub terminal: TerminalState,

    /// Site identity and boot script.
    pub site: &'static SiteConfig,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            terminal: TerminalState::new(),
            site: site(),
        }
    }

    /// Prompt shown before submitted commands (`user@host:~$`).
    pub fn prompt(&self) -> String {
        self.site.prompt()
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the main Shell component
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #0a0e14;
                    color: #e0e0e0;
                    font-family: 'Courier New', monospace;
                ">
                    <h1 style="color: #ff6b6b; margin-bottom: 1rem;">
                        "Kernel panic"
                    </h1>
                    <p style="color: #a0a0a0; margin-bottom: 2rem;">
                        "The terminal crashed. Please try reloading the page."
                    </p>
                    <ul style="color: #ff6b6b; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="
                            background: #39d353;
                            color: #0a0e14;
                            border: none;
                            padding: 0.75rem 2rem;
                            border-radius: 4px;
                            cursor: pointer;
                            font-family: 'Courier New', monospace;
                            font-size: 1rem;
                        "
                    >
                        "Reboot"
                    </button>
                </div>
            }
        >
            <Shell />
        </ErrorBoundary>
    }
}
